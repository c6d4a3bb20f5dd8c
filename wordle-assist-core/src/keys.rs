use crate::color::ColorTag;
use crate::letter::Letter;

/// What a physical key press asks the page to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Select(Letter),
    Backspace,
    Submit,
    /// Escape leaves the page for the reset endpoint.
    Reset,
    Color(ColorTag),
}

impl KeyCommand {
    /// Letter, Backspace and Enter replace the browser's default handling.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        matches!(self, Self::Select(_) | Self::Backspace | Self::Submit)
    }
}

/// Map a `KeyboardEvent.key` value to a command. Case-insensitive.
#[must_use]
pub fn command_for_key(key: &str) -> Option<KeyCommand> {
    if let Some(letter) = Letter::from_key(key) {
        return Some(KeyCommand::Select(letter));
    }
    match key.to_ascii_lowercase().as_str() {
        "backspace" => Some(KeyCommand::Backspace),
        "enter" => Some(KeyCommand::Submit),
        "escape" => Some(KeyCommand::Reset),
        "1" => Some(KeyCommand::Color(ColorTag::Correct)),
        "2" => Some(KeyCommand::Color(ColorTag::Present)),
        "3" => Some(KeyCommand::Color(ColorTag::Absent)),
        _ => None,
    }
}
