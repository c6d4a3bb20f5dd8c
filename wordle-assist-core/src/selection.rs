use crate::letter::Letter;
use crate::popup::PopupPosition;

/// Where a selection came from. Only used for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionSource {
    Keyboard,
    OnScreenKey,
}

/// The selected letter and its open popup travel together: there is no
/// state with a popup but no letter, or a letter but no popup.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected {
        letter: Letter,
        position: PopupPosition,
    },
}

impl Selection {
    #[must_use]
    pub const fn letter(&self) -> Option<Letter> {
        match self {
            Self::Idle => None,
            Self::Selected { letter, .. } => Some(*letter),
        }
    }

    #[must_use]
    pub const fn popup_position(&self) -> Option<PopupPosition> {
        match self {
            Self::Idle => None,
            Self::Selected { position, .. } => Some(*position),
        }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }

    #[must_use]
    pub fn is_selected(&self, letter: Letter) -> bool {
        self.letter() == Some(letter)
    }
}
