use crate::timer::Ticket;

/// The auto-dismissing message popup.
///
/// The text is kept after dismissal so the popup can fade out with its
/// content; only `visible` decides whether it shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransientMessage {
    text: String,
    visible: Option<Ticket>,
}

impl TransientMessage {
    pub fn show(&mut self, text: impl Into<String>, ticket: Ticket) {
        self.text = text.into();
        self.visible = Some(ticket);
    }

    /// Hide the message if `ticket` belongs to the message still showing.
    pub fn dismiss(&mut self, ticket: Ticket) -> bool {
        if self.visible == Some(ticket) {
            self.visible = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible.is_some()
    }
}
