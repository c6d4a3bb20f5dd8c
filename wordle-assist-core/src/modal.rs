//! Help modal visibility.
use crate::timer::Ticket;

/// `Opening` doubles as the close guard: clicks that arrive while the modal
/// is still fading in never close it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalState {
    #[default]
    Hidden,
    Opening(Ticket),
    Visible,
    Closing(Ticket),
}

impl ModalState {
    #[must_use]
    pub const fn is_displayed(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    #[must_use]
    pub const fn guard_active(self) -> bool {
        matches!(self, Self::Opening(_))
    }

    #[must_use]
    pub const fn is_fading_out(self) -> bool {
        matches!(self, Self::Closing(_))
    }

    /// Target opacity; the stylesheet transition animates toward it.
    #[must_use]
    pub const fn opacity(self) -> u8 {
        match self {
            Self::Hidden | Self::Opening(_) | Self::Closing(_) => 0,
            Self::Visible => 1,
        }
    }

    /// Opening always restarts the fade-in, including mid fade-out.
    #[must_use]
    pub const fn open(self, ticket: Ticket) -> Self {
        Self::Opening(ticket)
    }

    #[must_use]
    pub fn fade_in_elapsed(self, ticket: Ticket) -> Self {
        match self {
            Self::Opening(current) if current == ticket => Self::Visible,
            other => other,
        }
    }

    /// Start closing on an outside click. Returns `None` when the click must
    /// be ignored.
    #[must_use]
    pub const fn close(self, ticket: Ticket) -> Option<Self> {
        match self {
            Self::Visible => Some(Self::Closing(ticket)),
            Self::Hidden | Self::Opening(_) | Self::Closing(_) => None,
        }
    }

    #[must_use]
    pub fn fade_out_elapsed(self, ticket: Ticket) -> Self {
        match self {
            Self::Closing(current) if current == ticket => Self::Hidden,
            other => other,
        }
    }
}
