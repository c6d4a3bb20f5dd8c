//! Delayed transitions.
//!
//! Every timed transition is requested with a fresh [`Ticket`]. When the
//! timer fires the owner compares tickets and ignores anything stale, so a
//! late callback can never undo a newer state.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Default)]
pub struct TicketIssuer {
    next: u64,
}

impl TicketIssuer {
    pub fn issue(&mut self) -> Ticket {
        self.next = self.next.wrapping_add(1);
        Ticket(self.next)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    DismissMessage,
    ThemeIcon,
    ModalFadeIn,
    ModalFadeOut,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub ticket: Ticket,
    pub delay_ms: u32,
}
