//! Trailing-edge debounce.
//!
//! Each event takes a [`Ticket`] and arms a timer. When a timer fires, only
//! the ticket from the most recent event is allowed to run the handler, so a
//! burst collapses to one call after the last event.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Clone, Debug, Default)]
pub struct Debouncer {
    latest: u64,
    fired: bool,
}

impl Debouncer {
    pub fn trigger(&mut self) -> Ticket {
        self.latest += 1;
        self.fired = false;
        Ticket(self.latest)
    }

    /// Whether the handler should run for this ticket. A ticket is honoured
    /// at most once.
    pub fn fire(&mut self, ticket: Ticket) -> bool {
        if ticket.0 != self.latest || self.fired {
            return false;
        }
        self.fired = true;
        true
    }
}
