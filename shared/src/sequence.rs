use std::cell::Cell;

/// Identifies one issued request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestTicket(u64);

/// Last-issued-wins bookkeeping for a view's fetches.
///
/// A view issues a ticket before each fetch and applies the response only if
/// that ticket is still current. Issuing a newer ticket, or calling
/// [`RequestSequence::invalidate`] on unmount, makes older responses stale.
#[derive(Debug, Default)]
pub struct RequestSequence {
    latest: Cell<u64>,
}

impl RequestSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&self) -> RequestTicket {
        let next = self.latest.get().wrapping_add(1);
        self.latest.set(next);
        RequestTicket(next)
    }

    pub fn is_current(&self, ticket: RequestTicket) -> bool {
        self.latest.get() == ticket.0
    }

    /// Supersedes whatever is in flight without starting anything new.
    pub fn invalidate(&self) {
        self.issue();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latest_ticket_wins() {
        let seq = RequestSequence::new();
        let first = seq.issue();
        let second = seq.issue();

        // The slower first response lands after the second was issued.
        assert!(!seq.is_current(first));
        assert!(seq.is_current(second));
        assert!(second > first);
    }

    #[test]
    fn test_invalidate_drops_in_flight() {
        let seq = RequestSequence::new();
        let ticket = seq.issue();

        seq.invalidate();

        assert!(!seq.is_current(ticket));
    }
}
