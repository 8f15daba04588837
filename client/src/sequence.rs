use std::sync::atomic::{AtomicU64, Ordering};

/// Orders the responses of one action kind. A response may touch local state
/// only if its ticket is newer than the last one applied.
#[derive(Debug, Default)]
pub(crate) struct Sequence {
    issued: AtomicU64,
    applied: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub(crate) struct Ticket(u64);

impl Sequence {
    pub(crate) fn issue(&self) -> Ticket {
        Ticket(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    /// Marks `ticket` applied. Returns `false` when a newer ticket already was.
    pub(crate) fn apply(&self, ticket: Ticket) -> bool {
        self.applied.fetch_max(ticket.0, Ordering::SeqCst) < ticket.0
    }

    /// Invalidates every ticket issued so far.
    pub(crate) fn supersede(&self) {
        let ticket = self.issue();
        self.apply(ticket);
    }
}
