//! Transient "copied" indicator.
//!
//! Each successful copy issues a fresh [`CopyTicket`] and invalidates the
//! previous one. A delayed reset only clears the flag when it presents the
//! current ticket, so overlapping copies cannot cut each other's indicator
//! short: the flag drops once, [`COPIED_RESET`] after the latest copy.

use std::time::Duration;

/// How long the indicator stays on after a copy
pub const COPIED_RESET: Duration = Duration::from_millis(2000);

/// Handle for one scheduled reset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CopyTicket(u64);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CopyFeedback {
    current: Option<CopyTicket>,
    issued: u64,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_copied(&self) -> bool {
        self.current.is_some()
    }

    /// Turn the flag on and replace any outstanding ticket.
    pub fn mark_copied(&mut self) -> CopyTicket {
        self.issued += 1;
        let ticket = CopyTicket(self.issued);
        self.current = Some(ticket);
        ticket
    }

    /// Turn the flag off if `ticket` is still current.
    ///
    /// Returns whether the flag was cleared.
    pub fn expire(&mut self, ticket: CopyTicket) -> bool {
        if self.current == Some(ticket) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
