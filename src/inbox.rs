//! In-memory inbox snapshot and delta computation
//!
//! The remote mailbox is treated as append-only per address, so newly
//! arrived mail is exactly the set of ids present in the latest
//! listing but absent from the previous one. The comparison is a pure
//! id-set difference; remote reordering does not produce spurious
//! arrivals.

use crate::message::MessageSummary;
use std::collections::HashSet;
use tracing::warn;

/// Snapshot of the message summaries known for the active address.
///
/// Valid only for the address it was captured from; rotating the
/// address discards it wholesale. [`replace`](Self::replace) swaps the
/// entire snapshot, it never merges.
#[derive(Debug, Default)]
pub struct InboxState {
    summaries: Vec<MessageSummary>,
}

impl InboxState {
    /// Replace the stored snapshot with `new_summaries` and return the
    /// delta: every summary whose id the previous snapshot did not
    /// contain, in remote listing order.
    ///
    /// Ids that vanished from the remote listing are absorbed (the
    /// snapshot is authoritative) and logged, since the service is
    /// expected to be append-only until messages expire.
    pub fn replace(&mut self, new_summaries: Vec<MessageSummary>) -> Vec<MessageSummary> {
        let known: HashSet<u64> = self.summaries.iter().map(|m| m.id).collect();
        let listed: HashSet<u64> = new_summaries.iter().map(|m| m.id).collect();
        let vanished = known.difference(&listed).count();
        if vanished > 0 {
            warn!("{} known message id(s) vanished from the remote inbox", vanished);
        }

        let delta: Vec<MessageSummary> = new_summaries
            .iter()
            .filter(|m| !known.contains(&m.id))
            .cloned()
            .collect();
        self.summaries = new_summaries;
        delta
    }

    /// Number of messages in the current snapshot.
    #[must_use]
    pub fn size(&self) -> usize {
        self.summaries.len()
    }

    /// Look up a summary by message id.
    #[must_use]
    pub fn lookup(&self, id: u64) -> Option<&MessageSummary> {
        self.summaries.iter().find(|m| m.id == id)
    }

    /// Whether `id` is part of the current snapshot.
    #[must_use]
    pub fn contains(&self, id: u64) -> bool {
        self.summaries.iter().any(|m| m.id == id)
    }

    /// The full snapshot, in remote listing order.
    #[must_use]
    pub fn summaries(&self) -> &[MessageSummary] {
        &self.summaries
    }
}
