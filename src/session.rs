//! Session orchestration
//!
//! [`TempMailSession`] is the single stateful object in the crate: it
//! owns the active [`Address`] and [`InboxState`] and sequences every
//! operation so a caller never observes them out of sync.

use crate::address::{Address, AddressGenerator};
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::inbox::InboxState;
use crate::message::{MessageBody, MessageSummary};
use crate::transport::MailTransport;
use tracing::info;

/// A disposable mail session
///
/// Created via [`start`](Self::start); driven by explicit, synchronous
/// [`refresh`](Self::refresh) calls. No operation is fatal to the
/// session: a failed refresh or read leaves the prior state untouched
/// and the session usable.
pub struct TempMailSession {
    generator: AddressGenerator,
    transport: MailTransport,
    address: Address,
    inbox: InboxState,
}

impl TempMailSession {
    /// Start a session: generate the first address and bind an empty
    /// inbox to it. Address generation is purely local, so no remote
    /// call is made here.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] on an empty domain allow-list and
    /// [`Error::Transport`] if the HTTP client cannot be built.
    pub fn start(config: &SessionConfig) -> Result<Self> {
        let generator = AddressGenerator::new(config.domains.clone(), config.local_part_len)?;
        let transport = MailTransport::new(config)?;
        let address = generator.generate();
        info!("Session started for {}", address);

        Ok(Self {
            generator,
            transport,
            address,
            inbox: InboxState::default(),
        })
    }

    /// The session's active address.
    #[must_use]
    pub const fn address(&self) -> &Address {
        &self.address
    }

    /// The last known inbox snapshot.
    #[must_use]
    pub const fn inbox(&self) -> &InboxState {
        &self.inbox
    }

    /// Poll the remote inbox and return the newly arrived messages.
    ///
    /// All-or-nothing: the snapshot is replaced only after the remote
    /// listing fully succeeds, so a failed or interrupted refresh
    /// leaves the previous snapshot exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on network, status, or payload
    /// failure.
    pub async fn refresh(&mut self) -> Result<Vec<MessageSummary>> {
        let summaries = self.transport.list_inbox(&self.address).await?;
        Ok(self.inbox.replace(summaries))
    }

    /// Fetch the full body of a message known to the current snapshot.
    ///
    /// An id no `refresh` has reported fails locally, without a remote
    /// call, to distinguish a caller mistake from a remote expiry.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if `id` is not in the current
    /// snapshot or the remote has expired it, [`Error::Transport`] for
    /// network or protocol failure.
    pub async fn read(&self, id: u64) -> Result<MessageBody> {
        if !self.inbox.contains(id) {
            return Err(Error::NotFound(id.to_string()));
        }
        self.transport.fetch_message(&self.address, id).await
    }

    /// Discard the current address and inbox and activate a fresh
    /// address. Purely in-memory, so rotation always succeeds.
    ///
    /// This is the only operation that invalidates previously observed
    /// message ids: after a rotate they are no longer resolvable.
    pub fn rotate(&mut self) -> &Address {
        self.address = self.generator.generate();
        self.inbox = InboxState::default();
        info!("Rotated session to {}", self.address);
        &self.address
    }
}
