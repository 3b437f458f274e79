//! Test data model for the fake mail API
//!
//! Provides a builder-style API for constructing mailbox state:
//!
//! ```ignore
//! let mailbox = MailboxBuilder::new()
//!     .message(1, "alice@example.com", "Hi", "First body")
//!     .message(2, "bob@example.com", "Yo", "Second body")
//!     .build();
//! ```
//!
//! The `Mailbox` is shared with the fake server via `Arc<Mutex<_>>` so
//! tests can add or remove messages and flip failure flags between
//! requests.

/// The remote mailbox as the fake API serves it.
///
/// The fake serves the same mailbox for every login/domain pair:
/// session addresses are generated randomly, so tests cannot predict
/// which address a session will ask about.
#[derive(Debug, Clone, Default)]
pub struct Mailbox {
    pub messages: Vec<TestMessage>,
    /// Answer every listing with HTTP 500.
    pub fail_listing: bool,
    /// Answer every listing with a payload missing required fields.
    pub malformed_listing: bool,
    /// Requests served so far (any endpoint).
    pub hits: u64,
}

/// One message held by the fake service.
#[derive(Debug, Clone)]
pub struct TestMessage {
    pub id: u64,
    pub from: String,
    pub subject: String,
    pub body: String,
}

/// Builder for constructing a `Mailbox` step by step.
pub struct MailboxBuilder {
    mailbox: Mailbox,
}

impl MailboxBuilder {
    pub fn new() -> Self {
        Self {
            mailbox: Mailbox::default(),
        }
    }

    /// Add a message to the mailbox.
    pub fn message(mut self, id: u64, from: &str, subject: &str, body: &str) -> Self {
        self.mailbox.messages.push(TestMessage {
            id,
            from: from.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        self
    }

    /// Consume the builder and return the finished `Mailbox`.
    pub fn build(self) -> Mailbox {
        self.mailbox
    }
}
