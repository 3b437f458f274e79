//! Fake remote mail API for integration testing
//!
//! An in-process HTTP server that serves the two read-only endpoints
//! the transport uses, backed by mutable mailbox state so tests can
//! deliver mail, expire messages, and inject failures between
//! requests.
//!
//! ## Module layout
//!
//! - `server` -- TCP listener, request parsing, and routing
//! - `mailbox` -- test data model (messages, builder, failure flags)

pub mod mailbox;
mod server;

pub use mailbox::MailboxBuilder;
pub use server::FakeMailServer;
