//! Disposable email session client
//!
//! Obtains a throwaway address for a public temp-mail HTTP API, polls
//! the remote inbox on demand, reports newly arrived mail, and fetches
//! or saves individual message bodies. The remote service is a single
//! unauthenticated JSON API; all session state lives in the local
//! [`TempMailSession`].

mod address;
mod archive;
mod config;
mod error;
mod inbox;
mod message;
mod session;
mod transport;

pub use address::{Address, AddressGenerator};
pub use archive::MessageArchiver;
pub use config::SessionConfig;
pub use error::{Error, Result};
pub use inbox::InboxState;
pub use message::{MessageBody, MessageSummary};
pub use session::TempMailSession;
pub use transport::MailTransport;
