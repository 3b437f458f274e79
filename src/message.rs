//! Message data model
//!
//! Wire shapes follow the remote mail API: inbox listings carry
//! `{id, from, subject}`, a fetched message adds `textBody`. Extra
//! remote fields are ignored; a payload missing a required field fails
//! deserialization and is reported by the transport, never defaulted.

use serde::{Deserialize, Serialize};

/// A message as it appears in an inbox listing.
///
/// Identity is `id`, unique per address. A summary is immutable once
/// observed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSummary {
    pub id: u64,
    #[serde(rename = "from")]
    pub sender: String,
    pub subject: String,
}

/// A fully fetched message.
///
/// Created per read request and not cached; reading the same id twice
/// fetches twice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageBody {
    pub id: u64,
    #[serde(rename = "from")]
    pub sender: String,
    pub subject: String,
    #[serde(rename = "textBody")]
    pub body_text: String,
}
