//! HTTP adapter for the remote mail API
//!
//! Stateless request/response calls against a 1secmail-style JSON API:
//! `?action=getMessages&login=&domain=` lists an inbox,
//! `?action=readMessage&login=&domain=&id=` fetches one message.
//! Payload validation lives here: a malformed or incomplete response
//! surfaces as [`Error::Transport`], never as a silent empty result.
//! Retry policy belongs to the caller.

use crate::address::Address;
use crate::config::SessionConfig;
use crate::error::{Error, Result};
use crate::message::{MessageBody, MessageSummary};
use reqwest::StatusCode;
use tracing::{debug, info};

/// Stateless adapter to the remote mail API
pub struct MailTransport {
    http: reqwest::Client,
    api_base: String,
}

impl MailTransport {
    /// Build a transport with the configured request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] if the HTTP client cannot be
    /// built.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| Error::Transport(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            api_base: config.api_base.clone(),
        })
    }

    /// List the remote inbox for `address`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on network failure, a non-2xx
    /// status, or a payload missing required fields.
    pub async fn list_inbox(&self, address: &Address) -> Result<Vec<MessageSummary>> {
        debug!("Listing inbox for {}", address);

        let response = self
            .http
            .get(&self.api_base)
            .query(&[
                ("action", "getMessages"),
                ("login", address.local_part.as_str()),
                ("domain", address.domain.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Inbox listing failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Transport(format!("Inbox listing returned {status}")));
        }

        let payload = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Inbox listing failed: {e}")))?;
        let summaries: Vec<MessageSummary> = serde_json::from_str(&payload)
            .map_err(|e| Error::Transport(format!("Malformed inbox payload: {e}")))?;

        info!("Remote inbox lists {} message(s)", summaries.len());
        Ok(summaries)
    }

    /// Fetch one message by id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the remote no longer knows the
    /// id, [`Error::Transport`] for network or protocol failure.
    pub async fn fetch_message(&self, address: &Address, id: u64) -> Result<MessageBody> {
        debug!("Fetching message {} for {}", id, address);

        let id_param = id.to_string();
        let response = self
            .http
            .get(&self.api_base)
            .query(&[
                ("action", "readMessage"),
                ("login", address.local_part.as_str()),
                ("domain", address.domain.as_str()),
                ("id", id_param.as_str()),
            ])
            .send()
            .await
            .map_err(|e| Error::Transport(format!("Message fetch failed: {e}")))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(id.to_string()));
        }
        if !status.is_success() {
            return Err(Error::Transport(format!("Message fetch returned {status}")));
        }

        let payload = response
            .text()
            .await
            .map_err(|e| Error::Transport(format!("Message fetch failed: {e}")))?;
        serde_json::from_str(&payload)
            .map_err(|e| Error::Transport(format!("Malformed message payload: {e}")))
    }
}
