//! Session configuration

use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_API_BASE: &str = "https://www.1secmail.com/api/v1/";
const DEFAULT_DOMAINS: &str = "1secmail.com,1secmail.org,1secmail.net";
const DEFAULT_LOCAL_PART_LEN: usize = 10;
const DEFAULT_TIMEOUT_SECS: u64 = 8;
const DEFAULT_ARCHIVE_DIR: &str = "saved-messages";

/// Configuration for a disposable mail session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Base URL of the remote mail API.
    pub api_base: String,
    /// Domains the remote service accepts addresses on.
    pub domains: Vec<String>,
    /// Length of the random local-part of generated addresses.
    pub local_part_len: usize,
    /// Upper bound on every remote call.
    pub timeout: Duration,
    /// Directory saved messages are written to.
    pub archive_dir: PathBuf,
}

impl SessionConfig {
    /// Load session configuration from environment variables
    ///
    /// Reads from `.env` file if present. All variables are optional
    /// (with defaults):
    /// - `TEMPMAIL_API_BASE` (default: the 1secmail API)
    /// - `TEMPMAIL_DOMAINS` (comma-separated allow-list)
    /// - `TEMPMAIL_LOCAL_PART_LEN` (default: `10`)
    /// - `TEMPMAIL_TIMEOUT_SECS` (default: `8`)
    /// - `TEMPMAIL_ARCHIVE_DIR` (default: `saved-messages`)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if a numeric variable does not parse
    /// or the domain list is empty.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let domains: Vec<String> = env::var("TEMPMAIL_DOMAINS")
            .unwrap_or_else(|_| DEFAULT_DOMAINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|d| !d.is_empty())
            .map(str::to_string)
            .collect();
        if domains.is_empty() {
            return Err(Error::Config("TEMPMAIL_DOMAINS is empty".into()));
        }

        let local_part_len = env::var("TEMPMAIL_LOCAL_PART_LEN")
            .unwrap_or_else(|_| DEFAULT_LOCAL_PART_LEN.to_string())
            .parse()
            .map_err(|e| Error::Config(format!("Invalid TEMPMAIL_LOCAL_PART_LEN: {e}")))?;

        let timeout_secs: u64 = env::var("TEMPMAIL_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .map_err(|e| Error::Config(format!("Invalid TEMPMAIL_TIMEOUT_SECS: {e}")))?;

        Ok(Self {
            api_base: env::var("TEMPMAIL_API_BASE")
                .unwrap_or_else(|_| DEFAULT_API_BASE.to_string()),
            domains,
            local_part_len,
            timeout: Duration::from_secs(timeout_secs),
            archive_dir: env::var("TEMPMAIL_ARCHIVE_DIR")
                .unwrap_or_else(|_| DEFAULT_ARCHIVE_DIR.to_string())
                .into(),
        })
    }
}
