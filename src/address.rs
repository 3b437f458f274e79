//! Disposable address generation
//!
//! Addresses are generated locally: a random local-part with enough
//! entropy to avoid colliding with other users of the shared public
//! service, on a domain from the configured allow-list. No remote
//! call is involved.

use crate::error::{Error, Result};
use rand::Rng;
use rand::distributions::Alphanumeric;
use std::fmt;

/// The disposable email identity active for a session.
///
/// Immutable once generated. Rotating a session produces a brand-new
/// `Address` and invalidates everything observed under the old one.
///
/// # Examples
///
/// ```
/// use tempmail_client::Address;
///
/// let address = Address {
///     local_part: "k3x9q1mzp0".to_string(),
///     domain: "1secmail.com".to_string(),
/// };
/// assert_eq!(address.to_string(), "k3x9q1mzp0@1secmail.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Address {
    pub local_part: String,
    pub domain: String,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.local_part, self.domain)
    }
}

/// Generates random addresses on domains the remote service accepts.
#[derive(Debug, Clone)]
pub struct AddressGenerator {
    domains: Vec<String>,
    local_part_len: usize,
}

impl AddressGenerator {
    /// Create a generator over the given domain allow-list.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if `domains` is empty, so that
    /// [`generate`](Self::generate) itself cannot fail.
    pub fn new(domains: Vec<String>, local_part_len: usize) -> Result<Self> {
        if domains.is_empty() {
            return Err(Error::Config("domain allow-list is empty".into()));
        }
        Ok(Self {
            domains,
            local_part_len,
        })
    }

    /// Generate a fresh address: a random lowercase alphanumeric
    /// local-part on one of the allowed domains.
    #[must_use]
    pub fn generate(&self) -> Address {
        let mut rng = rand::thread_rng();
        let local_part: String = (&mut rng)
            .sample_iter(&Alphanumeric)
            .take(self.local_part_len)
            .map(|b| char::from(b).to_ascii_lowercase())
            .collect();
        let domain = self.domains[rng.gen_range(0..self.domains.len())].clone();
        Address { local_part, domain }
    }
}
