use std::time::Duration;

use serde::Deserialize;

use crate::error::Result;

/// Application configuration, supplied by the embedding front end. Every
/// field has a default, so an embedder with no opinions can use
/// `Config::default()`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    // non-secrets
    auth_delay_ms: u64,
    admin_username: String,
    // secrets
    admin_password: String,
}

impl Config {
    /// Parse a configuration from its JSON representation.
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Artificial delay applied to voter login, simulating the latency of
    /// a real authentication service. Not load-bearing; set to zero in
    /// tests.
    pub fn auth_delay(&self) -> Duration {
        Duration::from_millis(self.auth_delay_ms)
    }

    /// The administrator account name.
    pub fn admin_username(&self) -> &str {
        &self.admin_username
    }

    /// Check whether the given administrator credentials are correct.
    /// A plaintext comparison; this storage model has no hashing.
    pub fn verify_admin(&self, username: &str, password: &str) -> bool {
        username == self.admin_username && password == self.admin_password
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            auth_delay_ms: 1000,
            admin_username: "admin".to_string(),
            admin_password: "admin".to_string(),
        }
    }
}
