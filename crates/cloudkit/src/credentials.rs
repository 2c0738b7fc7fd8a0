//! Credentials source trait and implementations.
//!
//! Some requirements pull secrets (provider API tokens) from outside the
//! prompt flow. The trait keeps the core independent of where those
//! secrets actually live.

use crate::error::{Error, Result};
use std::collections::HashMap;

/// Named secret lookup.
pub trait CredentialsSource {
    /// Fetch the secret stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Credentials`] if the key is not available.
    fn secret(&self, key: &str) -> Result<String>;
}

/// Credentials read from environment variables.
///
/// Keys are upper-cased, dashes become underscores, and the configured
/// prefix is prepended: with prefix `STRATUS_SECRET`, the key
/// `aws-token` reads `STRATUS_SECRET_AWS_TOKEN`.
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    prefix: String,
}

impl EnvCredentials {
    /// Create a source with the given environment variable prefix.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    fn variable(&self, key: &str) -> String {
        format!(
            "{}_{}",
            self.prefix,
            key.to_uppercase().replace('-', "_")
        )
    }
}

impl CredentialsSource for EnvCredentials {
    fn secret(&self, key: &str) -> Result<String> {
        std::env::var(self.variable(key)).map_err(|_| Error::Credentials {
            key: key.to_string(),
        })
    }
}

/// Fixed credentials for tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    secrets: HashMap<String, String>,
}

impl StaticCredentials {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a secret (builder style).
    #[must_use]
    pub fn with_secret(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.secrets.insert(key.into(), value.into());
        self
    }
}

impl CredentialsSource for StaticCredentials {
    fn secret(&self, key: &str) -> Result<String> {
        self.secrets
            .get(key)
            .cloned()
            .ok_or_else(|| Error::Credentials {
                key: key.to_string(),
            })
    }
}
