//! Endpoint configuration for the profile service.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use url::Url;

use crate::profile::UserId;

/// Errors that can occur when validating a [`ServiceConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid base URL '{input}': {source}")]
    InvalidBaseUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },

    #[error("config validation failed: {message}")]
    Validation { message: String },
}

/// Where and how the loader talks to the profile service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Base URL of the profile service (scheme + host, no trailing slash
    /// required).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Total per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://koherent.org/fake-service".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    5
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    /// Validates the configuration.
    ///
    /// Checks that the base URL parses and that both timeouts are nonzero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            input: self.base_url.clone(),
            source,
        })?;

        if self.timeout_secs == 0 {
            return Err(ConfigError::Validation {
                message: "timeout_secs must be at least 1".to_string(),
            });
        }
        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::Validation {
                message: "connect_timeout_secs must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// URL of the user-record endpoint for `id`.
    pub fn user_url(&self, id: UserId) -> Result<Url, ConfigError> {
        let raw = format!("{}/api/user?id={}", self.base_url.trim_end_matches('/'), id);
        Url::parse(&raw).map_err(|source| ConfigError::InvalidBaseUrl { input: raw, source })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
