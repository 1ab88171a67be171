//! Error types for the profile loading pipeline.
//!
//! The loader decides severity by step, not by variant: any error on the
//! user-record step aborts the load cycle, while errors on the icon step
//! leave the name on screen with a blank avatar.

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::config::ConfigError;

/// Errors that can occur while loading a profile.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The request URL could not be built from the configured base.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Transport-level failure talking to the profile service.
    #[error("request to {url} failed: {source}")]
    Fetch {
        url: Url,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status.
    #[error("{url} returned {status}")]
    Status { url: Url, status: StatusCode },

    /// The user record body was not valid JSON or missed required fields.
    #[error("malformed user record: {source}")]
    Decode {
        #[source]
        source: serde_json::Error,
    },

    /// The icon bytes did not decode as an image.
    #[error("icon at {url} has an illegal format: {source}")]
    Icon {
        url: Url,
        #[source]
        source: image::ImageError,
    },
}
