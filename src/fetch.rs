//! Thin HTTP layer between the loader and the profile service.

use reqwest::Client;
use url::Url;

use crate::config::ServiceConfig;
use crate::error::LoadError;
use crate::icon::Icon;
use crate::profile::{User, UserId, UserRecord};

/// HTTP client bound to one profile service.
///
/// Timeouts come from the config at build time; every request shares the
/// same connection pool.
pub struct ProfileClient {
    client: Client,
    config: ServiceConfig,
}

impl ProfileClient {
    pub fn new(config: ServiceConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()
            .expect("Failed to build HTTP client");

        Self { client, config }
    }

    /// GET `url` and return the body bytes. Non-success statuses are
    /// reported as [`LoadError::Status`].
    pub async fn get_bytes(&self, url: Url) -> Result<Vec<u8>, LoadError> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|source| LoadError::Fetch {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status { url, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| LoadError::Fetch { url, source })?;
        Ok(body.to_vec())
    }

    /// Fetch and decode the user record for `id`.
    pub async fn fetch_user(&self, id: UserId) -> Result<User, LoadError> {
        let url = self.config.user_url(id)?;
        let body = self.get_bytes(url).await?;
        let record: UserRecord =
            serde_json::from_slice(&body).map_err(|source| LoadError::Decode { source })?;
        Ok(User::from_record(id, record))
    }

    /// Fetch the icon a user record points at and decode it.
    pub async fn fetch_icon(&self, url: &Url) -> Result<Icon, LoadError> {
        let bytes = self.get_bytes(url.clone()).await?;
        Icon::decode(&bytes).map_err(|source| LoadError::Icon {
            url: url.clone(),
            source,
        })
    }
}
