//! Load orchestration.
//!
//! [`ProfileSession`] owns the write half of the state channel and runs
//! each load as a spawned task. Starting a new load aborts the previous
//! task and bumps the epoch, so a cancelled cycle can neither keep
//! running nor publish late results. The user record is published as
//! soon as it arrives; the icon follows when its fetch and decode
//! complete, and an icon failure leaves the record in place.

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::config::ServiceConfig;
use crate::error::LoadError;
use crate::fetch::ProfileClient;
use crate::profile::UserId;
use crate::state::{ProfileCell, ProfileWatcher};

/// Handle for driving profile loads.
///
/// One session serves one screen. Dropping it aborts the in-flight load
/// and closes every [`ProfileWatcher`] subscribed to it.
pub struct ProfileSession {
    client: Arc<ProfileClient>,
    cell: Arc<ProfileCell>,
    epoch: u64,
    inflight: Option<JoinHandle<()>>,
}

impl ProfileSession {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            client: Arc::new(ProfileClient::new(config)),
            cell: Arc::new(ProfileCell::new()),
            epoch: 0,
            inflight: None,
        }
    }

    /// Subscribe to the published state.
    pub fn watcher(&self) -> ProfileWatcher {
        self.cell.watch()
    }

    /// Start loading the profile for `id`.
    ///
    /// Any load still in flight is cancelled first, and the published
    /// state is cleared so observers never see fields from two different
    /// users at once.
    pub fn load(&mut self, id: UserId) {
        self.cancel();
        self.epoch += 1;
        let epoch = self.epoch;
        self.cell.begin_cycle(epoch);
        tracing::info!(user_id = %id, "Starting profile load");

        let client = Arc::clone(&self.client);
        let cell = Arc::clone(&self.cell);
        self.inflight = Some(tokio::spawn(async move {
            match run_cycle(&client, &cell, epoch, id).await {
                Ok(()) => tracing::debug!(user_id = %id, "Profile load finished"),
                Err(error) => {
                    tracing::error!(
                        user_id = %id,
                        error = %error,
                        "Profile load failed"
                    );
                }
            }
        }));
    }

    /// Abort the in-flight load, if any. State already published stays
    /// as it is.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.inflight.take() {
            handle.abort();
        }
    }
}

impl Drop for ProfileSession {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// One load cycle: user record first, then the icon it points at.
///
/// A record failure aborts the cycle. An icon failure is logged and the
/// cycle still succeeds, leaving the record published without an avatar.
async fn run_cycle(
    client: &ProfileClient,
    cell: &ProfileCell,
    epoch: u64,
    id: UserId,
) -> Result<(), LoadError> {
    let user = client.fetch_user(id).await?;
    let icon_url = user.icon_url.clone();

    if !cell.publish_user(epoch, user) {
        tracing::debug!(user_id = %id, "Discarding user record from an overtaken load");
        return Ok(());
    }
    tracing::info!(user_id = %id, "User record published");

    match client.fetch_icon(&icon_url).await {
        Ok(icon) => {
            if cell.publish_icon(epoch, icon) {
                tracing::info!(user_id = %id, "Icon published");
            } else {
                tracing::debug!(user_id = %id, "Discarding icon from an overtaken load");
            }
        }
        Err(error) => {
            tracing::warn!(
                user_id = %id,
                url = %icon_url,
                error = %error,
                "Icon unavailable"
            );
        }
    }
    Ok(())
}
