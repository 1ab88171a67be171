//! Observable profile state.
//!
//! [`ProfileCell`] is the single writer, held by the load side;
//! [`ProfileWatcher`] is the passive read side handed to the screen. The
//! watch channel marshals publications across tasks: the load task may run
//! on any runtime worker while observers consume consistent snapshots on
//! their own, so no observer ever touches loader internals.
//!
//! Each load cycle carries an epoch. A publication whose epoch is older
//! than the cell's current cycle is dropped, which keeps an overtaken
//! load from ever overwriting a newer one.

use thiserror::Error;
use tokio::sync::watch;

use crate::icon::Icon;
use crate::profile::User;

/// Everything the profile screen renders, published as one value.
///
/// Mutated at most twice per load cycle: once when the user record
/// arrives, once when the icon finishes decoding. An icon, if present,
/// always belongs to the user in the same snapshot.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProfileState {
    user: Option<User>,
    icon: Option<Icon>,
    epoch: u64,
}

impl ProfileState {
    /// The user record, once it has arrived.
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// The decoded avatar, once it has arrived.
    pub fn icon(&self) -> Option<&Icon> {
        self.icon.as_ref()
    }

    fn cleared(epoch: u64) -> Self {
        Self {
            user: None,
            icon: None,
            epoch,
        }
    }
}

/// The owning session is gone; no further change will be published.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("profile session closed")]
pub struct SessionClosed;

/// Write half of the state channel.
pub(crate) struct ProfileCell {
    tx: watch::Sender<ProfileState>,
}

impl ProfileCell {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(ProfileState::default());
        Self { tx }
    }

    pub(crate) fn watch(&self) -> ProfileWatcher {
        ProfileWatcher {
            rx: self.tx.subscribe(),
        }
    }

    /// Open load cycle `epoch`: wipe both fields so observers never see
    /// one user's name next to another user's icon.
    pub(crate) fn begin_cycle(&self, epoch: u64) {
        self.tx.send_replace(ProfileState::cleared(epoch));
    }

    /// Publish the user record for `epoch`. Returns false, changing
    /// nothing, if a newer cycle has started.
    pub(crate) fn publish_user(&self, epoch: u64, user: User) -> bool {
        self.tx.send_if_modified(|state| {
            if state.epoch != epoch {
                return false;
            }
            state.user = Some(user);
            true
        })
    }

    /// Publish the icon for `epoch`, under the same staleness rule.
    pub(crate) fn publish_icon(&self, epoch: u64, icon: Icon) -> bool {
        self.tx.send_if_modified(|state| {
            if state.epoch != epoch {
                return false;
            }
            state.icon = Some(icon);
            true
        })
    }
}

/// Read half of the state channel: current snapshot plus an awaitable
/// change notification. Clone freely; drop to unsubscribe.
#[derive(Debug, Clone)]
pub struct ProfileWatcher {
    rx: watch::Receiver<ProfileState>,
}

impl ProfileWatcher {
    /// Snapshot of the latest published state.
    pub fn current(&self) -> ProfileState {
        self.rx.borrow().clone()
    }

    /// Wait for the next publication and return the new snapshot.
    ///
    /// # Errors
    /// Returns [`SessionClosed`] once the owning session has been dropped.
    pub async fn changed(&mut self) -> Result<ProfileState, SessionClosed> {
        self.rx.changed().await.map_err(|_| SessionClosed)?;
        Ok(self.rx.borrow_and_update().clone())
    }
}
