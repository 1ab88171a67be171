//! State for the profile screen.

use crate::profile::UserId;
use crate::state::ProfileState;

/// Lowest user id the service knows; the left arrow stops here.
pub const FIRST_USER: UserId = UserId::new(1);

/// Everything the profile card needs to render.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenState {
    /// User whose profile is selected for display.
    pub user_id: UserId,

    /// Latest published snapshot for the selected user. Empty until the
    /// load publishes something.
    pub profile: ProfileState,

    /// Set once the user asked to exit.
    pub quit: bool,
}

impl ScreenState {
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            profile: ProfileState::default(),
            quit: false,
        }
    }
}

impl Default for ScreenState {
    fn default() -> Self {
        Self::new(FIRST_USER)
    }
}
