//! Intents for the profile screen.

use crate::state::ProfileState;

/// Intents that can be dispatched to the screen reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenIntent {
    /// Exit the application.
    Quit,

    /// Reload the currently selected user.
    Reload,

    /// Select the next user id.
    NextUser,

    /// Select the previous user id.
    /// At the first user this is a no-op.
    PrevUser,

    /// A new profile snapshot was published.
    Published(ProfileState),
}
