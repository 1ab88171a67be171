//! Reducer for the profile screen.

use crate::profile::UserId;

use super::intent::ScreenIntent;
use super::state::{ScreenState, FIRST_USER};

/// Reducer for profile screen state transitions.
///
/// Pure state transitions only. The side effect of a changed selection
/// (starting a new load) is handled by the caller around the dispatch.
pub struct ScreenReducer;

impl ScreenReducer {
    pub fn reduce(state: ScreenState, intent: ScreenIntent) -> ScreenState {
        match intent {
            ScreenIntent::Quit => ScreenState { quit: true, ..state },

            ScreenIntent::Reload => state,

            ScreenIntent::NextUser => ScreenState {
                user_id: UserId::new(state.user_id.get().saturating_add(1)),
                ..state
            },

            ScreenIntent::PrevUser => {
                if state.user_id > FIRST_USER {
                    ScreenState {
                        user_id: UserId::new(state.user_id.get() - 1),
                        ..state
                    }
                } else {
                    state
                }
            }

            ScreenIntent::Published(profile) => ScreenState { profile, ..state },
        }
    }
}
