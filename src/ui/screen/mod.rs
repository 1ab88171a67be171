//! Profile screen feature module.
//!
//! Drives the single card the terminal shows: which user is selected,
//! the latest published profile snapshot, and whether the app should
//! exit.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state (selected user, profile snapshot, quit flag)
//! - `intent.rs` - Key actions and published snapshots
//! - `reducer.rs` - State transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::ScreenIntent;
pub use reducer::ScreenReducer;
pub use state::{ScreenState, FIRST_USER};
