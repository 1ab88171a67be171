//! Terminal front end.
//!
//! The screen is a single profile card driven by the loop in `runtime`:
//! key events become intents, the reducer produces the next screen
//! state, and `render` draws it. Published profile snapshots enter the
//! loop as intents too, so the card always reflects the latest load.

pub mod avatar;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod screen;
pub mod terminal_guard;
pub mod theme;
