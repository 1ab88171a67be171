//! Observable profile loading for a user-card screen.
//!
//! The crate has two layers:
//!
//! - a loader core ([`ProfileSession`]) that fetches a user record and then
//!   the avatar it references, publishing both through a watchable
//!   [`ProfileState`];
//! - a terminal front end ([`ui`]) that renders that state as a profile
//!   card.
//!
//! ```text
//! ProfileSession ──spawns──→ load task ──GET──→ profile service
//!       │                        │
//!       └──── watch channel ←────┘ (publish user, then icon)
//!                     │
//!                     ▼
//!             ProfileWatcher (screen, tests, any passive observer)
//! ```
//!
//! Observers only ever see snapshots; all mutation happens on the one load
//! task a session keeps in flight.

pub mod config;
pub mod error;
pub mod fetch;
pub mod icon;
pub mod loader;
pub mod profile;
pub mod state;
pub mod ui;

pub use config::ServiceConfig;
pub use error::LoadError;
pub use fetch::ProfileClient;
pub use icon::Icon;
pub use loader::ProfileSession;
pub use profile::{User, UserId};
pub use state::{ProfileState, ProfileWatcher, SessionClosed};
