//! User identity and the wire record served by the profile endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use url::Url;

/// Identifier of a user on the profile service.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Wire shape of a user record: `{"name": ..., "iconURL": ...}`.
///
/// Both fields are required; the record does not echo the requested id.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub name: String,
    #[serde(rename = "iconURL")]
    pub icon_url: Url,
}

/// A user profile as consumed by the screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub icon_url: Url,
}

impl User {
    /// Attach the requested id to a decoded wire record.
    pub fn from_record(id: UserId, record: UserRecord) -> Self {
        Self {
            id,
            name: record.name,
            icon_url: record.icon_url,
        }
    }
}
