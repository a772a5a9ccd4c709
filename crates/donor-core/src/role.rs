//! Role classifier for shell sessions.
//!
//! A role decides which dashboard a session lands on. It carries no data
//! beyond its tag.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// The three roles a session can log in as.
///
/// The lowercase spelling (`government`, `hospital`, `user`) is the wire
/// format written to durable storage.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Role {
    Government,
    Hospital,
    User,
}

impl Role {
    /// Parses a raw value read from durable storage.
    ///
    /// Storage is client-controlled, so any string may appear under the role
    /// key. Matching is exact (no trimming, no case folding).
    pub fn parse_stored(raw: &str) -> StoredRole {
        match raw.parse::<Role>() {
            Ok(role) => StoredRole::Known(role),
            Err(_) => StoredRole::Unknown(raw.to_string()),
        }
    }
}

/// Result of validating a role string at the storage boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoredRole {
    /// One of the three known roles.
    Known(Role),
    /// Anything else, kept verbatim for diagnostics.
    Unknown(String),
}

impl StoredRole {
    /// Collapses the tagged result to the session's role slot.
    /// Unknown values become absent.
    pub fn into_role(self) -> Option<Role> {
        match self {
            StoredRole::Known(role) => Some(role),
            StoredRole::Unknown(_) => None,
        }
    }
}
