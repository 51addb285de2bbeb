//! Numeric entity identifiers assigned by the relational store.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A storage-assigned row identifier.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(i64);

impl EntityId {
    /// Create a new EntityId from a raw row id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw row id.
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EntityId({})", self.0)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

/// Type alias for football match IDs
pub type MatchId = EntityId;

/// Type alias for match event IDs
pub type EventId = EntityId;

/// Type alias for club IDs
pub type ClubId = EntityId;

/// Type alias for player IDs
pub type PlayerId = EntityId;

/// Type alias for country IDs
pub type CountryId = EntityId;
