use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a hero, assigned at creation and kept across snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HeroId(Uuid);

impl HeroId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for HeroId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HeroId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for HeroId {
    fn from(value: Uuid) -> Self {
        Self(value)
    }
}

impl From<HeroId> for Uuid {
    fn from(value: HeroId) -> Self {
        value.0
    }
}
