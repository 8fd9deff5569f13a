//! Capability tags: powers, gadgets, and weaknesses.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Power every aerial hero carries.
pub const FLIGHT: &str = "flight";
/// Power consumed by [`crate::Actor::rescue`].
pub const RESCUE: &str = "rescue";
/// Power consumed by building-collapse rescues.
pub const TECHNOLOGY: &str = "technology";
/// Power consumed by hacking.
pub const HACKING: &str = "hacking";
/// Powers every technical hero carries.
pub const TECH_POWERS: [&str; 3] = [TECHNOLOGY, "gadgets", HACKING];

pub const COMMUNICATION_DEVICE: &str = "Communication Device";
pub const SCANNER: &str = "Scanner";
pub const EMERGENCY_BEACON: &str = "Emergency Beacon";
/// Optional gadget that adds a flat bonus to hacking skill.
pub const HACKING_DEVICE: &str = "Hacking Device";
/// Gadgets a technical hero starts with.
pub const STARTER_GADGETS: [&str; 3] = [COMMUNICATION_DEVICE, SCANNER, EMERGENCY_BEACON];

/// An ordered set of text tags.
///
/// Membership is exact and case-sensitive. Insertion order is kept only so
/// listings read the way they were entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct TagSet(Vec<String>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from a list of tags, dropping repeats.
    pub fn from_tags<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for tag in tags {
            set.insert(tag);
        }
        set
    }

    /// Appends each required tag not already present.
    ///
    /// Pure normalization applied to constructor input; never used mid-action.
    pub fn with_required(mut self, required: &[&str]) -> Self {
        for tag in required {
            self.insert(*tag);
        }
        self
    }

    /// Inserts `tag`, returning false if it was already present.
    pub fn insert(&mut self, tag: impl Into<String>) -> bool {
        let tag = tag.into();
        if self.contains(&tag) {
            return false;
        }
        self.0.push(tag);
        true
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// True if every tag in `tags` is present.
    pub fn contains_all(&self, tags: &[&str]) -> bool {
        tags.iter().all(|t| self.contains(t))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for TagSet {
    fn from(tags: Vec<String>) -> Self {
        Self::from_tags(tags)
    }
}

impl From<TagSet> for Vec<String> {
    fn from(set: TagSet) -> Self {
        set.0
    }
}

impl<S: Into<String>> FromIterator<S> for TagSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_tags(iter)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

// ============================================================================
// Weakness
// ============================================================================

/// A hero's weakness tag.
///
/// An opponent exploits the weakness when the tag appears anywhere in the
/// opponent's name, ignoring case. "Kryptonite" is therefore exploited by
/// "Kryptonite Man" but also by "Anti-Kryptonite League".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Weakness(String);

impl Weakness {
    /// Create a weakness tag.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the tag is blank.
    pub fn new(tag: impl Into<String>) -> Result<Self, DomainError> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(DomainError::validation("Weakness cannot be blank"));
        }
        Ok(Self(tag))
    }

    /// Blank input means "no weakness".
    pub fn optional(tag: Option<impl Into<String>>) -> Option<Self> {
        tag.and_then(|t| Self::new(t).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive containment check against an opponent's name.
    pub fn is_exploited_by(&self, opponent: &str) -> bool {
        opponent
            .to_lowercase()
            .contains(&self.0.to_lowercase())
    }
}

impl fmt::Display for Weakness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Weakness {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<Weakness> for String {
    fn from(weakness: Weakness) -> String {
        weakness.0
    }
}
