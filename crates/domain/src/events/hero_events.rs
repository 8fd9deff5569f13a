//! Hero-related domain events
//!
//! These types communicate what happened when hero state was modified,
//! allowing callers to react appropriately or render a message.

use crate::value_objects::{Age, Alias, PersonName, Weakness};

/// Before/after pair for any gauge (health, energy, suit power, intelligence).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GaugeChange {
    pub from: u8,
    pub to: u8,
}

impl GaugeChange {
    /// Signed difference, positive for gains.
    pub fn delta(&self) -> i16 {
        i16::from(self.to) - i16::from(self.from)
    }

    pub fn is_unchanged(&self) -> bool {
        self.from == self.to
    }
}

/// A birthday was celebrated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayCelebrated {
    pub name: PersonName,
    pub new_age: Age,
}

/// Outcome of a validated setter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PersonUpdate {
    NameChanged { from: PersonName, to: PersonName },
    AgeChanged { from: Age, to: Age },
    GenderChanged { from: String, to: String },
    HealthSet(GaugeChange),
    AliasChanged { from: Alias, to: Alias },
    EnergySet(GaugeChange),
}

/// Outcome of adding a tag to a power or gadget set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagAdded {
    Added(String),
    /// No-op: the tag was already there
    AlreadyPresent(String),
}

impl TagAdded {
    pub fn was_added(&self) -> bool {
        matches!(self, Self::Added(_))
    }
}

/// Outcome of revealing a secret identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityReveal {
    /// First reveal: the alias is now publicly tied to the name
    Revealed { alias: Alias, name: PersonName },
    /// No-op: identity was revealed earlier
    AlreadyRevealed,
}

/// A power was used and its energy paid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerUsed {
    pub power: String,
    pub cost: u32,
    pub energy_remaining: u8,
}

/// A gadget was used and its suit power paid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GadgetUsed {
    pub gadget: String,
    pub cost: u32,
    pub suit_power_remaining: u8,
}

/// How a fight was carried out
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tactic {
    /// Plain ground combat
    Ground,
    /// Combat after climbing to fighting altitude
    Aerial,
    /// Ground combat with scanner and comms support
    TechAssisted,
    /// The opponent's systems were hacked; no blows exchanged
    CyberWarfare,
}

/// Result of a fight that took place
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FightOutcome {
    Victory {
        opponent: String,
        tactic: Tactic,
    },
    /// The opponent exploited the hero's weakness
    Defeat {
        opponent: String,
        weakness: Weakness,
        health: GaugeChange,
    },
}

impl FightOutcome {
    pub fn is_victory(&self) -> bool {
        matches!(self, Self::Victory { .. })
    }
}

/// Outcome of a rest, across every variant's extra recovery steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rested {
    pub energy: GaugeChange,
    /// Aerial heroes land before resting
    pub landed: bool,
    /// Technical heroes recharge their suit while resting
    pub suit_power: Option<GaugeChange>,
}

/// Altitude moved, from take-off, landing, or flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AltitudeChanged {
    pub from: u32,
    pub to: u32,
    pub energy_spent: u32,
}

/// A completed patrol or aerial rescue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sortie {
    pub altitude: u32,
    /// Whether the hero had to take off first
    pub took_off: bool,
}

/// A successful hack
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SystemHacked {
    pub target: String,
    pub skill: u32,
}

/// Outcome of training intelligence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntelligenceUpgrade {
    Upgraded(GaugeChange),
    /// No-op: already at 100
    AlreadyMaxed,
}
