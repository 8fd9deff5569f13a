//! Actor - the shared hero record and base action surface
//!
//! Every hero variant wraps one `Actor`. Variant views in
//! [`super::flight`] and [`super::gadgetry`] borrow it mutably and layer
//! their own rules on top of the methods defined here. Energy sufficiency
//! and weakness exploitation are only checked here.

use std::fmt;

use crate::error::{ActionError, DomainError};
use crate::events::{
    FightOutcome, GaugeChange, IdentityReveal, PersonUpdate, PowerUsed, Rested, TagAdded, Tactic,
};
use crate::value_objects::{Alias, Gauge, TagSet, Weakness, RESCUE};

use super::person::{reject, Person};

/// Energy cost of a power when the caller has no specific cost in mind.
pub const DEFAULT_POWER_COST: u32 = 10;
/// Energy restored by a plain rest.
pub const DEFAULT_REST_GAIN: u32 = 20;
/// Energy spent on every fight that takes place.
pub const FIGHT_ENERGY_COST: u32 = 25;
/// Health lost when an opponent exploits the hero's weakness.
pub const WEAKNESS_DAMAGE: u32 = 30;
/// Energy cost of a standard rescue.
pub const RESCUE_COST: u32 = 15;

/// The base hero: a person plus alias, powers, weakness, and energy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    person: Person,
    alias: Alias,
    powers: TagSet,
    weakness: Option<Weakness>,
    energy: Gauge,
    identity_revealed: bool,
}

impl Actor {
    /// Create an actor at full energy with a secret identity.
    pub fn new(person: Person, alias: Alias, powers: TagSet, weakness: Option<Weakness>) -> Self {
        Self {
            person,
            alias,
            powers,
            weakness,
            energy: Gauge::FULL,
            identity_revealed: false,
        }
    }

    /// Set the energy level (used when loading from storage).
    pub fn with_energy(mut self, energy: Gauge) -> Self {
        self.energy = energy;
        self
    }

    /// Mark the identity as revealed (used when loading from storage).
    pub fn with_identity_revealed(mut self, revealed: bool) -> Self {
        self.identity_revealed = revealed;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Mutable access to the civilian record (damage, healing, setters).
    #[inline]
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    #[inline]
    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    #[inline]
    pub fn powers(&self) -> &TagSet {
        &self.powers
    }

    #[inline]
    pub fn has_power(&self, power: &str) -> bool {
        self.powers.contains(power)
    }

    #[inline]
    pub fn weakness(&self) -> Option<&Weakness> {
        self.weakness.as_ref()
    }

    #[inline]
    pub fn energy(&self) -> Gauge {
        self.energy
    }

    #[inline]
    pub fn is_identity_revealed(&self) -> bool {
        self.identity_revealed
    }

    // =========================================================================
    // Identity
    // =========================================================================

    pub fn introduce(&self) -> String {
        if self.identity_revealed {
            format!(
                "Hi, I'm {}, also known as {}!",
                self.person.name(),
                self.alias
            )
        } else {
            format!("I am {}, protector of the innocent!", self.alias)
        }
    }

    /// One-way: once revealed, the identity stays revealed.
    pub fn reveal_identity(&mut self) -> IdentityReveal {
        if self.identity_revealed {
            return IdentityReveal::AlreadyRevealed;
        }
        self.identity_revealed = true;
        tracing::info!(hero = %self.alias, name = %self.person.name(), "identity revealed");
        IdentityReveal::Revealed {
            alias: self.alias.clone(),
            name: self.person.name().clone(),
        }
    }

    pub fn set_alias(&mut self, alias: impl Into<String>) -> Result<PersonUpdate, DomainError> {
        let alias = Alias::new(alias).inspect_err(|e| reject("alias", e))?;
        let previous = std::mem::replace(&mut self.alias, alias);
        Ok(PersonUpdate::AliasChanged {
            from: previous,
            to: self.alias.clone(),
        })
    }

    /// Set energy to an exact value. Values outside `0..=100` are rejected.
    pub fn set_energy(&mut self, value: i64) -> Result<PersonUpdate, DomainError> {
        let energy = Gauge::new(value)
            .map_err(|_| DomainError::validation("Energy must be between 0 and 100"))
            .inspect_err(|e| reject("energy", e))?;
        let from = std::mem::replace(&mut self.energy, energy);
        Ok(PersonUpdate::EnergySet(GaugeChange {
            from: from.value(),
            to: energy.value(),
        }))
    }

    // =========================================================================
    // Powers and energy
    // =========================================================================

    pub fn add_power(&mut self, power: impl Into<String>) -> TagAdded {
        let power = power.into();
        if self.powers.insert(power.clone()) {
            tracing::info!(hero = %self.alias, power = %power, "gained new power");
            TagAdded::Added(power)
        } else {
            tracing::debug!(hero = %self.alias, power = %power, "already has power");
            TagAdded::AlreadyPresent(power)
        }
    }

    /// Use a power, paying `cost` energy.
    ///
    /// Fails without touching energy if the power is unknown or the energy
    /// does not cover the cost.
    pub fn use_power(&mut self, power: &str, cost: u32) -> Result<PowerUsed, ActionError> {
        if !self.powers.contains(power) {
            tracing::debug!(hero = %self.alias, power, "does not have power");
            return Err(ActionError::UnknownPower {
                power: power.to_string(),
            });
        }
        let change = self.spend_energy(cost, power)?;
        tracing::debug!(hero = %self.alias, power, energy = change.to, "used power");
        Ok(PowerUsed {
            power: power.to_string(),
            cost,
            energy_remaining: change.to,
        })
    }

    /// Pays `cost` energy for `action`, or fails leaving energy untouched.
    pub(crate) fn spend_energy(
        &mut self,
        cost: u32,
        action: &str,
    ) -> Result<GaugeChange, ActionError> {
        let Some(remaining) = self.energy.checked_sub(cost) else {
            tracing::debug!(
                hero = %self.alias,
                action,
                required = cost,
                available = self.energy.value(),
                "not enough energy"
            );
            return Err(ActionError::InsufficientEnergy {
                action: action.to_string(),
                required: cost,
                available: self.energy.value(),
            });
        };
        let from = std::mem::replace(&mut self.energy, remaining);
        Ok(GaugeChange {
            from: from.value(),
            to: remaining.value(),
        })
    }

    /// Regain `gain` energy, stopping at 100.
    pub fn rest(&mut self, gain: u32) -> Rested {
        let from = self.energy;
        self.energy = from.saturating_add(gain);
        tracing::debug!(hero = %self.alias, energy = self.energy.value(), "rested");
        Rested {
            energy: GaugeChange {
                from: from.value(),
                to: self.energy.value(),
            },
            landed: false,
            suit_power: None,
        }
    }

    pub fn rescue(&mut self) -> Result<PowerUsed, ActionError> {
        let used = self.use_power(RESCUE, RESCUE_COST)?;
        tracing::info!(hero = %self.alias, "saved a citizen");
        Ok(used)
    }

    // =========================================================================
    // Combat
    // =========================================================================

    /// Fight an opponent on the ground.
    ///
    /// Costs 25 energy up front. If the opponent's name contains the hero's
    /// weakness (ignoring case) the hero takes 30 damage and loses.
    pub fn fight(&mut self, opponent: &str) -> Result<FightOutcome, ActionError> {
        self.fight_with(opponent, Tactic::Ground)
    }

    pub(crate) fn fight_with(
        &mut self,
        opponent: &str,
        tactic: Tactic,
    ) -> Result<FightOutcome, ActionError> {
        self.spend_energy(FIGHT_ENERGY_COST, "fight")?;

        if let Some(weakness) = self
            .weakness
            .as_ref()
            .filter(|w| w.is_exploited_by(opponent))
        {
            let weakness = weakness.clone();
            tracing::info!(hero = %self.alias, opponent, weakness = %weakness, "weakness exploited");
            let health = self.person.take_damage(WEAKNESS_DAMAGE);
            return Ok(FightOutcome::Defeat {
                opponent: opponent.to_string(),
                weakness,
                health,
            });
        }

        tracing::info!(hero = %self.alias, opponent, ?tactic, "defeated opponent");
        Ok(FightOutcome::Victory {
            opponent: opponent.to_string(),
            tactic,
        })
    }
}

impl fmt::Display for Actor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let identity = if self.identity_revealed {
            format!("({})", self.person.name())
        } else {
            "(Secret Identity)".to_string()
        };
        write!(
            f,
            "Superhero: {} {}, Powers: {}, Energy: {}",
            self.alias, identity, self.powers, self.energy
        )
    }
}
