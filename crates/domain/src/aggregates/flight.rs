//! Flight - altitude state and the aerial hero's action surface
//!
//! ```text
//! Grounded (altitude 0) --take_off--> Flying (altitude min(100, ceiling))
//! Flying --fly_to(n)--> Flying (altitude n, 0 <= n <= ceiling)
//! Flying --land / rest--> Grounded
//! ```

use crate::error::{ActionError, DomainError};
use crate::events::{AltitudeChanged, FightOutcome, Rested, Sortie, Tactic};
use crate::value_objects::{FLIGHT, RESCUE};

use super::actor::Actor;

/// Ceiling used when none is given.
pub const DEFAULT_MAX_ALTITUDE: u32 = 10_000;
/// Altitude reached right after take-off, capped by the ceiling.
pub const TAKE_OFF_ALTITUDE: u32 = 100;
pub const TAKE_OFF_COST: u32 = 5;
/// Feet climbed or descended per point of energy.
pub const FEET_PER_ENERGY: u32 = 100;
pub const DEFAULT_PATROL_ALTITUDE: i64 = 1_000;
pub const PATROL_COST: u32 = 15;
pub const DEFAULT_AERIAL_RESCUE_ALTITUDE: i64 = 500;
pub const AERIAL_RESCUE_COST: u32 = 20;
pub const AERIAL_COMBAT_ALTITUDE: i64 = 500;
/// Flat surcharge for aerial combat, paid on top of the base fight cost.
pub const AERIAL_COMBAT_COST: u32 = 30;

/// Altitude and flight status of an aerial hero.
///
/// # Invariants
///
/// - `altitude <= max_altitude`
/// - `altitude > 0` implies `flying`; grounded implies `altitude == 0`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightState {
    max_altitude: u32,
    altitude: u32,
    flying: bool,
}

impl FlightState {
    /// A grounded hero with the given ceiling.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max_altitude` is zero.
    pub fn new(max_altitude: u32) -> Result<Self, DomainError> {
        if max_altitude == 0 {
            return Err(DomainError::validation("Max altitude must be positive"));
        }
        Ok(Self {
            max_altitude,
            altitude: 0,
            flying: false,
        })
    }

    /// Rebuild a stored flight state, checking the altitude invariants.
    pub fn restore(max_altitude: u32, altitude: u32, flying: bool) -> Result<Self, DomainError> {
        let state = Self::new(max_altitude)?;
        if altitude > max_altitude {
            return Err(DomainError::constraint(format!(
                "Altitude {} exceeds ceiling {}",
                altitude, max_altitude
            )));
        }
        if altitude > 0 && !flying {
            return Err(DomainError::constraint(format!(
                "Grounded hero cannot be at altitude {}",
                altitude
            )));
        }
        Ok(Self {
            altitude,
            flying,
            ..state
        })
    }

    #[inline]
    pub fn max_altitude(&self) -> u32 {
        self.max_altitude
    }

    #[inline]
    pub fn altitude(&self) -> u32 {
        self.altitude
    }

    #[inline]
    pub fn is_flying(&self) -> bool {
        self.flying
    }

    fn ground(&mut self) -> AltitudeChanged {
        let from = self.altitude;
        self.flying = false;
        self.altitude = 0;
        AltitudeChanged {
            from,
            to: 0,
            energy_spent: 0,
        }
    }
}

/// Mutable view of an aerial hero: the shared actor plus its flight state.
///
/// Obtained from [`super::Hero::aerial_mut`].
#[derive(Debug)]
pub struct AerialHero<'a> {
    actor: &'a mut Actor,
    flight: &'a mut FlightState,
}

impl<'a> AerialHero<'a> {
    pub(crate) fn new(actor: &'a mut Actor, flight: &'a mut FlightState) -> Self {
        Self { actor, flight }
    }

    pub fn actor(&mut self) -> &mut Actor {
        &mut *self.actor
    }

    pub fn flight(&self) -> &FlightState {
        &*self.flight
    }

    /// Leave the ground, paying the flight power's take-off cost.
    pub fn take_off(&mut self) -> Result<AltitudeChanged, ActionError> {
        if self.flight.flying {
            return Err(ActionError::AlreadyFlying);
        }
        self.actor.use_power(FLIGHT, TAKE_OFF_COST)?;
        let altitude = TAKE_OFF_ALTITUDE.min(self.flight.max_altitude);
        self.flight.flying = true;
        self.flight.altitude = altitude;
        tracing::info!(hero = %self.actor.alias(), altitude, "took off");
        Ok(AltitudeChanged {
            from: 0,
            to: altitude,
            energy_spent: TAKE_OFF_COST,
        })
    }

    pub fn land(&mut self) -> Result<AltitudeChanged, ActionError> {
        if !self.flight.flying {
            return Err(ActionError::AlreadyGrounded);
        }
        let change = self.flight.ground();
        tracing::info!(hero = %self.actor.alias(), "landed");
        Ok(change)
    }

    /// Climb or descend to `target`, paying one energy per 100 feet moved
    /// (rounded down).
    pub fn fly_to(&mut self, target: i64) -> Result<AltitudeChanged, ActionError> {
        if !self.flight.flying {
            return Err(ActionError::NotFlying);
        }
        if target > i64::from(self.flight.max_altitude) {
            return Err(ActionError::AboveCeiling {
                target,
                ceiling: self.flight.max_altitude,
            });
        }
        let Ok(to) = u32::try_from(target) else {
            return Err(ActionError::BelowGround { target });
        };

        let from = self.flight.altitude;
        let cost = from.abs_diff(to) / FEET_PER_ENERGY;
        self.actor.spend_energy(cost, "altitude change")?;
        self.flight.altitude = to;
        tracing::debug!(
            hero = %self.actor.alias(),
            altitude = to,
            energy = self.actor.energy().value(),
            "changed altitude"
        );
        Ok(AltitudeChanged {
            from,
            to,
            energy_spent: cost,
        })
    }

    /// Takes off if needed, then climbs to `altitude`. Steps already taken
    /// stay applied if a later one fails.
    fn climb_to(&mut self, altitude: i64) -> Result<bool, ActionError> {
        let took_off = if self.flight.flying {
            false
        } else {
            self.take_off()?;
            true
        };
        self.fly_to(altitude)?;
        Ok(took_off)
    }

    /// Patrol at `altitude`, paying a flat patrol cost once there.
    pub fn patrol(&mut self, altitude: i64) -> Result<Sortie, ActionError> {
        let took_off = self.climb_to(altitude)?;
        self.actor.spend_energy(PATROL_COST, "patrol")?;
        tracing::info!(hero = %self.actor.alias(), altitude, "patrolled the skies");
        Ok(Sortie {
            altitude: self.flight.altitude,
            took_off,
        })
    }

    pub fn aerial_rescue(&mut self, altitude: i64) -> Result<Sortie, ActionError> {
        let took_off = self.climb_to(altitude)?;
        self.actor.use_power(RESCUE, AERIAL_RESCUE_COST)?;
        tracing::info!(hero = %self.actor.alias(), altitude, "performed aerial rescue");
        Ok(Sortie {
            altitude: self.flight.altitude,
            took_off,
        })
    }

    /// Fight on the ground, or in the air when `aerial_combat` is set.
    ///
    /// Aerial combat climbs to 500 feet and pays a flat 30 energy before the
    /// base fight (and its own 25 energy) runs. If any of those steps fails
    /// the base fight never starts.
    pub fn fight(
        &mut self,
        opponent: &str,
        aerial_combat: bool,
    ) -> Result<FightOutcome, ActionError> {
        if !aerial_combat {
            return self.actor.fight(opponent);
        }
        self.climb_to(AERIAL_COMBAT_ALTITUDE)?;
        self.actor.spend_energy(AERIAL_COMBAT_COST, "aerial combat")?;
        self.actor.fight_with(opponent, Tactic::Aerial)
    }

    /// Lands if airborne, then rests.
    pub fn rest(&mut self, gain: u32) -> Rested {
        let landed = self.flight.flying;
        if landed {
            self.flight.ground();
        }
        Rested {
            landed,
            ..self.actor.rest(gain)
        }
    }
}
