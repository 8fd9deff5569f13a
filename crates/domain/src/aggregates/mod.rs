//! Aggregate roots - domain objects that own their related data
//!
//! Each aggregate:
//! - Owns all its constituent parts (enforced by Rust ownership)
//! - Exposes behavior through methods, not public fields
//! - Returns outcome values from mutations
//!
//! # Layering
//!
//! | Layer | Type | Adds |
//! |-------|------|------|
//! | Civilian | [`Person`] | name, age, gender, health |
//! | Base hero | [`Actor`] | alias, powers, weakness, energy, identity |
//! | Flight | [`FlightState`] / [`AerialHero`] | altitude, ceiling, take-off and landing |
//! | Gadgetry | [`TechKit`] / [`TechHero`] | intelligence, gadgets, suit power, hacking |
//! | Root | [`Hero`] | id, variant tag, dispatch of `fight` and `rest` |
//!
//! Variant views borrow the shared [`Actor`] and the variant state at the
//! same time, so variant rules are layered on the base rules instead of
//! replacing them.

mod actor;
mod flight;
mod gadgetry;
mod hero;
mod person;

pub use actor::{
    Actor, DEFAULT_POWER_COST, DEFAULT_REST_GAIN, FIGHT_ENERGY_COST, RESCUE_COST, WEAKNESS_DAMAGE,
};
pub use flight::{
    AerialHero, FlightState, AERIAL_COMBAT_ALTITUDE, AERIAL_COMBAT_COST, AERIAL_RESCUE_COST,
    DEFAULT_AERIAL_RESCUE_ALTITUDE, DEFAULT_MAX_ALTITUDE, DEFAULT_PATROL_ALTITUDE,
    FEET_PER_ENERGY, PATROL_COST, TAKE_OFF_ALTITUDE, TAKE_OFF_COST,
};
pub use gadgetry::{
    RescueKind, TechHero, TechKit, BEACON_COST, COLLAPSE_SCAN_COST, COLLAPSE_TECHNOLOGY_COST,
    DEFAULT_GADGET_COST, DEFAULT_INTELLIGENCE, DEFAULT_INTELLIGENCE_UPGRADE, DEFAULT_RECHARGE,
    HACKING_DEVICE_BONUS, HACKING_TOOLS_COST, HACK_DIFFICULTY, HACK_ENERGY_COST, REST_RECHARGE,
    SCAN_COST, SCAN_FINDINGS,
};
pub use hero::{Hero, HeroKind, HeroProfile, HeroVariant};
pub use person::Person;
