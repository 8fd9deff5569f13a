extern crate self as heroforge_domain;

pub mod aggregates;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{
    Actor, AerialHero, FlightState, Hero, HeroKind, HeroProfile, HeroVariant, Person, RescueKind,
    TechHero, TechKit,
};
pub use error::{ActionError, DomainError};
pub use events::{
    AltitudeChanged, BirthdayCelebrated, FightOutcome, GadgetUsed, GaugeChange, IdentityReveal,
    IntelligenceUpgrade, PersonUpdate, PowerUsed, Rested, Sortie, SystemHacked, TagAdded, Tactic,
};
pub use ids::HeroId;
pub use value_objects::{Age, Alias, Gauge, PersonName, TagSet, Weakness};
