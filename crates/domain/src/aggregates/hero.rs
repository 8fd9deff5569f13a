//! Hero aggregate - a shared actor record plus a tagged variant
//!
//! Variant behavior is reached in two ways:
//!
//! - The shared surface (`fight`, `rest`) dispatches on [`HeroVariant`] here,
//!   so callers holding a mixed roster get each variant's behavior.
//! - Variant-only actions go through a borrowed view, [`Hero::aerial_mut`] or
//!   [`Hero::technical_mut`], which splits the borrow between the actor and
//!   the variant state.

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ActionError, DomainError};
use crate::events::{FightOutcome, IdentityReveal, PowerUsed, Rested, TagAdded};
use crate::ids::HeroId;
use crate::value_objects::{Age, Alias, Gauge, PersonName, TagSet, Weakness, FLIGHT, TECH_POWERS};

use super::actor::Actor;
use super::flight::{AerialHero, FlightState};
use super::gadgetry::{TechHero, TechKit};
use super::person::Person;

// ============================================================================
// Construction input
// ============================================================================

/// Unvalidated construction input shared by every variant.
///
/// Validation happens when the profile is turned into a [`Hero`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeroProfile {
    name: String,
    age: i64,
    gender: String,
    alias: String,
    powers: Vec<String>,
    weakness: Option<String>,
}

impl HeroProfile {
    pub fn new(
        name: impl Into<String>,
        age: i64,
        gender: impl Into<String>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            age,
            gender: gender.into(),
            alias: alias.into(),
            ..Self::default()
        }
    }

    pub fn with_powers<I, S>(mut self, powers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.powers.extend(powers.into_iter().map(Into::into));
        self
    }

    pub fn with_power(mut self, power: impl Into<String>) -> Self {
        self.powers.push(power.into());
        self
    }

    /// A blank weakness is treated as none.
    pub fn with_weakness(mut self, weakness: impl Into<String>) -> Self {
        self.weakness = Some(weakness.into());
        self
    }

    fn into_actor(self, required: &[&str]) -> Result<Actor, DomainError> {
        let person = Person::new(PersonName::new(self.name)?, Age::new(self.age)?, self.gender);
        let powers = TagSet::from_tags(self.powers).with_required(required);
        Ok(Actor::new(
            person,
            Alias::new(self.alias)?,
            powers,
            Weakness::optional(self.weakness),
        ))
    }
}

// ============================================================================
// Variant
// ============================================================================

/// Variant-specific state. Aerial and technical are never combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeroVariant {
    Plain,
    Aerial(FlightState),
    Technical(TechKit),
}

/// Fieldless tag for [`HeroVariant`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeroKind {
    Plain,
    Aerial,
    Technical,
}

impl HeroKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::Aerial => "aerial",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for HeroKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl HeroVariant {
    pub fn kind(&self) -> HeroKind {
        match self {
            Self::Plain => HeroKind::Plain,
            Self::Aerial(_) => HeroKind::Aerial,
            Self::Technical(_) => HeroKind::Technical,
        }
    }
}

// ============================================================================
// Hero
// ============================================================================

/// A hero of any variant.
///
/// # Invariants
///
/// - Aerial heroes always have the `flight` power
/// - Technical heroes always have the `technology`, `gadgets`, and `hacking` powers
/// - Every gauge (health, energy, suit power, intelligence) stays in `0..=100`
///
/// # Example
///
/// ```
/// use heroforge_domain::aggregates::{Hero, HeroProfile};
///
/// let profile = HeroProfile::new("Clark Kent", 32, "Male", "Superman")
///     .with_powers(["Super Strength", "Heat Vision"])
///     .with_weakness("Kryptonite");
/// let mut hero = Hero::aerial(profile, 50_000).unwrap();
///
/// let mut flyer = hero.aerial_mut().unwrap();
/// flyer.take_off().unwrap();
/// flyer.fly_to(1_000).unwrap();
///
/// assert_eq!(hero.flight_state().unwrap().altitude(), 1_000);
/// assert_eq!(hero.actor().energy().value(), 86);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hero {
    id: HeroId,
    actor: Actor,
    variant: HeroVariant,
}

impl Hero {
    /// A hero with no variant extras. Powers are stored as given.
    pub fn plain(profile: HeroProfile) -> Result<Self, DomainError> {
        Ok(Self::assemble(profile.into_actor(&[])?, HeroVariant::Plain))
    }

    /// A flying hero with the given ceiling. `flight` is added to the powers
    /// if missing.
    pub fn aerial(profile: HeroProfile, max_altitude: u32) -> Result<Self, DomainError> {
        let flight = FlightState::new(max_altitude)?;
        let actor = profile.into_actor(&[FLIGHT])?;
        Ok(Self::assemble(actor, HeroVariant::Aerial(flight)))
    }

    /// A gadget-wielding hero. The tech powers are added if missing.
    pub fn technical(profile: HeroProfile, intelligence: u8) -> Result<Self, DomainError> {
        let kit = TechKit::new(intelligence)?;
        let actor = profile.into_actor(&TECH_POWERS)?;
        Ok(Self::assemble(actor, HeroVariant::Technical(kit)))
    }

    fn assemble(actor: Actor, variant: HeroVariant) -> Self {
        let hero = Self {
            id: HeroId::new(),
            actor,
            variant,
        };
        tracing::debug!(
            id = %hero.id,
            hero = %hero.actor.alias(),
            kind = %hero.kind(),
            "hero created"
        );
        hero
    }

    /// Rebuild a hero from stored parts without re-running normalization.
    pub fn restore(id: HeroId, actor: Actor, variant: HeroVariant) -> Self {
        Self { id, actor, variant }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> HeroId {
        self.id
    }

    #[inline]
    pub fn kind(&self) -> HeroKind {
        self.variant.kind()
    }

    #[inline]
    pub fn variant(&self) -> &HeroVariant {
        &self.variant
    }

    #[inline]
    pub fn actor(&self) -> &Actor {
        &self.actor
    }

    #[inline]
    pub fn actor_mut(&mut self) -> &mut Actor {
        &mut self.actor
    }

    #[inline]
    pub fn person(&self) -> &Person {
        self.actor.person()
    }

    #[inline]
    pub fn person_mut(&mut self) -> &mut Person {
        self.actor.person_mut()
    }

    #[inline]
    pub fn alias(&self) -> &Alias {
        self.actor.alias()
    }

    /// Flight state, if this is an aerial hero.
    pub fn flight_state(&self) -> Option<&FlightState> {
        match &self.variant {
            HeroVariant::Aerial(flight) => Some(flight),
            _ => None,
        }
    }

    /// Tech kit, if this is a technical hero.
    pub fn tech_kit(&self) -> Option<&TechKit> {
        match &self.variant {
            HeroVariant::Technical(kit) => Some(kit),
            _ => None,
        }
    }

    pub fn aerial_mut(&mut self) -> Option<AerialHero<'_>> {
        match &mut self.variant {
            HeroVariant::Aerial(flight) => Some(AerialHero::new(&mut self.actor, flight)),
            _ => None,
        }
    }

    pub fn technical_mut(&mut self) -> Option<TechHero<'_>> {
        match &mut self.variant {
            HeroVariant::Technical(kit) => Some(TechHero::new(&mut self.actor, kit)),
            _ => None,
        }
    }

    // =========================================================================
    // Shared action surface
    // =========================================================================

    pub fn introduce(&self) -> String {
        self.actor.introduce()
    }

    pub fn reveal_identity(&mut self) -> IdentityReveal {
        self.actor.reveal_identity()
    }

    pub fn add_power(&mut self, power: impl Into<String>) -> TagAdded {
        self.actor.add_power(power)
    }

    pub fn use_power(&mut self, power: &str, cost: u32) -> Result<PowerUsed, ActionError> {
        self.actor.use_power(power, cost)
    }

    pub fn rescue(&mut self) -> Result<PowerUsed, ActionError> {
        self.actor.rescue()
    }

    /// Fight in the variant's default style.
    ///
    /// Aerial heroes fight on the ground here; aerial combat is opt-in
    /// through [`AerialHero::fight`]. Technical heroes scan first and may
    /// hack or call in gadget support.
    pub fn fight(&mut self, opponent: &str) -> Result<FightOutcome, ActionError> {
        match &mut self.variant {
            HeroVariant::Plain => self.actor.fight(opponent),
            HeroVariant::Aerial(flight) => {
                AerialHero::new(&mut self.actor, flight).fight(opponent, false)
            }
            HeroVariant::Technical(kit) => TechHero::new(&mut self.actor, kit).fight(opponent),
        }
    }

    /// Rest in the variant's style: aerial heroes land first, technical
    /// heroes also recharge their suit.
    pub fn rest(&mut self, gain: u32) -> Rested {
        match &mut self.variant {
            HeroVariant::Plain => self.actor.rest(gain),
            HeroVariant::Aerial(flight) => AerialHero::new(&mut self.actor, flight).rest(gain),
            HeroVariant::Technical(kit) => TechHero::new(&mut self.actor, kit).rest(gain),
        }
    }
}

impl fmt::Display for Hero {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.actor)?;
        match &self.variant {
            HeroVariant::Plain => Ok(()),
            HeroVariant::Aerial(flight) => write!(
                f,
                ", Altitude: {}/{} ft{}",
                flight.altitude(),
                flight.max_altitude(),
                if flight.is_flying() { " (flying)" } else { "" }
            ),
            HeroVariant::Technical(kit) => write!(
                f,
                ", Intelligence: {}, Suit Power: {}%, Gadgets: {}",
                kit.intelligence(),
                kit.suit_power(),
                kit.gadgets().len()
            ),
        }
    }
}

// ============================================================================
// Serde Implementation
// ============================================================================

/// Intermediate format for serialization that matches the wire format
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct HeroWireFormat {
    id: HeroId,
    name: PersonName,
    age: Age,
    gender: String,
    health: Gauge,
    alias: Alias,
    powers: TagSet,
    #[serde(default)]
    weakness: Option<Weakness>,
    energy: Gauge,
    #[serde(default)]
    identity_revealed: bool,
    #[serde(flatten)]
    variant: VariantWireFormat,
}

#[derive(Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "camelCase")]
enum VariantWireFormat {
    Plain,
    #[serde(rename_all = "camelCase")]
    Aerial {
        max_altitude: u32,
        #[serde(default)]
        altitude: u32,
        #[serde(default)]
        is_flying: bool,
    },
    #[serde(rename_all = "camelCase")]
    Technical {
        intelligence: Gauge,
        gadgets: TagSet,
        suit_power: Gauge,
        #[serde(default)]
        tools_active: bool,
    },
}

impl Serialize for Hero {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let person = self.actor.person();
        let variant = match &self.variant {
            HeroVariant::Plain => VariantWireFormat::Plain,
            HeroVariant::Aerial(flight) => VariantWireFormat::Aerial {
                max_altitude: flight.max_altitude(),
                altitude: flight.altitude(),
                is_flying: flight.is_flying(),
            },
            HeroVariant::Technical(kit) => VariantWireFormat::Technical {
                intelligence: kit.intelligence(),
                gadgets: kit.gadgets().clone(),
                suit_power: kit.suit_power(),
                tools_active: kit.tools_active(),
            },
        };
        let wire = HeroWireFormat {
            id: self.id,
            name: person.name().clone(),
            age: person.age(),
            gender: person.gender().to_string(),
            health: person.health(),
            alias: self.actor.alias().clone(),
            powers: self.actor.powers().clone(),
            weakness: self.actor.weakness().cloned(),
            energy: self.actor.energy(),
            identity_revealed: self.actor.is_identity_revealed(),
            variant,
        };
        wire.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Hero {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let wire = HeroWireFormat::deserialize(deserializer)?;

        let variant = match wire.variant {
            VariantWireFormat::Plain => HeroVariant::Plain,
            VariantWireFormat::Aerial {
                max_altitude,
                altitude,
                is_flying,
            } => HeroVariant::Aerial(
                FlightState::restore(max_altitude, altitude, is_flying)
                    .map_err(de::Error::custom)?,
            ),
            VariantWireFormat::Technical {
                intelligence,
                gadgets,
                suit_power,
                tools_active,
            } => HeroVariant::Technical(TechKit::restore(
                intelligence,
                gadgets,
                suit_power,
                tools_active,
            )),
        };
        let required: &[&str] = match variant.kind() {
            HeroKind::Plain => &[],
            HeroKind::Aerial => &[FLIGHT],
            HeroKind::Technical => &TECH_POWERS,
        };

        let person = Person::new(wire.name, wire.age, wire.gender).with_health(wire.health);
        let powers = wire.powers.with_required(required);
        let actor = Actor::new(person, wire.alias, powers, wire.weakness)
            .with_energy(wire.energy)
            .with_identity_revealed(wire.identity_revealed);

        Ok(Self::restore(wire.id, actor, variant))
    }
}
