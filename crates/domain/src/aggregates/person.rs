//! Person - the civilian identity every hero is built on
//!
//! Holds identity and vitality. Health is a [`Gauge`], so damage and healing
//! can never push it outside `0..=100`.

use std::fmt;

use crate::error::DomainError;
use crate::events::{BirthdayCelebrated, GaugeChange, PersonUpdate};
use crate::value_objects::{Age, Gauge, PersonName};

/// A civilian with a name, an age, and a health level.
///
/// # Invariants
///
/// - `name` is always non-empty (enforced by `PersonName`)
/// - `age` is always positive (enforced by `Age`)
/// - `health` is always within `0..=100` (enforced by `Gauge`)
///
/// # Example
///
/// ```
/// use heroforge_domain::aggregates::Person;
/// use heroforge_domain::value_objects::{Age, PersonName};
///
/// let mut person = Person::new(
///     PersonName::new("Alice Johnson").unwrap(),
///     Age::new(28).unwrap(),
///     "Female",
/// );
/// person.take_damage(20);
/// person.heal(10);
/// assert_eq!(person.health().value(), 90);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    name: PersonName,
    age: Age,
    gender: String,
    health: Gauge,
}

impl Person {
    /// Create a person at full health.
    pub fn new(name: PersonName, age: Age, gender: impl Into<String>) -> Self {
        Self {
            name,
            age,
            gender: gender.into(),
            health: Gauge::FULL,
        }
    }

    /// Set the health level (used when loading from storage).
    pub fn with_health(mut self, health: Gauge) -> Self {
        self.health = health;
        self
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn name(&self) -> &PersonName {
        &self.name
    }

    #[inline]
    pub fn age(&self) -> Age {
        self.age
    }

    #[inline]
    pub fn gender(&self) -> &str {
        &self.gender
    }

    #[inline]
    pub fn health(&self) -> Gauge {
        self.health
    }

    // =========================================================================
    // Behavior
    // =========================================================================

    pub fn introduce(&self) -> String {
        format!("Hi, I'm {}, {} years old.", self.name, self.age)
    }

    pub fn celebrate_birthday(&mut self) -> BirthdayCelebrated {
        self.age = self.age.next();
        tracing::info!(name = %self.name, age = %self.age, "birthday celebrated");
        BirthdayCelebrated {
            name: self.name.clone(),
            new_age: self.age,
        }
    }

    /// Reduce health by `amount`, stopping at 0.
    pub fn take_damage(&mut self, amount: u32) -> GaugeChange {
        let change = self.shift_health(self.health.saturating_sub(amount));
        tracing::debug!(name = %self.name, damage = amount, health = change.to, "took damage");
        change
    }

    /// Raise health by `amount`, stopping at 100.
    pub fn heal(&mut self, amount: u32) -> GaugeChange {
        let change = self.shift_health(self.health.saturating_add(amount));
        tracing::debug!(name = %self.name, amount, health = change.to, "healed");
        change
    }

    fn shift_health(&mut self, to: Gauge) -> GaugeChange {
        let from = std::mem::replace(&mut self.health, to);
        GaugeChange {
            from: from.value(),
            to: to.value(),
        }
    }

    // =========================================================================
    // Validated setters
    // =========================================================================

    /// Rename the person. An empty name is rejected and nothing changes.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<PersonUpdate, DomainError> {
        let name = PersonName::new(name).inspect_err(|e| reject("name", e))?;
        let previous = std::mem::replace(&mut self.name, name);
        Ok(PersonUpdate::NameChanged {
            from: previous,
            to: self.name.clone(),
        })
    }

    /// Change the age. Zero or negative values are rejected.
    pub fn set_age(&mut self, years: i64) -> Result<PersonUpdate, DomainError> {
        let age = Age::new(years).inspect_err(|e| reject("age", e))?;
        let previous = std::mem::replace(&mut self.age, age);
        Ok(PersonUpdate::AgeChanged {
            from: previous,
            to: age,
        })
    }

    pub fn set_gender(&mut self, gender: impl Into<String>) -> PersonUpdate {
        let previous = std::mem::replace(&mut self.gender, gender.into());
        PersonUpdate::GenderChanged {
            from: previous,
            to: self.gender.clone(),
        }
    }

    /// Set health to an exact value. Values outside `0..=100` are rejected.
    pub fn set_health(&mut self, value: i64) -> Result<PersonUpdate, DomainError> {
        let health = Gauge::new(value)
            .map_err(|_| DomainError::validation("Health must be between 0 and 100"))
            .inspect_err(|e| reject("health", e))?;
        Ok(PersonUpdate::HealthSet(self.shift_health(health)))
    }
}

pub(crate) fn reject(field: &'static str, err: &DomainError) {
    tracing::warn!(field, error = %err, "rejected update");
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Person(name={}, age={}, health={})",
            self.name, self.age, self.health
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Person {
        Person::new(
            PersonName::new("Alice Johnson").unwrap(),
            Age::new(28).unwrap(),
            "Female",
        )
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_starts_at_full_health() {
            let person = alice();
            assert_eq!(person.name().as_str(), "Alice Johnson");
            assert_eq!(person.age().years(), 28);
            assert_eq!(person.gender(), "Female");
            assert!(person.health().is_full());
        }

        #[test]
        fn introduce_is_deterministic() {
            assert_eq!(alice().introduce(), "Hi, I'm Alice Johnson, 28 years old.");
        }

        #[test]
        fn display_summarizes() {
            assert_eq!(
                alice().to_string(),
                "Person(name=Alice Johnson, age=28, health=100)"
            );
        }
    }

    mod vitality {
        use super::*;

        #[test]
        fn damage_then_heal() {
            let mut person = alice();
            assert_eq!(person.take_damage(20), GaugeChange { from: 100, to: 80 });
            assert_eq!(person.heal(10), GaugeChange { from: 80, to: 90 });
        }

        #[test]
        fn damage_stops_at_zero() {
            let mut person = alice();
            let change = person.take_damage(500);
            assert_eq!(change.to, 0);
            assert!(person.health().is_empty());
        }

        #[test]
        fn heal_stops_at_hundred() {
            let mut person = alice();
            person.take_damage(5);
            assert_eq!(person.heal(50).to, 100);
        }

        #[test]
        fn birthday_increments_age() {
            let mut person = alice();
            let event = person.celebrate_birthday();
            assert_eq!(event.new_age.years(), 29);
            assert_eq!(person.age().years(), 29);
        }
    }

    mod setters {
        use super::*;

        #[test]
        fn set_name_accepts_valid() {
            let mut person = alice();
            let update = person.set_name("Alice Smith").unwrap();
            assert!(matches!(update, PersonUpdate::NameChanged { .. }));
            assert_eq!(person.name().as_str(), "Alice Smith");
        }

        #[test]
        fn set_name_rejects_empty_and_keeps_state() {
            let mut person = alice();
            assert!(person.set_name("").is_err());
            assert_eq!(person.name().as_str(), "Alice Johnson");
        }

        #[test]
        fn set_age_rejects_non_positive() {
            let mut person = alice();
            assert!(matches!(
                person.set_age(-5),
                Err(DomainError::Validation(_))
            ));
            assert!(person.set_age(0).is_err());
            assert_eq!(person.age().years(), 28);
        }

        #[test]
        fn set_health_rejects_out_of_range() {
            let mut person = alice();
            let err = person.set_health(150).unwrap_err();
            assert_eq!(
                err.to_string(),
                "Validation failed: Health must be between 0 and 100"
            );
            assert!(person.health().is_full());

            person.set_health(40).unwrap();
            assert_eq!(person.health().value(), 40);
        }

        #[test]
        fn set_gender_is_unvalidated() {
            let mut person = alice();
            person.set_gender("Non-binary");
            assert_eq!(person.gender(), "Non-binary");
        }
    }
}
