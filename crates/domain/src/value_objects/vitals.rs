//! Bounded numeric value objects: age and percentage gauges.
//!
//! Health, energy, suit power, and intelligence all share the same 0..=100
//! range, so they are all [`Gauge`]s. Arithmetic on a gauge saturates at the
//! bounds; only [`Gauge::new`] can fail.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

// ============================================================================
// Age
// ============================================================================

/// A strictly positive age in years
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u32")]
pub struct Age(u32);

impl Age {
    /// Create a validated age.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `years` is zero, negative, or
    /// does not fit in a `u32`.
    pub fn new(years: i64) -> Result<Self, DomainError> {
        match u32::try_from(years) {
            Ok(years) if years > 0 => Ok(Self(years)),
            _ => Err(DomainError::validation(format!(
                "Invalid age: {} (must be a positive integer)",
                years
            ))),
        }
    }

    #[inline]
    pub fn years(self) -> u32 {
        self.0
    }

    /// The age one year later.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for Age {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Age {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Age> for u32 {
    fn from(age: Age) -> u32 {
        age.0
    }
}

// ============================================================================
// Gauge
// ============================================================================

/// A resource level clamped to `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Gauge(u8);

impl Gauge {
    pub const MAX: u8 = 100;
    pub const FULL: Gauge = Gauge(Self::MAX);
    pub const EMPTY: Gauge = Gauge(0);

    /// Create a gauge from an exact value.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `value` is outside `0..=100`.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        match u8::try_from(value) {
            Ok(v) if v <= Self::MAX => Ok(Self(v)),
            _ => Err(DomainError::validation(format!(
                "Value {} must be between 0 and {}",
                value,
                Self::MAX
            ))),
        }
    }

    /// Create a gauge, clamping out-of-range input to the nearest bound.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(0, i64::from(Self::MAX)) as u8)
    }

    #[inline]
    pub fn value(self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_full(self) -> bool {
        self.0 == Self::MAX
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if at least `amount` is available.
    #[inline]
    pub fn covers(self, amount: u32) -> bool {
        u32::from(self.0) >= amount
    }

    /// Adds `amount`, stopping at 100.
    pub fn saturating_add(self, amount: u32) -> Self {
        Self::clamped(i64::from(self.0) + i64::from(amount))
    }

    /// Subtracts `amount`, stopping at 0.
    pub fn saturating_sub(self, amount: u32) -> Self {
        Self::clamped(i64::from(self.0) - i64::from(amount))
    }

    /// Subtracts `amount` only if it is fully covered.
    pub fn checked_sub(self, amount: u32) -> Option<Self> {
        if self.covers(amount) {
            Some(self.saturating_sub(amount))
        } else {
            None
        }
    }
}

impl Default for Gauge {
    fn default() -> Self {
        Self::FULL
    }
}

impl fmt::Display for Gauge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Gauge {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Gauge> for u8 {
    fn from(gauge: Gauge) -> u8 {
        gauge.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod age {
        use super::*;

        #[test]
        fn positive_age_is_accepted() {
            assert_eq!(Age::new(28).unwrap().years(), 28);
        }

        #[test]
        fn zero_and_negative_are_rejected() {
            assert!(Age::new(0).is_err());
            assert!(Age::new(-5).is_err());
        }

        #[test]
        fn next_increments() {
            assert_eq!(Age::new(28).unwrap().next().years(), 29);
        }
    }

    mod gauge {
        use super::*;

        #[test]
        fn new_accepts_bounds() {
            assert_eq!(Gauge::new(0).unwrap(), Gauge::EMPTY);
            assert_eq!(Gauge::new(100).unwrap(), Gauge::FULL);
        }

        #[test]
        fn new_rejects_out_of_range() {
            assert!(Gauge::new(101).is_err());
            assert!(Gauge::new(150).is_err());
            assert!(Gauge::new(-1).is_err());
        }

        #[test]
        fn arithmetic_saturates() {
            let g = Gauge::new(90).unwrap();
            assert_eq!(g.saturating_add(30), Gauge::FULL);
            assert_eq!(g.saturating_sub(500), Gauge::EMPTY);
        }

        #[test]
        fn checked_sub_requires_full_cover() {
            let g = Gauge::new(20).unwrap();
            assert_eq!(g.checked_sub(20), Some(Gauge::EMPTY));
            assert_eq!(g.checked_sub(21), None);
        }

        #[test]
        fn deserialize_validates_range() {
            let ok: Gauge = serde_json::from_str("75").unwrap();
            assert_eq!(ok.value(), 75);
            assert!(serde_json::from_str::<Gauge>("101").is_err());
        }
    }
}
