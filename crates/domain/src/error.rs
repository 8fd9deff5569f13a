//! Unified error types for the domain layer
//!
//! Two families of failure exist:
//! - [`DomainError`] for rejected input (setters, constructors, wire records)
//! - [`ActionError`] for hero actions that could not be carried out
//!
//! Neither is ever raised as a panic. Both come back as the `Err` half of a
//! `Result`, and the hero's state is left as it was unless the action's
//! documentation says otherwise.

use thiserror::Error;

/// Unified error type for rejected input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Fields are individually valid but inconsistent with each other
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl DomainError {
    /// Creates a validation error for a single malformed value.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Person name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a constraint violation error
    pub fn constraint(msg: impl Into<String>) -> Self {
        Self::Constraint(msg.into())
    }
}

/// Reason a hero action did not succeed.
///
/// Grouped as:
/// - resource insufficiency: `UnknownPower`, `InsufficientEnergy`,
///   `MissingGadget`, `InsufficientSuitPower`
/// - state illegality: `AlreadyFlying`, `AlreadyGrounded`, `NotFlying`,
///   `AboveCeiling`, `BelowGround`
/// - skill checks: `HackFailed`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ActionError {
    #[error("does not have the power: {power}")]
    UnknownPower { power: String },

    #[error("not enough energy for {action}: needs {required}, has {available}")]
    InsufficientEnergy {
        action: String,
        required: u32,
        available: u8,
    },

    #[error("does not have gadget: {gadget}")]
    MissingGadget { gadget: String },

    #[error("suit power too low for {gadget}: needs {required}%, has {available}%")]
    InsufficientSuitPower {
        gadget: String,
        required: u32,
        available: u8,
    },

    #[error("is already flying")]
    AlreadyFlying,

    #[error("is already on the ground")]
    AlreadyGrounded,

    #[error("must take off first")]
    NotFlying,

    #[error("cannot fly to {target} feet, ceiling is {ceiling} feet")]
    AboveCeiling { target: i64, ceiling: u32 },

    #[error("cannot fly below ground level ({target} feet)")]
    BelowGround { target: i64 },

    /// Energy was already spent when this is returned.
    #[error("failed to hack {target}: skill {skill} below difficulty {difficulty}")]
    HackFailed {
        target: String,
        skill: u32,
        difficulty: u32,
    },
}

impl ActionError {
    /// True for failures caused by a depleted or missing resource.
    pub fn is_resource_shortage(&self) -> bool {
        matches!(
            self,
            Self::UnknownPower { .. }
                | Self::InsufficientEnergy { .. }
                | Self::MissingGadget { .. }
                | Self::InsufficientSuitPower { .. }
        )
    }

    /// True for failures caused by the hero's flight state.
    pub fn is_illegal_state(&self) -> bool {
        matches!(
            self,
            Self::AlreadyFlying
                | Self::AlreadyGrounded
                | Self::NotFlying
                | Self::AboveCeiling { .. }
                | Self::BelowGround { .. }
        )
    }
}
