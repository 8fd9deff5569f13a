//! Domain Events
//!
//! Return types from hero mutations, communicating what happened when state
//! was modified. Failures are reported separately through
//! [`crate::error::ActionError`].

pub mod hero_events;

pub use hero_events::*;
