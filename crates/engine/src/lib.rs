//! HeroForge Engine library.
//!
//! A headless harness around `heroforge-domain`: it drives heroes through the
//! scripted demonstration scenarios, logs every step with `tracing`, and can
//! write the resulting roster to a JSON snapshot.
//!
//! ## Structure
//!
//! - `config` - Environment-driven configuration
//! - `scenarios` - The scripted demonstrations
//! - `runner` - Scenario execution and the step log
//! - `roster` - JSON roster snapshots
//! - `error` - Engine error types

pub mod config;
pub mod error;
pub mod roster;
pub mod runner;
pub mod scenarios;

pub use config::EngineConfig;
pub use error::EngineError;
pub use roster::RosterSnapshot;
pub use runner::{Report, Runner, Step, StepLog, StepStatus};
pub use scenarios::Scenario;
