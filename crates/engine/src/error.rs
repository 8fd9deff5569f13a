//! Engine error types.
//!
//! Configuration and roster-file failures. Hero action failures are not
//! errors at this level: they are recorded as failed steps in the report.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    /// A scenario name in the configuration is not recognized.
    #[error("Unknown scenario: {name}")]
    UnknownScenario { name: String },

    /// Reading or writing the roster file failed.
    #[error("Roster file error at {path}: {source}")]
    RosterIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The roster file is not a valid snapshot.
    #[error("Roster format error: {0}")]
    RosterFormat(#[from] serde_json::Error),
}

impl EngineError {
    pub fn unknown_scenario(name: impl Into<String>) -> Self {
        Self::UnknownScenario { name: name.into() }
    }

    pub(crate) fn roster_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::RosterIo {
            path: path.into(),
            source,
        }
    }
}
