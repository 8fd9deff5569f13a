//! Environment-driven engine configuration.
//!
//! Supported environment variables:
//! - HEROFORGE_SCENARIOS: comma-separated scenario names, or `all` (default: all)
//! - HEROFORGE_ROSTER_PATH: write the final roster as JSON to this path (default: unset)
//! - HEROFORGE_STOP_ON_FAILURE: stop after the first scenario with a failed step (default: false)

use std::path::PathBuf;

use crate::error::EngineError;
use crate::scenarios::Scenario;

pub const SCENARIOS_VAR: &str = "HEROFORGE_SCENARIOS";
pub const ROSTER_PATH_VAR: &str = "HEROFORGE_ROSTER_PATH";
pub const STOP_ON_FAILURE_VAR: &str = "HEROFORGE_STOP_ON_FAILURE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    /// Scenarios to run, in order.
    pub scenarios: Vec<Scenario>,
    pub roster_path: Option<PathBuf>,
    pub stop_on_failure: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            scenarios: Scenario::ALL.to_vec(),
            roster_path: None,
            stop_on_failure: false,
        }
    }
}

impl EngineConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, EngineError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, EngineError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(val) = non_blank(lookup(SCENARIOS_VAR)) {
            config.scenarios = parse_scenarios(&val)?;
            tracing::info!(scenarios = %val, "Applied HEROFORGE_SCENARIOS environment variable");
        }

        config.roster_path = non_blank(lookup(ROSTER_PATH_VAR)).map(PathBuf::from);

        if let Some(val) = non_blank(lookup(STOP_ON_FAILURE_VAR)) {
            match val.parse::<bool>() {
                Ok(stop) => config.stop_on_failure = stop,
                Err(_) => tracing::warn!(
                    val = %val,
                    "HEROFORGE_STOP_ON_FAILURE is not true or false, ignoring"
                ),
            }
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

fn parse_scenarios(list: &str) -> Result<Vec<Scenario>, EngineError> {
    if list.eq_ignore_ascii_case("all") {
        return Ok(Scenario::ALL.to_vec());
    }
    let mut scenarios = Vec::new();
    for name in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let scenario: Scenario = name.parse()?;
        if !scenarios.contains(&scenario) {
            scenarios.push(scenario);
        }
    }
    Ok(scenarios)
}
