//! Scenario runner and step log.
//!
//! Every hero action a scenario performs is recorded as a [`Step`] and
//! emitted as a structured `tracing` event with `hero`, `action`, and
//! `outcome` fields. Failed actions are expected in the demonstrations, so
//! they are logged as warnings and counted rather than propagated.

use std::fmt;
use std::path::PathBuf;

use heroforge_domain::Hero;

use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::roster::RosterSnapshot;
use crate::scenarios::Scenario;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Succeeded,
    Failed,
}

/// One recorded action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub scenario: Scenario,
    /// Alias or name of the acting hero or person
    pub subject: String,
    pub action: String,
    pub status: StepStatus,
    pub detail: String,
}

/// Collects the steps of a single scenario.
#[derive(Debug)]
pub struct StepLog {
    scenario: Scenario,
    steps: Vec<Step>,
}

impl StepLog {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            steps: Vec::new(),
        }
    }

    /// Record an action that cannot fail.
    pub fn note(&mut self, subject: &str, action: &str, detail: impl fmt::Display) {
        self.push(subject, action, StepStatus::Succeeded, detail.to_string());
    }

    /// Record a fallible action, handing back its value on success.
    pub fn record<T, E>(&mut self, subject: &str, action: &str, result: Result<T, E>) -> Option<T>
    where
        T: fmt::Debug,
        E: fmt::Display,
    {
        match result {
            Ok(value) => {
                self.push(subject, action, StepStatus::Succeeded, format!("{:?}", value));
                Some(value)
            }
            Err(err) => {
                self.push(subject, action, StepStatus::Failed, err.to_string());
                None
            }
        }
    }

    fn push(&mut self, subject: &str, action: &str, status: StepStatus, detail: String) {
        match status {
            StepStatus::Succeeded => tracing::info!(
                scenario = %self.scenario,
                hero = subject,
                action,
                outcome = %detail,
                "step succeeded"
            ),
            StepStatus::Failed => tracing::warn!(
                scenario = %self.scenario,
                hero = subject,
                action,
                outcome = %detail,
                "step failed"
            ),
        }
        self.steps.push(Step {
            scenario: self.scenario,
            subject: subject.to_string(),
            action: action.to_string(),
            status,
            detail,
        });
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn failures(&self) -> usize {
        self.steps
            .iter()
            .filter(|s| s.status == StepStatus::Failed)
            .count()
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

/// Everything a run produced.
#[derive(Debug, Default)]
pub struct Report {
    pub scenarios_run: Vec<Scenario>,
    pub steps: Vec<Step>,
    /// Heroes left standing at the end of each scenario
    pub roster: Vec<Hero>,
}

impl Report {
    pub fn succeeded(&self) -> usize {
        self.count(StepStatus::Succeeded)
    }

    pub fn failed(&self) -> usize {
        self.count(StepStatus::Failed)
    }

    fn count(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|s| s.status == status).count()
    }
}

pub struct Runner {
    config: EngineConfig,
}

impl Runner {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run the configured scenarios in order.
    pub fn run(&self) -> Report {
        let mut report = Report::default();

        for &scenario in &self.config.scenarios {
            tracing::info!(scenario = %scenario, "starting scenario");
            let mut log = StepLog::new(scenario);
            let heroes = scenario.run(&mut log);
            let failures = log.failures();
            tracing::info!(
                scenario = %scenario,
                steps = log.steps().len(),
                failures,
                "scenario finished"
            );

            report.scenarios_run.push(scenario);
            report.steps.extend(log.into_steps());
            report.roster.extend(heroes);

            if failures > 0 && self.config.stop_on_failure {
                tracing::warn!(scenario = %scenario, "stopping after failed scenario");
                break;
            }
        }

        report
    }

    /// Write the report's roster if a roster path is configured.
    pub fn write_roster(&self, report: &Report) -> Result<Option<PathBuf>, EngineError> {
        let Some(path) = &self.config.roster_path else {
            return Ok(None);
        };
        RosterSnapshot::new(report.roster.clone()).save(path)?;
        tracing::info!(path = %path.display(), heroes = report.roster.len(), "roster saved");
        Ok(Some(path.clone()))
    }
}
