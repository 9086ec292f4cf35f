//! Aggregates subsystem checks into a single report

use tracing::info;

use crate::healthcheck::{CheckResult, StatusChecker};

/// Results of running a set of checkers, in the order they were run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HealthReport {
    pub results: Vec<CheckResult>,
}

impl HealthReport {
    /// Run each checker in order and collect all of their results
    pub fn run(checkers: &[&dyn StatusChecker]) -> Self {
        let results: Vec<CheckResult> = checkers
            .iter()
            .flat_map(|checker| checker.self_check())
            .collect();

        info!(
            "Ran {} checks, {} failed",
            results.len(),
            results.iter().filter(|r| !r.is_ok()).count()
        );

        Self { results }
    }

    /// True when every check passed
    pub fn success(&self) -> bool {
        self.results.iter().all(CheckResult::is_ok)
    }

    /// Plain-text rendering, one line per check plus its message if any
    pub fn render(&self) -> String {
        self.results
            .iter()
            .map(|result| {
                let line = format!(
                    "[{}] {}: {}\n",
                    result.status, result.subsystem_name, result.check_description
                );
                if result.friendly_message.is_empty() {
                    line
                } else {
                    format!("{}    {}\n", line, result.friendly_message)
                }
            })
            .collect()
    }
}
