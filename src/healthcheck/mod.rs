//! Subsystem check vocabulary shared with the health report
//!
//! # Modules
//!
//! - [`report`]: Runs checkers in order and renders their results

pub mod report;

use std::fmt;

use serde::Serialize;

/// Outcome of a single subsystem check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckStatus {
    Ok,
    Fail,
    Error,
}

impl fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CheckStatus::Ok => "OK",
            CheckStatus::Fail => "FAIL",
            CheckStatus::Error => "ERROR",
        };
        f.write_str(label)
    }
}

/// One named unit of a health report
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    pub subsystem_name: String,
    pub check_description: String,
    pub status: CheckStatus,
    pub friendly_message: String,
}

impl CheckResult {
    pub fn ok(subsystem_name: &str, check_description: &str) -> Self {
        Self {
            subsystem_name: subsystem_name.to_string(),
            check_description: check_description.to_string(),
            status: CheckStatus::Ok,
            friendly_message: String::new(),
        }
    }

    pub fn fail(subsystem_name: &str, check_description: &str, friendly_message: String) -> Self {
        Self {
            subsystem_name: subsystem_name.to_string(),
            check_description: check_description.to_string(),
            status: CheckStatus::Fail,
            friendly_message,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == CheckStatus::Ok
    }
}

/// A subsystem that can report on its own health
pub trait StatusChecker {
    /// Runs every check of the subsystem; failures are reported, never raised
    fn self_check(&self) -> Vec<CheckResult>;
}
