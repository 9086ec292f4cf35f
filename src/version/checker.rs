//! Freshness checks for the CLI and the control plane

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::config::CheckerConfig;
use crate::healthcheck::{CheckResult, StatusChecker};
use crate::version::control_plane::ControlPlaneVersionProvider;
use crate::version::error::VersionCheckError;
use crate::version::source::LatestVersionSource;

/// Subsystem both version checks report under
pub const VERSION_SUBSYSTEM_NAME: &str = "version";
pub const CLI_CHECK_DESCRIPTION: &str = "cli is up-to-date";
pub const CONTROL_PLANE_CHECK_DESCRIPTION: &str = "control plane is up-to-date";

const CLI_SUBJECT: &str = "cli";
const CONTROL_PLANE_SUBJECT: &str = "control plane";

/// Compares the CLI and control plane versions against the expected release.
///
/// The expected release is the configured override when set, otherwise the
/// value reported by the Version Source. Comparison is exact string equality.
pub struct VersionStatusChecker {
    client_version: String,
    config: CheckerConfig,
    source: LatestVersionSource,
    provider: Arc<dyn ControlPlaneVersionProvider>,
}

impl VersionStatusChecker {
    pub fn new(
        client_version: &str,
        config: CheckerConfig,
        provider: Arc<dyn ControlPlaneVersionProvider>,
    ) -> Self {
        let source = LatestVersionSource::new(&config.latest_version_url, config.fetch_timeout());
        Self {
            client_version: client_version.to_string(),
            config,
            source,
            provider,
        }
    }

    fn expected_version(&self) -> Result<String, VersionCheckError> {
        if let Some(version) = self.config.override_version() {
            debug!("Using version override {}", version);
            return Ok(version.to_string());
        }

        self.source.fetch_latest_version()
    }

    fn cli_check(&self, expected: &str) -> CheckResult {
        compare(CLI_CHECK_DESCRIPTION, CLI_SUBJECT, &self.client_version, expected)
    }

    fn control_plane_check(&self, expected: &str) -> CheckResult {
        match self.provider.version_info() {
            Ok(info) => compare(
                CONTROL_PLANE_CHECK_DESCRIPTION,
                CONTROL_PLANE_SUBJECT,
                &info.release_version,
                expected,
            ),
            Err(e) => {
                warn!("Failed to get control plane version: {}", e);
                CheckResult::fail(
                    VERSION_SUBSYSTEM_NAME,
                    CONTROL_PLANE_CHECK_DESCRIPTION,
                    format!("Failed to get control plane version: {}", e),
                )
            }
        }
    }
}

impl StatusChecker for VersionStatusChecker {
    /// Always returns the CLI check followed by the control plane check
    fn self_check(&self) -> Vec<CheckResult> {
        let expected = match self.expected_version() {
            Ok(version) => version,
            Err(e) => {
                warn!(
                    "Failed to get the latest version from {}: {}",
                    self.source.url(),
                    e
                );
                let message = format!("Failed to get the latest version: {}", e);
                return vec![
                    CheckResult::fail(VERSION_SUBSYSTEM_NAME, CLI_CHECK_DESCRIPTION, message.clone()),
                    CheckResult::fail(
                        VERSION_SUBSYSTEM_NAME,
                        CONTROL_PLANE_CHECK_DESCRIPTION,
                        message,
                    ),
                ];
            }
        };

        vec![self.cli_check(&expected), self.control_plane_check(&expected)]
    }
}

fn compare(description: &str, subject: &str, actual: &str, expected: &str) -> CheckResult {
    if actual == expected {
        return CheckResult::ok(VERSION_SUBSYSTEM_NAME, description);
    }

    info!("{} version {} differs from {}", subject, actual, expected);
    CheckResult::fail(
        VERSION_SUBSYSTEM_NAME,
        description,
        format!(
            "{} is running version {} but the latest version is {}",
            subject, actual, expected
        ),
    )
}
