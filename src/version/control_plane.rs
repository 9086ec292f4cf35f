//! Control plane version provider

use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::version::error::ProviderError;
use crate::version::source::USER_AGENT;

/// Path of the control plane's version endpoint, relative to its API base URL
const VERSION_PATH: &str = "/api/v1/Version";

/// Version the control plane reports for itself
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionInfo {
    pub release_version: String,
}

impl VersionInfo {
    pub fn new(release_version: &str) -> Self {
        Self {
            release_version: release_version.to_string(),
        }
    }
}

/// Capability for querying the running control plane's version
#[cfg_attr(test, automock)]
pub trait ControlPlaneVersionProvider: Send + Sync {
    /// Returns the control plane's self-reported version
    fn version_info(&self) -> Result<VersionInfo, ProviderError>;
}

/// Provider backed by the control plane's public HTTP API
pub struct HttpControlPlane {
    client: Client,
    api_url: String,
}

impl HttpControlPlane {
    pub fn new(api_url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            api_url: api_url.trim_end_matches('/').to_string(),
        }
    }
}

impl ControlPlaneVersionProvider for HttpControlPlane {
    fn version_info(&self) -> Result<VersionInfo, ProviderError> {
        let url = format!("{}{}", self.api_url, VERSION_PATH);
        debug!("Querying control plane version from {}", url);

        let response = self.client.get(&url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Control plane returned status {}: {}", status, url);
            return Err(ProviderError::UnexpectedStatus(status));
        }

        response.json().map_err(|e| {
            warn!("Failed to parse control plane version response: {}", e);
            ProviderError::InvalidResponse(e.to_string())
        })
    }
}
