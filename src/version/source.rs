//! Client for the endpoint publishing the latest release version

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::version::error::VersionCheckError;

pub(crate) const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Response body of the Version Source
#[derive(Debug, Deserialize)]
struct LatestVersionResponse {
    version: String,
}

/// Fetches the latest published release from a single URL
pub struct LatestVersionSource {
    client: Client,
    url: String,
}

impl LatestVersionSource {
    pub fn new(url: &str, timeout: Duration) -> Self {
        Self {
            client: Client::builder()
                .user_agent(USER_AGENT)
                .timeout(timeout)
                .build()
                .expect("Failed to create HTTP client"),
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Issues one GET and returns the `version` field of the body
    pub fn fetch_latest_version(&self) -> Result<String, VersionCheckError> {
        debug!("Fetching latest version from {}", self.url);

        let response = self.client.get(&self.url).send()?;

        let status = response.status();
        if !status.is_success() {
            warn!("Version source returned status {}: {}", status, self.url);
            return Err(VersionCheckError::UnexpectedStatus(status));
        }

        let body: LatestVersionResponse = response.json().map_err(|e| {
            warn!("Failed to parse version source response: {}", e);
            VersionCheckError::InvalidResponse(e.to_string())
        })?;

        Ok(body.version)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    const TIMEOUT: Duration = Duration::from_secs(2);

    #[test]
    fn fetch_latest_version_returns_version_field() {
        let mut server = Server::new();

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"version": "v0.3.0"}"#)
            .create();

        let source = LatestVersionSource::new(&format!("{}/", server.url()), TIMEOUT);
        let result = source.fetch_latest_version().unwrap();

        mock.assert();
        assert_eq!(result, "v0.3.0");
    }

    #[test]
    fn fetch_latest_version_ignores_additional_fields() {
        let mut server = Server::new();

        let mock = server
            .mock("GET", "/version.json")
            .with_status(200)
            .with_body(r#"{"version": "stable-2.1.0", "edge": "edge-24.1.1", "released": true}"#)
            .create();

        let source = LatestVersionSource::new(&format!("{}/version.json", server.url()), TIMEOUT);
        let result = source.fetch_latest_version().unwrap();

        mock.assert();
        assert_eq!(result, "stable-2.1.0");
    }

    #[test]
    fn fetch_latest_version_returns_unexpected_status_for_non_success() {
        let mut server = Server::new();

        let mock = server
            .mock("GET", "/")
            .with_status(503)
            .with_body(r#"{"version": "v0.3.0"}"#)
            .create();

        let source = LatestVersionSource::new(&format!("{}/", server.url()), TIMEOUT);
        let result = source.fetch_latest_version();

        mock.assert();
        assert!(matches!(
            result,
            Err(VersionCheckError::UnexpectedStatus(status))
                if status == reqwest::StatusCode::SERVICE_UNAVAILABLE
        ));
    }

    #[test]
    fn fetch_latest_version_returns_invalid_response_for_malformed_body() {
        let mut server = Server::new();

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body("not json")
            .create();

        let source = LatestVersionSource::new(&format!("{}/", server.url()), TIMEOUT);
        let result = source.fetch_latest_version();

        mock.assert();
        assert!(matches!(result, Err(VersionCheckError::InvalidResponse(_))));
    }

    #[test]
    fn fetch_latest_version_returns_invalid_response_when_version_missing() {
        let mut server = Server::new();

        let mock = server
            .mock("GET", "/")
            .with_status(200)
            .with_body(r#"{"latest": "v0.3.0"}"#)
            .create();

        let source = LatestVersionSource::new(&format!("{}/", server.url()), TIMEOUT);
        let result = source.fetch_latest_version();

        mock.assert();
        assert!(matches!(result, Err(VersionCheckError::InvalidResponse(_))));
    }

    #[test]
    fn fetch_latest_version_returns_network_error_for_unreachable_host() {
        let source = LatestVersionSource::new("http://127.0.0.1:1/", TIMEOUT);
        let result = source.fetch_latest_version();

        assert!(matches!(result, Err(VersionCheckError::Network(_))));
    }
}
