//! Control plane and Version Source doubles

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use mockito::{Mock, Server, ServerGuard};

use version_status::version::control_plane::{ControlPlaneVersionProvider, VersionInfo};
use version_status::version::error::ProviderError;

/// Address nothing listens on, for checks that must not touch the network
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/";

/// Provider double that answers with a fixed result and counts queries
pub struct StubControlPlane {
    release_version: Option<String>,
    calls: AtomicUsize,
}

impl StubControlPlane {
    pub fn reporting(version: &str) -> Arc<Self> {
        Arc::new(Self {
            release_version: Some(version.to_string()),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn unavailable() -> Arc<Self> {
        Arc::new(Self {
            release_version: None,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ControlPlaneVersionProvider for StubControlPlane {
    fn version_info(&self) -> Result<VersionInfo, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.release_version {
            Some(version) => Ok(VersionInfo::new(version)),
            None => Err(ProviderError::Unavailable("no route to host".to_string())),
        }
    }
}

/// Start a Version Source answering `{"version": <version>}` at `/`
pub fn version_source(version: &str) -> (ServerGuard, Mock) {
    let mut server = Server::new();
    let mock = server
        .mock("GET", "/")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(r#"{{"version":"{}"}}"#, version))
        .create();
    (server, mock)
}

pub fn source_url(server: &ServerGuard) -> String {
    format!("{}/", server.url())
}
