use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

// =============================================================================
// Network-related constants
// =============================================================================

/// Endpoint reporting the latest published release
pub const DEFAULT_LATEST_VERSION_URL: &str = "https://versioncheck.linkerd.io/version.json";

/// Timeout for each version fetch in milliseconds (5 seconds)
pub const DEFAULT_FETCH_TIMEOUT_MS: u64 = 5_000;

/// Checker configuration, fixed for the lifetime of a checker
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct CheckerConfig {
    /// Version Source queried when no override is set
    pub latest_version_url: String,
    /// Pinned expected version; empty means "no override"
    pub version_override: String,
    pub fetch_timeout_ms: u64,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            latest_version_url: DEFAULT_LATEST_VERSION_URL.to_string(),
            version_override: String::new(),
            fetch_timeout_ms: DEFAULT_FETCH_TIMEOUT_MS,
        }
    }
}

impl CheckerConfig {
    pub fn new(latest_version_url: &str, version_override: &str) -> Self {
        Self {
            latest_version_url: latest_version_url.to_string(),
            version_override: version_override.to_string(),
            ..Default::default()
        }
    }

    /// Returns the override, treating an empty string as unset
    pub fn override_version(&self) -> Option<&str> {
        Some(self.version_override.as_str()).filter(|v| !v.is_empty())
    }

    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_millis(self.fetch_timeout_ms)
    }
}

/// Returns the path to the data directory for version-status.
/// Uses $XDG_DATA_HOME/version-status if XDG_DATA_HOME is set,
/// otherwise falls back to ~/.local/share/version-status,
/// or ./version-status if neither is available.
pub fn data_dir() -> PathBuf {
    data_dir_with_env(std::env::var("XDG_DATA_HOME").ok(), dirs::home_dir())
}

/// Returns the path to the log file.
pub fn log_path() -> PathBuf {
    data_dir().join("version-status.log")
}

fn data_dir_with_env(xdg_data_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let data_dir = xdg_data_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));

    data_dir.join("version-status")
}
