//! Version freshness checks for the CLI and the control plane
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────┐     ┌─────────────────┐     ┌──────────────────┐
//! │ Version Source │────▶│     Checker     │◀────│  Control Plane   │
//! │ (latest/fetch) │     │ (compare, 2x)   │     │ (self-reported)  │
//! └────────────────┘     └─────────────────┘     └──────────────────┘
//!                                 │
//!                                 ▼
//!                        ┌─────────────────┐
//!                        │  CheckResult x2 │
//!                        └─────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`checker`]: Resolves the expected version and produces the two check results
//! - [`source`]: HTTP client for the endpoint reporting the latest release
//! - [`control_plane`]: Provider trait for the control plane version and its HTTP implementation
//! - [`error`]: Error types for version resolution and provider queries

pub mod checker;
pub mod control_plane;
pub mod error;
pub mod source;

/// Version of this build, as embedded by cargo
pub const CLIENT_VERSION: &str = concat!("v", env!("CARGO_PKG_VERSION"));
