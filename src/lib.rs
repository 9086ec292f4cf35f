pub mod config;
pub mod healthcheck;
pub mod logging;
pub mod version;
