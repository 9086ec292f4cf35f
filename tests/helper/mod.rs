//! Shared test utilities

mod control_plane;

pub use control_plane::*;
