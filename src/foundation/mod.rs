//! Geometry, errors, and configuration shared by every other module.

/// JSON render configuration.
pub mod config;
/// Canvas and rectangle geometry.
pub mod core;
/// Error taxonomy.
pub mod error;
