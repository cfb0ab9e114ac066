//! Shared types, configuration, errors, and numeric helpers.

/// Error taxonomy.
pub mod error;
/// Geometry and size primitives.
pub mod core;
/// Editor limits and per-render options.
pub mod config;
pub(crate) mod math;
