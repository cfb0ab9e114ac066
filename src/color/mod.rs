//! Color-space conversion and tone curves.

pub mod curve;
pub mod hsl;
