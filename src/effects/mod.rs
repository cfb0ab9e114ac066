//! Per-pixel adjustments and composite effects.
//!
//! Every function here mutates a straight-alpha RGBA8 buffer in place and is an exact no-op at
//! its neutral parameter value.

pub mod blur;
/// Temperature, tint, HSL, highlight/shadow, vibrance, split toning.
pub mod color;
/// Grain and vignette layers blended over the image.
pub mod composite;
/// Clarity and sharpen (local contrast from a box blur).
pub mod detail;
/// Radial and linear-gradient exposure masks.
pub mod mask;
