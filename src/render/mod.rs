//! CPU rendering of a base image plus an operation prefix.

/// Render entry points.
pub mod compositor;
pub(crate) mod geometry;
/// Luminance and per-channel distributions of a rendered surface.
pub mod histogram;
/// Owned RGBA8 pixel buffers.
pub mod surface;
/// Compound tonal filter as a color matrix.
pub mod tonal;
