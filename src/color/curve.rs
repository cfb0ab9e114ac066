use crate::foundation::math::round_u8;

/// 256-entry 8-bit lookup table.
pub type CurveLut = [u8; 256];

/// A tone-curve control point; both coordinates are in `[0, 255]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CurvePoint {
    pub x: f32,
    pub y: f32,
}

impl CurvePoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Which components a curve remaps.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum CurveChannel {
    /// R, G and B through the same table.
    Master,
    R,
    G,
    B,
}

impl CurveChannel {
    fn touches(self, component: usize) -> bool {
        match self {
            Self::Master => component < 3,
            Self::R => component == 0,
            Self::G => component == 1,
            Self::B => component == 2,
        }
    }
}

/// Build a lookup table by piecewise-linear interpolation through `points`.
///
/// Points are sorted by `x`. If the first point is not at `x == 0`, `(0, 0)` is prepended; if
/// the last point is not at `x == 255`, `(255, 255)` is appended. Existing boundary points are
/// never moved or extrapolated.
pub fn build_curve_lut(points: &[CurvePoint]) -> CurveLut {
    let mut sorted = points.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));
    if sorted.first().is_none_or(|p| p.x != 0.0) {
        sorted.insert(0, CurvePoint::new(0.0, 0.0));
    }
    if sorted.last().is_some_and(|p| p.x != 255.0) {
        sorted.push(CurvePoint::new(255.0, 255.0));
    }

    let mut lut = [0u8; 256];
    for (x, out) in lut.iter_mut().enumerate() {
        let xf = x as f32;
        let mut i = 1;
        while i < sorted.len() - 1 && sorted[i].x < xf {
            i += 1;
        }
        let p0 = sorted[i - 1];
        let p1 = sorted[i];
        let t = if p1.x == p0.x {
            0.0
        } else {
            (xf - p0.x) / (p1.x - p0.x)
        };
        *out = round_u8(p0.y + t * (p1.y - p0.y));
    }
    lut
}

/// Remap the selected components of an RGBA8 buffer through `lut`. Alpha is untouched.
pub fn apply_curve_lut(data: &mut [u8], channel: CurveChannel, lut: &CurveLut) {
    for px in data.chunks_exact_mut(4) {
        for (c, v) in px.iter_mut().take(3).enumerate() {
            if channel.touches(c) {
                *v = lut[usize::from(*v)];
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/curve.rs"]
mod tests;
