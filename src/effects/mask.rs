//! Local exposure layers: elliptical (radial) and linear (gradient) masks.
//!
//! Positions and radii are normalized to the image dimensions. Each layer adds
//! `exposure / 100 * weight * 80` to R, G and B.

use crate::foundation::core::Canvas;
use crate::foundation::error::{RetouchError, RetouchResult};
use crate::foundation::math::store_u8;

const EXPOSURE_GAIN: f32 = 80.0;

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RadialMaskConfig {
    pub cx: f32,
    pub cy: f32,
    pub rx: f32,
    pub ry: f32,
    pub feather: f32,
    pub exposure: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientMaskConfig {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub feather: f32,
    pub exposure: f32,
}

fn feather_fraction(feather: f32) -> f32 {
    (feather / 100.0).max(0.01)
}

fn check_len(data: &[u8], size: Canvas) -> RetouchResult<()> {
    if data.len() != size.rgba_len()? {
        return Err(RetouchError::validation(
            "mask buffer does not match width*height*4",
        ));
    }
    Ok(())
}

fn boost_px(px: &mut [u8], boost: f32) {
    for c in &mut px[..3] {
        *c = store_u8(f32::from(*c) + boost);
    }
}

/// Radial exposure: full weight inside `1 - feather` of the ellipse, linear falloff to its rim.
pub fn apply_radial_mask(data: &mut [u8], size: Canvas, m: &RadialMaskConfig) -> RetouchResult<()> {
    check_len(data, size)?;
    // Degenerate ellipses cover no pixels.
    if m.exposure == 0.0 || m.rx <= 0.0 || m.ry <= 0.0 {
        return Ok(());
    }
    let exp = m.exposure / 100.0;
    let frac = feather_fraction(m.feather);
    let inner = 1.0 - frac;
    let (w, h) = (size.width as f32, size.height as f32);

    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let x = (i % size.width as usize) as f32;
        let y = (i / size.width as usize) as f32;
        let dx = (x - m.cx * w) / (m.rx * w);
        let dy = (y - m.cy * h) / (m.ry * h);
        let dist = (dx * dx + dy * dy).sqrt();
        let weight = if dist <= inner {
            1.0
        } else if dist <= 1.0 {
            1.0 - (dist - inner) / frac
        } else {
            0.0
        };
        if weight == 0.0 {
            continue;
        }
        boost_px(px, exp * weight * EXPOSURE_GAIN);
    }
    Ok(())
}

/// Linear exposure along `(x1,y1) -> (x2,y2)`: full weight on the start side of the midpoint,
/// fading across a band of width `feather` centred on it.
pub fn apply_gradient_mask(
    data: &mut [u8],
    size: Canvas,
    m: &GradientMaskConfig,
) -> RetouchResult<()> {
    check_len(data, size)?;
    if m.exposure == 0.0 {
        return Ok(());
    }
    let exp = m.exposure / 100.0;
    let frac = feather_fraction(m.feather);
    let half = frac / 2.0;
    let (w, h) = (size.width as f32, size.height as f32);
    let ax = (m.x2 - m.x1) * w;
    let ay = (m.y2 - m.y1) * h;
    let len2 = ax * ax + ay * ay;

    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let x = (i % size.width as usize) as f32;
        let y = (i / size.width as usize) as f32;
        let t = if len2 == 0.0 {
            0.0
        } else {
            let bx = x - m.x1 * w;
            let by = y - m.y1 * h;
            ((bx * ax + by * ay) / len2).clamp(0.0, 1.0)
        };
        let weight = if t <= 0.5 - half {
            1.0
        } else if t <= 0.5 + half {
            1.0 - (t - (0.5 - half)) / frac
        } else {
            0.0
        };
        if weight == 0.0 {
            continue;
        }
        boost_px(px, exp * weight * EXPOSURE_GAIN);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/mask.rs"]
mod tests;
