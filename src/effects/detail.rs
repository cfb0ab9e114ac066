//! Unsharp-mask style local contrast: clarity (midtone gated) and sharpen (thresholded).

use crate::effects::blur::box_blur_rgb;
use crate::foundation::core::Canvas;
use crate::foundation::error::RetouchResult;
use crate::foundation::math::{luma, round_u8};

const CLARITY_RADIUS: f32 = 3.0;
const SHARPEN_THRESHOLD: f32 = 8.0;

/// Add midtone-weighted high-frequency detail; `amount` is nominally `[-100, 100]`.
pub fn apply_clarity(data: &mut [u8], size: Canvas, amount: f32) -> RetouchResult<()> {
    if amount == 0.0 {
        return Ok(());
    }
    let factor = amount / 100.0;
    let blurred = box_blur_rgb(data, size, CLARITY_RADIUS)?;
    for (px, bl) in data.chunks_exact_mut(4).zip(blurred.chunks_exact(4)) {
        let y = luma(f32::from(px[0]), f32::from(px[1]), f32::from(px[2]));
        let mid_weight = 1.0 - (2.0 * (y / 255.0) - 1.0).abs();
        for c in 0..3 {
            let v = f32::from(px[c]);
            let detail = v - f32::from(bl[c]);
            px[c] = round_u8(v + factor * mid_weight * detail);
        }
    }
    Ok(())
}

/// Unsharp mask over all tones; differences below a small threshold are left alone.
pub fn apply_sharpen(data: &mut [u8], size: Canvas, amount: f32, radius: f32) -> RetouchResult<()> {
    if amount == 0.0 {
        return Ok(());
    }
    let strength = amount / 100.0;
    let blurred = box_blur_rgb(data, size, radius.max(1.0))?;
    for (px, bl) in data.chunks_exact_mut(4).zip(blurred.chunks_exact(4)) {
        for c in 0..3 {
            let v = f32::from(px[c]);
            let detail = v - f32::from(bl[c]);
            if detail.abs() < SHARPEN_THRESHOLD {
                continue;
            }
            px[c] = round_u8(v + strength * detail);
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/detail.rs"]
mod tests;
