//! Surface-level composite effects: film grain (overlay) and vignette (multiply).
//!
//! Both draw a synthetic source layer over the straight-alpha destination with
//! Porter-Duff source-over, using a separable blend function `B(sc, dc)`.

use crate::foundation::core::Canvas;
use crate::foundation::error::{RetouchError, RetouchResult};
use crate::foundation::math::{hash_u32, store_u8};

const GRAIN_MAX_OPACITY: f32 = 0.35;
const VIGNETTE_MAX_ALPHA: f32 = 0.85;
const VIGNETTE_OUTER_SCALE: f32 = 1.42;

fn overlay(s: f32, d: f32) -> f32 {
    if d <= 0.5 {
        2.0 * s * d
    } else {
        1.0 - 2.0 * (1.0 - s) * (1.0 - d)
    }
}

fn multiply(s: f32, d: f32) -> f32 {
    s * d
}

/// Blend one source pixel (straight color `sc`, coverage `sa`) over a straight-alpha destination.
#[inline(always)]
fn composite_px<F>(d: &mut [u8], sc: [f32; 3], sa: f32, blend_fn: F)
where
    F: Fn(f32, f32) -> f32,
{
    // out_a = sa + da * (1 - sa)
    // out_p = sp * (1 - da) + dp * (1 - sa) + B(sc, dc) * sa * da
    let da = f32::from(d[3]) / 255.0;
    let out_a = (sa + da * (1.0 - sa)).clamp(0.0, 1.0);
    if out_a <= 0.0 {
        return;
    }
    for c in 0..3 {
        let dc = f32::from(d[c]) / 255.0;
        let b = blend_fn(sc[c], dc).clamp(0.0, 1.0);
        let out_p = sc[c] * sa * (1.0 - da) + dc * da * (1.0 - sa) + b * sa * da;
        d[c] = store_u8(out_p / out_a * 255.0);
    }
    d[3] = store_u8(out_a * 255.0);
}

fn check_len(data: &[u8], size: Canvas) -> RetouchResult<()> {
    if data.len() != size.rgba_len()? {
        return Err(RetouchError::validation(
            "composite effect buffer does not match width*height*4",
        ));
    }
    Ok(())
}

/// Grey noise value in `[0, 255]` for one pixel, uniform in `[-1, 1]` around mid-grey.
fn grain_value(seed: u64, x: u32, y: u32) -> f32 {
    let u = hash_u32(seed, x, y) as f32 / u32::MAX as f32;
    f32::from(store_u8((u * 2.0 - 1.0) * 128.0 + 128.0)) / 255.0
}

/// Overlay an opaque grey noise field at `amount / 100 * 0.35` opacity.
///
/// The field is fully determined by `seed`; callers wanting fresh noise per render pass a
/// fresh seed.
pub fn apply_grain(data: &mut [u8], size: Canvas, amount: f32, seed: u64) -> RetouchResult<()> {
    check_len(data, size)?;
    if amount <= 0.0 {
        return Ok(());
    }
    let opacity = (amount / 100.0 * GRAIN_MAX_OPACITY).clamp(0.0, 1.0);
    let w = size.width as usize;
    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let x = (i % w) as u32;
        let y = (i / w) as u32;
        let v = grain_value(seed, x, y);
        composite_px(px, [v; 3], opacity, overlay);
    }
    Ok(())
}

/// Darken towards the corners with a black radial ramp, multiplied over the surface.
///
/// The ramp is transparent inside `max(cx, cy) * (1 - feather / 100)` and reaches
/// `amount / 100 * 0.85` alpha at `max(cx, cy) * 1.42`.
pub fn apply_vignette(
    data: &mut [u8],
    size: Canvas,
    amount: f32,
    feather: f32,
) -> RetouchResult<()> {
    check_len(data, size)?;
    if amount <= 0.0 {
        return Ok(());
    }
    let cx = size.width as f32 / 2.0;
    let cy = size.height as f32 / 2.0;
    let reach = cx.max(cy);
    let inner = reach * (1.0 - feather / 100.0);
    let outer = reach * VIGNETTE_OUTER_SCALE;
    let edge_alpha = (amount / 100.0 * VIGNETTE_MAX_ALPHA).clamp(0.0, 1.0);
    let w = size.width as usize;

    for (i, px) in data.chunks_exact_mut(4).enumerate() {
        let dx = (i % w) as f32 + 0.5 - cx;
        let dy = (i / w) as f32 + 0.5 - cy;
        let r = (dx * dx + dy * dy).sqrt();
        let t = if r <= inner {
            0.0
        } else if r >= outer || outer <= inner {
            1.0
        } else {
            (r - inner) / (outer - inner)
        };
        let sa = edge_alpha * t;
        if sa <= 0.0 {
            continue;
        }
        composite_px(px, [0.0; 3], sa, multiply);
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
