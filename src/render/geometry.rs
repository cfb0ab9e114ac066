//! Phase 1 geometry: draw the source rectangle of the base image into the destination
//! surface through a centre-anchored flip/rotate transform.

use crate::compile::state::RenderState;
use crate::foundation::core::{Affine, CropRect, Point, Vec2};
use crate::foundation::error::{RetouchError, RetouchResult};
use crate::foundation::math::store_u8;
use crate::render::surface::Surface;

/// Transform from source-local coordinates (origin at the source rect centre) to
/// destination pixel coordinates.
pub fn draw_transform(state: &RenderState) -> Affine {
    let dest = state.dest_size();
    let sx = if state.flip_h { -1.0 } else { 1.0 };
    let sy = if state.flip_v { -1.0 } else { 1.0 };
    Affine::translate(Vec2::new(
        f64::from(dest.width) / 2.0,
        f64::from(dest.height) / 2.0,
    )) * Affine::scale_non_uniform(sx, sy)
        * Affine::rotate(state.rotation.to_radians())
}

/// Bounds of valid source pixels: the crop rect intersected with the image.
#[derive(Clone, Copy, Debug)]
struct SampleWindow {
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
}

impl SampleWindow {
    fn new(src: CropRect, base: &Surface) -> Option<Self> {
        let x0 = src.x.max(0.0).floor() as i64;
        let y0 = src.y.max(0.0).floor() as i64;
        let x1 = (src.x + src.width).min(f64::from(base.width)).ceil() as i64;
        let y1 = (src.y + src.height).min(f64::from(base.height)).ceil() as i64;
        (x1 > x0 && y1 > y0).then_some(Self { x0, y0, x1, y1 })
    }

    fn contains(&self, p: Point) -> bool {
        p.x >= self.x0 as f64
            && p.x < self.x1 as f64
            && p.y >= self.y0 as f64
            && p.y < self.y1 as f64
    }
}

/// Bilinear sample at continuous position `p` (pixel centres at `i + 0.5`), filtering in
/// premultiplied space and returning straight RGBA.
fn sample_bilinear(base: &Surface, win: &SampleWindow, p: Point) -> [u8; 4] {
    let fx = p.x - 0.5;
    let fy = p.y - 0.5;
    let x0 = fx.floor();
    let y0 = fy.floor();
    let tx = (fx - x0) as f32;
    let ty = (fy - y0) as f32;
    let clamp_x = |x: i64| x.clamp(win.x0, win.x1 - 1) as usize;
    let clamp_y = |y: i64| y.clamp(win.y0, win.y1 - 1) as usize;
    let (xa, xb) = (clamp_x(x0 as i64), clamp_x(x0 as i64 + 1));
    let (ya, yb) = (clamp_y(y0 as i64), clamp_y(y0 as i64 + 1));

    let w = base.width as usize;
    let taps = [
        ((ya * w + xa) * 4, (1.0 - tx) * (1.0 - ty)),
        ((ya * w + xb) * 4, tx * (1.0 - ty)),
        ((yb * w + xa) * 4, (1.0 - tx) * ty),
        ((yb * w + xb) * 4, tx * ty),
    ];
    let mut acc = [0.0f32; 4];
    for (i, k) in taps {
        let a = f32::from(base.data[i + 3]);
        for c in 0..3 {
            acc[c] += f32::from(base.data[i + c]) * a * k;
        }
        acc[3] += a * k;
    }
    if acc[3] <= 0.0 {
        return [0; 4];
    }
    [
        store_u8(acc[0] / acc[3]),
        store_u8(acc[1] / acc[3]),
        store_u8(acc[2] / acc[3]),
        store_u8(acc[3]),
    ]
}

/// Resample `base` into `out` according to the geometry of `state`.
///
/// `out` must already be sized to `state.dest_size()`. Destination pixels that map outside
/// the source rect (non-right-angle rotations) stay transparent.
pub fn draw_geometry(out: &mut Surface, base: &Surface, state: &RenderState) -> RetouchResult<()> {
    if out.size() != state.dest_size() {
        return Err(RetouchError::render(
            "destination surface does not match the render state's size",
        ));
    }
    let src = state.source_rect();
    let Some(win) = SampleWindow::new(src, base) else {
        return Ok(());
    };
    let inv = draw_transform(state).inverse();
    let origin = Vec2::new(src.x + src.width / 2.0, src.y + src.height / 2.0);
    let src_rect = src.to_rect();

    let w = out.width as usize;
    for (i, px) in out.data.chunks_exact_mut(4).enumerate() {
        let d = Point::new((i % w) as f64 + 0.5, (i / w) as f64 + 0.5);
        let p = inv * d + origin;
        if !src_rect.contains(p) || !win.contains(p) {
            continue;
        }
        px.copy_from_slice(&sample_bilinear(base, &win, p));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/geometry.rs"]
mod tests;
