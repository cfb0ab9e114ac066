use crate::foundation::core::Canvas;
use crate::foundation::error::{RetouchError, RetouchResult};
use crate::foundation::math::store_u8;

fn expect_len(src: &[u8], size: Canvas, what: &str) -> RetouchResult<()> {
    let expected = size.rgba_len()?;
    if src.len() != expected {
        return Err(RetouchError::validation(format!(
            "{what} expects src matching width*height*4"
        )));
    }
    Ok(())
}

/// Integer taps of a separable filter, applied as `sum(tap * sample) / norm`.
struct Kernel {
    taps: Vec<u32>,
    norm: f32,
}

impl Kernel {
    fn radius(&self) -> i64 {
        (self.taps.len() / 2) as i64
    }
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

/// One clamp-to-edge pass over the first `channels` components. Components past `channels`
/// are copied through unchanged.
fn convolve(src: &[u8], dst: &mut [u8], size: Canvas, k: &Kernel, channels: usize, axis: Axis) {
    let w = i64::from(size.width);
    let h = i64::from(size.height);
    let r = k.radius();
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 4];
            for (ki, &tap) in k.taps.iter().enumerate() {
                let d = ki as i64 - r;
                let (sx, sy) = match axis {
                    Axis::Horizontal => ((x + d).clamp(0, w - 1), y),
                    Axis::Vertical => (x, (y + d).clamp(0, h - 1)),
                };
                let idx = ((sy * w + sx) as usize) * 4;
                for c in 0..channels {
                    acc[c] += u64::from(tap) * u64::from(src[idx + c]);
                }
            }
            let i = ((y * w + x) as usize) * 4;
            for c in 0..4 {
                dst[i + c] = if c < channels {
                    store_u8(acc[c] as f32 / k.norm)
                } else {
                    src[i + c]
                };
            }
        }
    }
}

fn separable(src: &[u8], size: Canvas, k: &Kernel, channels: usize) -> Vec<u8> {
    let mut tmp = vec![0u8; src.len()];
    let mut out = vec![0u8; src.len()];
    convolve(src, &mut tmp, size, k, channels, Axis::Horizontal);
    convolve(&tmp, &mut out, size, k, channels, Axis::Vertical);
    out
}

/// Separable box blur of the RGB components; alpha is copied from `src`.
///
/// The radius is rounded and floored at 1. Samples outside the image clamp to the edge.
/// Used as the low-pass basis for clarity and sharpening.
pub fn box_blur_rgb(src: &[u8], size: Canvas, radius: f32) -> RetouchResult<Vec<u8>> {
    expect_len(src, size, "box_blur_rgb")?;
    let r = if radius.is_finite() {
        radius.round().max(1.0) as usize
    } else {
        1
    };
    let k = Kernel {
        taps: vec![1; 2 * r + 1],
        norm: (2 * r + 1) as f32,
    };
    Ok(separable(src, size, &k, 3))
}

const Q16: i64 = 1 << 16;

/// Gaussian taps out to three sigma in 16.16 fixed point, summing to exactly one.
fn gaussian_kernel(sigma: f32) -> RetouchResult<Kernel> {
    let radius = (sigma * 3.0).ceil().max(1.0) as i32;
    let two_var = 2.0 * f64::from(sigma).powi(2);
    let raw: Vec<f64> = (-radius..=radius)
        .map(|i| (-f64::from(i * i) / two_var).exp())
        .collect();
    let sum: f64 = raw.iter().sum();
    if !sum.is_finite() || sum <= 0.0 {
        return Err(RetouchError::render("gaussian kernel sum is zero"));
    }
    let mut taps: Vec<i64> = raw
        .iter()
        .map(|w| ((w / sum) * Q16 as f64).round() as i64)
        .collect();
    let mid = taps.len() / 2;
    taps[mid] += Q16 - taps.iter().sum::<i64>();
    Ok(Kernel {
        taps: taps.into_iter().map(|t| t.clamp(0, Q16) as u32).collect(),
        norm: Q16 as f32,
    })
}

/// Gaussian blur of a straight-alpha RGBA8 buffer with standard deviation `sigma_px`.
///
/// Colors are weighted by alpha during filtering so transparent pixels do not bleed black.
pub fn gaussian_blur_rgba8(src: &[u8], size: Canvas, sigma_px: f32) -> RetouchResult<Vec<u8>> {
    expect_len(src, size, "gaussian_blur_rgba8")?;
    if !sigma_px.is_finite() || sigma_px <= 0.0 {
        return Ok(src.to_vec());
    }
    let k = gaussian_kernel(sigma_px)?;
    let mut premul = src.to_vec();
    premultiply_in_place(&mut premul);
    let mut out = separable(&premul, size, &k, 4);
    unpremultiply_in_place(&mut out);
    Ok(out)
}

fn premultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        for c in &mut px[..3] {
            *c = ((u16::from(*c) * a + 127) / 255) as u8;
        }
    }
}

fn unpremultiply_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u32::from(px[3]);
        if a == 0 {
            px[..3].fill(0);
            continue;
        }
        for c in &mut px[..3] {
            *c = ((u32::from(*c) * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
