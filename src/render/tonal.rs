//! Execution of the tonal descriptor using the CSS Filter Effects color matrices.

use crate::compile::state::TonalDescriptor;
use crate::effects::blur::gaussian_blur_rgba8;
use crate::foundation::error::RetouchResult;
use crate::foundation::math::store_u8;
use crate::render::surface::Surface;

/// Row-major 4x5 color matrix over straight `[r, g, b, a, 1]` in `[0, 1]`.
pub type ColorMatrix = [f32; 20];

pub const IDENTITY: ColorMatrix = [
    1.0, 0.0, 0.0, 0.0, 0.0, //
    0.0, 1.0, 0.0, 0.0, 0.0, //
    0.0, 0.0, 1.0, 0.0, 0.0, //
    0.0, 0.0, 0.0, 1.0, 0.0, //
];

fn rgb_matrix(m: [[f32; 3]; 3], offset: f32) -> ColorMatrix {
    [
        m[0][0], m[0][1], m[0][2], 0.0, offset, //
        m[1][0], m[1][1], m[1][2], 0.0, offset, //
        m[2][0], m[2][1], m[2][2], 0.0, offset, //
        0.0, 0.0, 0.0, 1.0, 0.0, //
    ]
}

/// `brightness(p%)`: linear slope `p / 100`.
pub fn brightness_matrix(percent: f32) -> ColorMatrix {
    let s = percent / 100.0;
    rgb_matrix([[s, 0.0, 0.0], [0.0, s, 0.0], [0.0, 0.0, s]], 0.0)
}

/// `contrast(p%)`: slope `c`, intercept `0.5 - 0.5 c`.
pub fn contrast_matrix(percent: f32) -> ColorMatrix {
    let c = percent / 100.0;
    rgb_matrix(
        [[c, 0.0, 0.0], [0.0, c, 0.0], [0.0, 0.0, c]],
        0.5 - 0.5 * c,
    )
}

/// `sepia(p%)`, amount clamped to `[0, 1]`.
pub fn sepia_matrix(percent: f32) -> ColorMatrix {
    let k = 1.0 - (percent / 100.0).clamp(0.0, 1.0);
    rgb_matrix(
        [
            [0.393 + 0.607 * k, 0.769 - 0.769 * k, 0.189 - 0.189 * k],
            [0.349 - 0.349 * k, 0.686 + 0.314 * k, 0.168 - 0.168 * k],
            [0.272 - 0.272 * k, 0.534 - 0.534 * k, 0.131 + 0.869 * k],
        ],
        0.0,
    )
}

/// `saturate(p%)`.
pub fn saturate_matrix(percent: f32) -> ColorMatrix {
    let s = (percent / 100.0).max(0.0);
    rgb_matrix(
        [
            [0.213 + 0.787 * s, 0.715 - 0.715 * s, 0.072 - 0.072 * s],
            [0.213 - 0.213 * s, 0.715 + 0.285 * s, 0.072 - 0.072 * s],
            [0.213 - 0.213 * s, 0.715 - 0.715 * s, 0.072 + 0.928 * s],
        ],
        0.0,
    )
}

/// `hue-rotate(deg)`.
pub fn hue_rotate_matrix(degrees: f32) -> ColorMatrix {
    let (sin, cos) = degrees.to_radians().sin_cos();
    rgb_matrix(
        [
            [
                0.213 + cos * 0.787 - sin * 0.213,
                0.715 - cos * 0.715 - sin * 0.715,
                0.072 - cos * 0.072 + sin * 0.928,
            ],
            [
                0.213 - cos * 0.213 + sin * 0.143,
                0.715 + cos * 0.285 + sin * 0.140,
                0.072 - cos * 0.072 - sin * 0.283,
            ],
            [
                0.213 - cos * 0.213 - sin * 0.787,
                0.715 - cos * 0.715 + sin * 0.715,
                0.072 + cos * 0.928 + sin * 0.072,
            ],
        ],
        0.0,
    )
}

/// Matrix equivalent to applying `first` and then `second`.
pub fn then(first: &ColorMatrix, second: &ColorMatrix) -> ColorMatrix {
    let mut out = [0.0f32; 20];
    for row in 0..4 {
        for col in 0..5 {
            let mut acc = if col == 4 { second[row * 5 + 4] } else { 0.0 };
            for k in 0..4 {
                acc += second[row * 5 + k] * first[k * 5 + col];
            }
            out[row * 5 + col] = acc;
        }
    }
    out
}

/// Compose the descriptor's color terms in filter order: brightness, contrast, sepia,
/// saturate, hue-rotate.
pub fn tonal_matrix(desc: &TonalDescriptor) -> ColorMatrix {
    let steps = [
        brightness_matrix(desc.brightness),
        contrast_matrix(desc.contrast),
        sepia_matrix(desc.sepia),
        saturate_matrix(desc.saturation),
        hue_rotate_matrix(desc.hue_rotate),
    ];
    steps.iter().fold(IDENTITY, |acc, m| then(&acc, m))
}

pub fn apply_color_matrix(data: &mut [u8], m: &ColorMatrix) {
    for px in data.chunks_exact_mut(4) {
        let r = f32::from(px[0]) / 255.0;
        let g = f32::from(px[1]) / 255.0;
        let b = f32::from(px[2]) / 255.0;
        let a = f32::from(px[3]) / 255.0;
        for (c, row) in m.chunks_exact(5).take(3).enumerate() {
            let v = row[0] * r + row[1] * g + row[2] * b + row[3] * a + row[4];
            px[c] = store_u8(v.clamp(0.0, 1.0) * 255.0);
        }
    }
}

/// Apply the tonal descriptor to a freshly drawn surface: color matrix, then blur.
pub fn apply_tonal(surface: &mut Surface, desc: &TonalDescriptor) -> RetouchResult<()> {
    if desc.is_identity() {
        return Ok(());
    }
    let m = tonal_matrix(desc);
    if m != IDENTITY {
        apply_color_matrix(&mut surface.data, &m);
    }
    if desc.blur > 0.0 {
        surface.data = gaussian_blur_rgba8(&surface.data, surface.size(), desc.blur)?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/tonal.rs"]
mod tests;
