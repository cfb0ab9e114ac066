//! Per-pixel color grading on straight-alpha RGBA8 buffers.
//!
//! Every function mutates RGB in place, clamps to `[0, 255]` and leaves alpha untouched.

use crate::color::hsl::{HslChannel, hsl_to_rgb, rgb_to_hsl};
use crate::foundation::math::{luma, round_u8, smooth, store_u8};

const TEMPERATURE_GAIN: f32 = 30.0;
const TINT_GREEN_GAIN: f32 = 20.0;
const TINT_RB_GAIN: f32 = 10.0;
const RECOVERY_GAIN: f32 = 60.0;
const SKIN_HUE_DEG: (f32, f32) = (20.0, 50.0);
const SKIN_PROTECTION: f32 = 0.4;

/// Warm (+) / cool (-) white balance shift; `value` is nominally `[-100, 100]`.
pub fn apply_temperature(data: &mut [u8], value: f32) {
    let k = value / 100.0 * TEMPERATURE_GAIN;
    for px in data.chunks_exact_mut(4) {
        px[0] = store_u8(f32::from(px[0]) + k);
        px[2] = store_u8(f32::from(px[2]) - k);
    }
}

/// Magenta (+) / green (-) shift; `value` is nominally `[-100, 100]`.
pub fn apply_tint(data: &mut [u8], value: f32) {
    let t = value / 100.0;
    for px in data.chunks_exact_mut(4) {
        px[1] = store_u8(f32::from(px[1]) - t * TINT_GREEN_GAIN);
        px[0] = store_u8(f32::from(px[0]) + t * TINT_RB_GAIN);
        px[2] = store_u8(f32::from(px[2]) + t * TINT_RB_GAIN);
    }
}

/// Shift hue/saturation/lightness of pixels whose hue falls in `channel`'s band.
///
/// The shift is scaled by the triangular band weight, so pixels at the band centre move the
/// full amount and pixels at the edges do not move.
pub fn apply_hsl(
    data: &mut [u8],
    channel: HslChannel,
    hue_shift: f32,
    sat_shift: f32,
    light_shift: f32,
) {
    for px in data.chunks_exact_mut(4) {
        let (h, s, l) = rgb_to_hsl(px[0], px[1], px[2]);
        if !channel.contains(h) {
            continue;
        }
        let w = channel.weight(h);
        if w == 0.0 {
            continue;
        }
        let nh = (h + hue_shift * w + 360.0).rem_euclid(360.0);
        let ns = (s + sat_shift / 100.0 * w).clamp(0.0, 1.0);
        let nl = (l + light_shift / 100.0 * w).clamp(0.0, 1.0);
        let [r, g, b] = hsl_to_rgb(nh, ns, nl);
        px[0] = r;
        px[1] = g;
        px[2] = b;
    }
}

/// Luma-gated additive recovery of highlights (luma 180..255) and shadows (luma 100..0).
pub fn apply_highlight_shadow(data: &mut [u8], highlights: f32, shadows: f32) {
    if highlights == 0.0 && shadows == 0.0 {
        return;
    }
    let h_factor = highlights / 100.0;
    let s_factor = shadows / 100.0;
    for px in data.chunks_exact_mut(4) {
        let (r, g, b) = (f32::from(px[0]), f32::from(px[1]), f32::from(px[2]));
        let y = luma(r, g, b);

        let h_weight = if y > 180.0 {
            smooth(((y - 180.0) / 75.0).min(1.0))
        } else {
            0.0
        };
        let s_weight = if y < 100.0 { smooth(1.0 - y / 100.0) } else { 0.0 };

        let boost = h_factor * h_weight * RECOVERY_GAIN + s_factor * s_weight * RECOVERY_GAIN;
        px[0] = store_u8(r + boost);
        px[1] = store_u8(g + boost);
        px[2] = store_u8(b + boost);
    }
}

/// Saturation boost that favours muted pixels and protects skin tones.
pub fn apply_vibrance(data: &mut [u8], amount: f32) {
    if amount == 0.0 {
        return;
    }
    let factor = amount / 100.0;
    for px in data.chunks_exact_mut(4) {
        let r = f32::from(px[0]) / 255.0;
        let g = f32::from(px[1]) / 255.0;
        let b = f32::from(px[2]) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let s = if max == 0.0 { 0.0 } else { (max - min) / max };

        let (hue, _, _) = rgb_to_hsl(px[0], px[1], px[2]);
        let skin = if (SKIN_HUE_DEG.0..=SKIN_HUE_DEG.1).contains(&hue) {
            SKIN_PROTECTION
        } else {
            1.0
        };

        let new_s = (s + (1.0 - s) * factor * skin).clamp(0.0, 1.0);
        if (new_s - s).abs() < 0.001 {
            continue;
        }
        // Grey pixels have no chroma direction to scale.
        let ratio = if s == 0.0 { 1.0 } else { new_s / s };
        let mid = (r + g + b) / 3.0;
        px[0] = round_u8((mid + (r - mid) * ratio) * 255.0);
        px[1] = round_u8((mid + (g - mid) * ratio) * 255.0);
        px[2] = round_u8((mid + (b - mid) * ratio) * 255.0);
    }
}

/// Split-toning parameters: hues in degrees, saturations and balance nominally `[0|-100, 100]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitToning {
    pub highlight_hue: f32,
    pub highlight_sat: f32,
    pub shadow_hue: f32,
    pub shadow_sat: f32,
    pub balance: f32,
}

impl SplitToning {
    pub fn is_neutral(&self) -> bool {
        self.highlight_sat == 0.0 && self.shadow_sat == 0.0
    }
}

/// Tint highlights and shadows towards two hues around a balance-shifted luma midpoint.
pub fn apply_split_toning(data: &mut [u8], st: &SplitToning) {
    if st.is_neutral() {
        return;
    }
    let h_sat = st.highlight_sat / 100.0;
    let s_sat = st.shadow_sat / 100.0;
    let midpoint = 128.0 + st.balance * 0.5;
    let hi_span = (255.0 - midpoint).max(f32::EPSILON);
    let lo_span = midpoint.max(f32::EPSILON);
    let h_color = hsl_to_rgb(st.highlight_hue, h_sat, 0.5).map(f32::from);
    let s_color = hsl_to_rgb(st.shadow_hue, s_sat, 0.5).map(f32::from);

    for px in data.chunks_exact_mut(4) {
        let mut c = [f32::from(px[0]), f32::from(px[1]), f32::from(px[2])];
        let y = luma(c[0], c[1], c[2]);

        let ht = ((y - midpoint) / hi_span).clamp(0.0, 1.0);
        let h_weight = smooth(ht);
        let stt = ((midpoint - y) / lo_span).clamp(0.0, 1.0);
        let s_weight = smooth(stt);

        if h_weight > 0.0 && h_sat > 0.0 {
            let w = h_weight * h_sat * 0.5;
            for (v, t) in c.iter_mut().zip(h_color) {
                *v += (t - *v) * w;
            }
        }
        if s_weight > 0.0 && s_sat > 0.0 {
            let w = s_weight * s_sat * 0.5;
            for (v, t) in c.iter_mut().zip(s_color) {
                *v += (t - *v) * w;
            }
        }

        px[0] = round_u8(c[0]);
        px[1] = round_u8(c[1]);
        px[2] = round_u8(c[2]);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/color.rs"]
mod tests;
