//! RGB <-> HSL conversion and per-channel hue targeting.
//!
//! Hue is expressed in degrees `[0, 360)`, saturation and lightness in `[0, 1]`.

use crate::foundation::math::round_u8;

/// Convert an 8-bit RGB triple to `(hue_deg, saturation, lightness)`.
pub fn rgb_to_hsl(r: u8, g: u8, b: u8) -> (f32, f32, f32) {
    let r = f32::from(r) / 255.0;
    let g = f32::from(g) / 255.0;
    let b = f32::from(b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;
    if max == min {
        return (0.0, 0.0, l);
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };
    let h = if max == r {
        (g - b) / d + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / d + 2.0
    } else {
        (r - g) / d + 4.0
    };
    (h * 60.0, s, l)
}

fn hue_to_channel(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        return p + (q - p) * 6.0 * t;
    }
    if t < 0.5 {
        return q;
    }
    if t < 2.0 / 3.0 {
        return p + (q - p) * (2.0 / 3.0 - t) * 6.0;
    }
    p
}

/// Convert `(hue_deg, saturation, lightness)` back to rounded 8-bit RGB.
pub fn hsl_to_rgb(h: f32, s: f32, l: f32) -> [u8; 3] {
    let h = h / 360.0;
    if s == 0.0 {
        let v = round_u8(l * 255.0);
        return [v, v, v];
    }
    let q = if l < 0.5 {
        l * (1.0 + s)
    } else {
        l + s - l * s
    };
    let p = 2.0 * l - q;
    [
        round_u8(hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0),
        round_u8(hue_to_channel(p, q, h) * 255.0),
        round_u8(hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0),
    ]
}

/// One of the six hue bands addressable by per-channel HSL adjustments.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum HslChannel {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl HslChannel {
    pub const ALL: [HslChannel; 6] = [
        HslChannel::Red,
        HslChannel::Orange,
        HslChannel::Yellow,
        HslChannel::Green,
        HslChannel::Blue,
        HslChannel::Purple,
    ];

    /// Inclusive `(lo, hi)` hue bounds in degrees. `lo > hi` wraps through 0.
    pub fn range(self) -> (f32, f32) {
        match self {
            Self::Red => (345.0, 15.0),
            Self::Orange => (15.0, 45.0),
            Self::Yellow => (45.0, 75.0),
            Self::Green => (75.0, 165.0),
            Self::Blue => (165.0, 255.0),
            Self::Purple => (255.0, 345.0),
        }
    }

    pub fn contains(self, hue: f32) -> bool {
        let (lo, hi) = self.range();
        if lo > hi {
            hue >= lo || hue <= hi
        } else {
            hue >= lo && hue <= hi
        }
    }

    /// Triangular weight: 1 at the band midpoint, 0 at both edges and outside.
    pub fn weight(self, hue: f32) -> f32 {
        let (lo, hi) = self.range();
        let (span, dist) = if lo > hi {
            let span = (360.0 - lo) + hi;
            let dist = if hue >= lo {
                hue - lo
            } else {
                (360.0 - lo) + hue
            };
            (span, dist)
        } else {
            (hi - lo, hue - lo)
        };
        if dist < 0.0 || dist > span {
            return 0.0;
        }
        let mid = span / 2.0;
        1.0 - (dist - mid).abs() / mid
    }
}

#[cfg(test)]
#[path = "../../tests/unit/color/hsl.rs"]
mod tests;
