use crate::color::curve::{CurveChannel, CurvePoint};
use crate::color::hsl::HslChannel;
use crate::effects::color::SplitToning;
use crate::effects::mask::{GradientMaskConfig, RadialMaskConfig};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlipDirection {
    Horizontal,
    Vertical,
}

/// One immutable edit record in the operation log.
///
/// Serialized as an internally tagged JSON object (`{"type": "rotate", "angle": 90}`), which is
/// also the session file format. Values are not range-checked here; pixel math clamps.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Operation {
    #[serde(rename_all = "camelCase")]
    Preset {
        preset_id: String,
        intensity: f32,
    },
    Brightness {
        value: f32,
    },
    Contrast {
        value: f32,
    },
    Crop {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
    Rotate {
        angle: f64,
    },
    Flip {
        direction: FlipDirection,
    },
    Temperature {
        value: f32,
    },
    Tint {
        value: f32,
    },
    Hsl {
        channel: HslChannel,
        hue: f32,
        sat: f32,
        light: f32,
    },
    Grain {
        amount: f32,
    },
    Vignette {
        amount: f32,
        feather: f32,
    },
    Curve {
        channel: CurveChannel,
        points: Vec<CurvePoint>,
    },
    RadialMask {
        config: RadialMaskConfig,
    },
    GradientMask {
        config: GradientMaskConfig,
    },
    Clarity {
        amount: f32,
    },
    Vibrance {
        amount: f32,
    },
    HighlightShadow {
        highlights: f32,
        shadows: f32,
    },
    Sharpen {
        amount: f32,
        radius: f32,
    },
    SplitToning(SplitToning),
}

impl Operation {
    /// Every wire tag, in declaration order.
    pub const KNOWN_TAGS: [&'static str; 19] = [
        "preset",
        "brightness",
        "contrast",
        "crop",
        "rotate",
        "flip",
        "temperature",
        "tint",
        "hsl",
        "grain",
        "vignette",
        "curve",
        "radialMask",
        "gradientMask",
        "clarity",
        "vibrance",
        "highlightShadow",
        "sharpen",
        "splitToning",
    ];

    pub fn is_known_tag(tag: &str) -> bool {
        Self::KNOWN_TAGS.contains(&tag)
    }

    /// The `type` tag this operation serializes with.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Preset { .. } => "preset",
            Self::Brightness { .. } => "brightness",
            Self::Contrast { .. } => "contrast",
            Self::Crop { .. } => "crop",
            Self::Rotate { .. } => "rotate",
            Self::Flip { .. } => "flip",
            Self::Temperature { .. } => "temperature",
            Self::Tint { .. } => "tint",
            Self::Hsl { .. } => "hsl",
            Self::Grain { .. } => "grain",
            Self::Vignette { .. } => "vignette",
            Self::Curve { .. } => "curve",
            Self::RadialMask { .. } => "radialMask",
            Self::GradientMask { .. } => "gradientMask",
            Self::Clarity { .. } => "clarity",
            Self::Vibrance { .. } => "vibrance",
            Self::HighlightShadow { .. } => "highlightShadow",
            Self::Sharpen { .. } => "sharpen",
            Self::SplitToning(_) => "splitToning",
        }
    }

    pub fn rotate(angle: f64) -> Self {
        Self::Rotate { angle }
    }

    pub fn flip(direction: FlipDirection) -> Self {
        Self::Flip { direction }
    }

    pub fn preset(preset_id: impl Into<String>, intensity: f32) -> Self {
        Self::Preset {
            preset_id: preset_id.into(),
            intensity,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/operation.rs"]
mod tests;
