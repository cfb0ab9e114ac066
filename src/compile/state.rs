use crate::{
    color::curve::{CurveChannel, CurvePoint},
    color::hsl::HslChannel,
    effects::color::SplitToning,
    effects::mask::{GradientMaskConfig, RadialMaskConfig},
    foundation::core::{Canvas, CropRect},
    model::operation::{FlipDirection, Operation},
    model::preset::{PresetConfig, find_preset},
};

const DEFAULT_VIGNETTE_FEATHER: f32 = 50.0;
const DEFAULT_SHARPEN_RADIUS: f32 = 2.0;

/// CSS-filter equivalent tonal adjustment applied while drawing the base image.
///
/// Percentages follow the CSS Filter Effects conventions: identity is brightness/contrast/
/// saturation 100 and sepia/hue-rotate/blur 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TonalDescriptor {
    /// `brightness(%)`, already combined with the standalone brightness override.
    pub brightness: f32,
    /// `contrast(%)`, already combined with the standalone contrast override.
    pub contrast: f32,
    /// `sepia(%)`.
    pub sepia: f32,
    /// `saturate(%)`.
    pub saturation: f32,
    /// `hue-rotate(deg)`.
    pub hue_rotate: f32,
    /// `blur(px)`.
    pub blur: f32,
    /// Whether a preset contributed; controls which terms the filter string lists.
    pub from_preset: bool,
}

impl Default for TonalDescriptor {
    fn default() -> Self {
        Self {
            brightness: 100.0,
            contrast: 100.0,
            sepia: 0.0,
            saturation: 100.0,
            hue_rotate: 0.0,
            blur: 0.0,
            from_preset: false,
        }
    }
}

impl TonalDescriptor {
    fn from_parts(preset: Option<PresetConfig>, brightness_adj: f32, contrast_adj: f32) -> Self {
        match preset {
            Some(cfg) => Self {
                brightness: cfg.brightness * brightness_adj / 100.0,
                contrast: cfg.contrast * contrast_adj / 100.0,
                sepia: cfg.sepia,
                saturation: cfg.saturation,
                hue_rotate: cfg.hue_rotate,
                blur: cfg.blur,
                from_preset: true,
            },
            None => Self {
                brightness: brightness_adj,
                contrast: contrast_adj,
                ..Self::default()
            },
        }
    }

    pub fn is_identity(&self) -> bool {
        self.brightness == 100.0
            && self.contrast == 100.0
            && self.sepia == 0.0
            && self.saturation == 100.0
            && self.hue_rotate == 0.0
            && self.blur == 0.0
    }

    /// Render as a CSS `filter` value, e.g. `brightness(95%) contrast(115%) sepia(5%) ...`.
    pub fn to_filter_string(&self) -> String {
        if !self.from_preset {
            return format!("brightness({}%) contrast({}%)", self.brightness, self.contrast);
        }
        let mut parts = vec![
            format!("brightness({}%)", self.brightness),
            format!("contrast({}%)", self.contrast),
            format!("sepia({}%)", self.sepia),
            format!("saturate({}%)", self.saturation),
        ];
        if self.hue_rotate != 0.0 {
            parts.push(format!("hue-rotate({}deg)", self.hue_rotate));
        }
        if self.blur != 0.0 {
            parts.push(format!("blur({}px)", self.blur));
        }
        parts.join(" ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HslAdjustment {
    pub channel: HslChannel,
    pub hue: f32,
    pub sat: f32,
    pub light: f32,
}

impl HslAdjustment {
    pub fn is_neutral(&self) -> bool {
        self.hue == 0.0 && self.sat == 0.0 && self.light == 0.0
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CurveAdjustment {
    pub channel: CurveChannel,
    pub points: Vec<CurvePoint>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vignette {
    pub amount: f32,
    pub feather: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sharpen {
    pub amount: f32,
    pub radius: f32,
}

/// Consolidated state folded from the active operation prefix.
///
/// Derived on every render and never stored.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    /// Dimensions of the base image the operations were folded against.
    pub base: Canvas,
    /// Accumulated rotation in degrees, kept in `(-360, 360)` with the sign of the sum.
    pub rotation: f64,
    pub flip_h: bool,
    pub flip_v: bool,
    /// Last crop wins; `None` draws the full base image.
    pub crop: Option<CropRect>,
    pub tonal: TonalDescriptor,
    pub temperature: f32,
    pub tint: f32,
    /// One entry per channel, in first-touched order.
    pub hsl: Vec<HslAdjustment>,
    /// One entry per channel, in first-touched order.
    pub curves: Vec<CurveAdjustment>,
    pub grain: f32,
    pub vignette: Vignette,
    /// Every mask layer, in creation order.
    pub radial_masks: Vec<RadialMaskConfig>,
    /// Every mask layer, in creation order.
    pub gradient_masks: Vec<GradientMaskConfig>,
    pub clarity: f32,
    pub vibrance: f32,
    pub highlights: f32,
    pub shadows: f32,
    pub sharpen: Sharpen,
    pub split_toning: Option<SplitToning>,
}

impl RenderState {
    /// Neutral state for an empty operation list.
    pub fn new(base: Canvas) -> Self {
        Self {
            base,
            rotation: 0.0,
            flip_h: false,
            flip_v: false,
            crop: None,
            tonal: TonalDescriptor::default(),
            temperature: 0.0,
            tint: 0.0,
            hsl: Vec::new(),
            curves: Vec::new(),
            grain: 0.0,
            vignette: Vignette {
                amount: 0.0,
                feather: DEFAULT_VIGNETTE_FEATHER,
            },
            radial_masks: Vec::new(),
            gradient_masks: Vec::new(),
            clarity: 0.0,
            vibrance: 0.0,
            highlights: 0.0,
            shadows: 0.0,
            sharpen: Sharpen {
                amount: 0.0,
                radius: DEFAULT_SHARPEN_RADIUS,
            },
            split_toning: None,
        }
    }

    /// True when the accumulated rotation is an odd multiple of 90 degrees.
    pub fn is_quarter_turn(&self) -> bool {
        (self.rotation % 180.0).abs() == 90.0
    }

    /// Region of the base image that is drawn.
    pub fn source_rect(&self) -> CropRect {
        self.crop.unwrap_or_else(|| CropRect::full(self.base))
    }

    /// Output surface size: the source rect, with width and height swapped on quarter turns.
    pub fn dest_size(&self) -> Canvas {
        let src = self.source_rect().pixel_size();
        if self.is_quarter_turn() {
            src.swapped()
        } else {
            src
        }
    }

    /// Whether phase 2 (pixel-buffer operations) has any work to do.
    pub fn needs_pixel_ops(&self) -> bool {
        self.temperature != 0.0
            || self.tint != 0.0
            || !self.hsl.is_empty()
            || !self.curves.is_empty()
            || !self.radial_masks.is_empty()
            || !self.gradient_masks.is_empty()
            || self.highlights != 0.0
            || self.shadows != 0.0
            || self.vibrance != 0.0
            || self.clarity != 0.0
            || self.sharpen.amount != 0.0
            || self.split_toning.is_some()
    }
}

fn upsert_by<T, K: PartialEq>(list: &mut Vec<T>, entry: T, key: impl Fn(&T) -> K) {
    let k = key(&entry);
    match list.iter_mut().find(|e| key(e) == k) {
        Some(slot) => *slot = entry,
        None => list.push(entry),
    }
}

/// Fold an ordered operation list into a [`RenderState`] for a base image of size `base`.
///
/// Presets referencing an unknown id are ignored and leave the previous preset active.
pub fn compute_render_state(base: Canvas, ops: &[Operation]) -> RenderState {
    let mut st = RenderState::new(base);
    let mut preset: Option<(PresetConfig, f32)> = None;
    let mut brightness_adj = 100.0f32;
    let mut contrast_adj = 100.0f32;

    for op in ops {
        match op {
            Operation::Rotate { angle } => st.rotation = (st.rotation + angle) % 360.0,
            Operation::Flip { direction } => match direction {
                FlipDirection::Horizontal => st.flip_h = !st.flip_h,
                FlipDirection::Vertical => st.flip_v = !st.flip_v,
            },
            Operation::Crop {
                x,
                y,
                width,
                height,
            } => {
                st.crop = Some(CropRect {
                    x: *x,
                    y: *y,
                    width: *width,
                    height: *height,
                })
            }
            Operation::Preset {
                preset_id,
                intensity,
            } => {
                if let Some(p) = find_preset(preset_id) {
                    preset = Some((p.config, *intensity));
                }
            }
            Operation::Brightness { value } => brightness_adj = *value,
            Operation::Contrast { value } => contrast_adj = *value,
            Operation::Temperature { value } => st.temperature = *value,
            Operation::Tint { value } => st.tint = *value,
            Operation::Hsl {
                channel,
                hue,
                sat,
                light,
            } => upsert_by(
                &mut st.hsl,
                HslAdjustment {
                    channel: *channel,
                    hue: *hue,
                    sat: *sat,
                    light: *light,
                },
                |e| e.channel,
            ),
            Operation::Grain { amount } => st.grain = *amount,
            Operation::Vignette { amount, feather } => {
                st.vignette = Vignette {
                    amount: *amount,
                    feather: *feather,
                }
            }
            Operation::Curve { channel, points } => upsert_by(
                &mut st.curves,
                CurveAdjustment {
                    channel: *channel,
                    points: points.clone(),
                },
                |e| e.channel,
            ),
            Operation::RadialMask { config } => st.radial_masks.push(*config),
            Operation::GradientMask { config } => st.gradient_masks.push(*config),
            Operation::Clarity { amount } => st.clarity = *amount,
            Operation::Vibrance { amount } => st.vibrance = *amount,
            Operation::HighlightShadow {
                highlights,
                shadows,
            } => {
                st.highlights = *highlights;
                st.shadows = *shadows;
            }
            Operation::Sharpen { amount, radius } => {
                st.sharpen = Sharpen {
                    amount: *amount,
                    radius: *radius,
                }
            }
            Operation::SplitToning(s) => st.split_toning = Some(*s),
        }
    }

    let interpolated = preset.map(|(cfg, intensity)| cfg.interpolate(intensity));
    st.tonal = TonalDescriptor::from_parts(interpolated, brightness_adj, contrast_adj);
    st
}

#[cfg(test)]
#[path = "../../tests/unit/compile/state.rs"]
mod tests;
