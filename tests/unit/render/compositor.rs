use super::*;
use crate::foundation::core::Canvas;
use crate::model::operation::FlipDirection;

fn gradient_base(w: u32, h: u32) -> Surface {
    let mut data = Vec::new();
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[(x * 20) as u8, (y * 30) as u8, 90, 255]);
        }
    }
    Surface::from_rgba(w, h, data).unwrap()
}

fn fixed() -> RenderOpts {
    RenderOpts::default().with_grain_seed(11)
}

#[test]
fn active_prefix_respects_cursor() {
    let ops = vec![Operation::rotate(90.0); 3];
    assert!(active_prefix(&ops, -1).is_empty());
    assert_eq!(active_prefix(&ops, 1).len(), 2);
    assert_eq!(active_prefix(&ops, 10).len(), 3);
}

#[test]
fn empty_log_renders_base() {
    let base = gradient_base(5, 4);
    let out = render(&base, &[], -1, &fixed()).unwrap();
    assert_eq!(out, base);
    assert_eq!(render_original(&base), base);
}

#[test]
fn rotate_sets_destination_size() {
    let base = gradient_base(100, 50);
    let out = render(&base, &[Operation::rotate(90.0)], 0, &fixed()).unwrap();
    assert_eq!(out.size(), Canvas::new(50, 100));
}

#[test]
fn inactive_suffix_is_ignored() {
    let base = gradient_base(6, 3);
    let ops = [
        Operation::Temperature { value: 40.0 },
        Operation::flip(FlipDirection::Vertical),
    ];
    let a = render(&base, &ops, 0, &fixed()).unwrap();
    let b = render(&base, &ops[..1], 0, &fixed()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn render_is_deterministic_with_fixed_grain() {
    let base = gradient_base(8, 8);
    let ops = [
        Operation::Grain { amount: 60.0 },
        Operation::Vignette {
            amount: 50.0,
            feather: 40.0,
        },
        Operation::Clarity { amount: 30.0 },
    ];
    let a = render(&base, &ops, 2, &fixed()).unwrap();
    let b = render(&base, &ops, 2, &fixed()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn neutral_scalar_effects_leave_output_identical() {
    let base = gradient_base(6, 6);
    let ops = [
        Operation::Temperature { value: 0.0 },
        Operation::Tint { value: 0.0 },
        Operation::Grain { amount: 0.0 },
        Operation::Vignette {
            amount: 0.0,
            feather: 30.0,
        },
        Operation::Sharpen {
            amount: 0.0,
            radius: 3.0,
        },
        Operation::Clarity { amount: 0.0 },
        Operation::Vibrance { amount: 0.0 },
    ];
    let out = render(&base, &ops, 6, &RenderOpts::default()).unwrap();
    assert_eq!(out, base);
}

#[test]
fn temperature_applies_after_geometry() {
    let base = gradient_base(3, 1);
    let ops = [
        Operation::flip(FlipDirection::Horizontal),
        Operation::Temperature { value: 100.0 },
    ];
    let out = render(&base, &ops, 1, &fixed()).unwrap();
    // Flipped row: x = 2, 1, 0 -> red 40, 20, 0, then +30 warm.
    let reds: Vec<u8> = out.data.chunks_exact(4).map(|px| px[0]).collect();
    assert_eq!(reds, vec![70, 50, 30]);
    assert_eq!(out.data[2], 60);
}

#[test]
fn render_into_reuses_surface() {
    let base = gradient_base(4, 2);
    let mut out = Surface::from_rgba(1, 1, vec![1, 2, 3, 4]).unwrap();
    render_into(&mut out, &base, &[Operation::rotate(-90.0)], 0, &fixed()).unwrap();
    assert_eq!(out.size(), Canvas::new(2, 4));
}

#[test]
fn zero_area_crop_renders_empty_surface() {
    let base = gradient_base(4, 4);
    let ops = [Operation::Crop {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 3.0,
    }];
    let out = render(&base, &ops, 0, &fixed()).unwrap();
    assert!(out.is_empty());
    assert!(out.data.is_empty());
}

#[test]
fn transparent_corners_stay_black_after_color_work() {
    let base = gradient_base(20, 20);
    let ops = [
        Operation::rotate(45.0),
        Operation::Temperature { value: 100.0 },
    ];
    let out = render(&base, &ops, 1, &fixed()).unwrap();
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
    let (w, h) = (out.width, out.height);
    assert_eq!(out.pixel(w - 1, h - 1), Some([0, 0, 0, 0]));

    let hist = crate::render::histogram::compute_histogram(&out).unwrap();
    assert!(hist.r[0] > 0.0);
}

#[test]
fn transparent_corners_stay_black_after_tonal_filter() {
    let base = gradient_base(20, 20);
    let ops = [
        Operation::rotate(45.0),
        Operation::Contrast { value: 50.0 },
    ];
    let out = render(&base, &ops, 1, &fixed()).unwrap();
    assert_eq!(out.pixel(0, 0), Some([0, 0, 0, 0]));
}

fn colorful_base(w: u32, h: u32) -> Surface {
    let mut data = Vec::new();
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[
                (40 + x * 25) as u8,
                (200 - y * 20) as u8,
                (60 + (x + y) * 9) as u8,
                255,
            ]);
        }
    }
    Surface::from_rgba(w, h, data).unwrap()
}

#[test]
fn curves_run_before_vibrance() {
    use crate::color::curve::{CurveChannel, CurvePoint, apply_curve_lut, build_curve_lut};
    use crate::effects::color::apply_vibrance;

    let base = colorful_base(8, 6);
    let points = vec![
        CurvePoint::new(0.0, 0.0),
        CurvePoint::new(128.0, 200.0),
        CurvePoint::new(255.0, 255.0),
    ];
    let lut = build_curve_lut(&points);
    // Log order is vibrance first; the render order must not follow it.
    let ops = [
        Operation::Vibrance { amount: 80.0 },
        Operation::Curve {
            channel: CurveChannel::Master,
            points,
        },
    ];
    let out = render(&base, &ops, 1, &fixed()).unwrap();

    let mut curve_first = base.data.clone();
    apply_curve_lut(&mut curve_first, CurveChannel::Master, &lut);
    apply_vibrance(&mut curve_first, 80.0);
    let mut vibrance_first = base.data.clone();
    apply_vibrance(&mut vibrance_first, 80.0);
    apply_curve_lut(&mut vibrance_first, CurveChannel::Master, &lut);

    assert_ne!(curve_first, vibrance_first);
    assert_eq!(out.data, curve_first);
}

#[test]
fn masks_run_after_split_toning() {
    use crate::effects::color::{SplitToning, apply_split_toning};
    use crate::effects::mask::{RadialMaskConfig, apply_radial_mask};

    let base = colorful_base(8, 6);
    let mask = RadialMaskConfig {
        cx: 0.5,
        cy: 0.5,
        rx: 0.6,
        ry: 0.6,
        feather: 50.0,
        exposure: 60.0,
    };
    let split = SplitToning {
        highlight_hue: 30.0,
        highlight_sat: 60.0,
        shadow_hue: 220.0,
        shadow_sat: 60.0,
        balance: 0.0,
    };
    let ops = [
        Operation::RadialMask { config: mask },
        Operation::SplitToning(split),
    ];
    let out = render(&base, &ops, 1, &fixed()).unwrap();

    let size = base.size();
    let mut toned_first = base.data.clone();
    apply_split_toning(&mut toned_first, &split);
    apply_radial_mask(&mut toned_first, size, &mask).unwrap();
    let mut masked_first = base.data.clone();
    apply_radial_mask(&mut masked_first, size, &mask).unwrap();
    apply_split_toning(&mut masked_first, &split);

    assert_ne!(toned_first, masked_first);
    assert_eq!(out.data, toned_first);
}
