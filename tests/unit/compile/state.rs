use super::*;

const BASE: Canvas = Canvas {
    width: 100,
    height: 50,
};

fn hsl(channel: HslChannel, hue: f32) -> Operation {
    Operation::Hsl {
        channel,
        hue,
        sat: 0.0,
        light: 0.0,
    }
}

#[test]
fn empty_log_is_identity_state() {
    let st = compute_render_state(BASE, &[]);
    assert_eq!(st, RenderState::new(BASE));
    assert!(!st.needs_pixel_ops());
    assert!(st.tonal.is_identity());
    assert_eq!(st.tonal.to_filter_string(), "brightness(100%) contrast(100%)");
    assert_eq!(st.vignette.feather, 50.0);
    assert_eq!(st.sharpen.radius, 2.0);
}

#[test]
fn quarter_turn_swaps_destination() {
    let st = compute_render_state(BASE, &[Operation::rotate(90.0)]);
    assert!(st.is_quarter_turn());
    assert_eq!(st.dest_size(), Canvas::new(50, 100));

    let st = compute_render_state(BASE, &[Operation::rotate(-90.0)]);
    assert_eq!(st.rotation, -90.0);
    assert_eq!(st.dest_size(), Canvas::new(50, 100));
}

#[test]
fn four_quarter_turns_return_to_zero() {
    let ops = vec![Operation::rotate(90.0); 4];
    let st = compute_render_state(BASE, &ops);
    assert_eq!(st.rotation % 360.0, 0.0);
    assert_eq!(st.dest_size(), BASE);
}

#[test]
fn repeated_flips_cancel() {
    let h = Operation::flip(FlipDirection::Horizontal);
    let v = Operation::flip(FlipDirection::Vertical);
    let st = compute_render_state(BASE, &[h.clone(), v.clone(), h]);
    assert!(!st.flip_h);
    assert!(st.flip_v);
    let st = compute_render_state(BASE, &[v.clone(), v]);
    assert!(!st.flip_v);
}

#[test]
fn last_crop_replaces_previous() {
    let ops = [
        Operation::Crop {
            x: 10.0,
            y: 10.0,
            width: 50.0,
            height: 40.0,
        },
        Operation::Crop {
            x: 0.0,
            y: 5.0,
            width: 120.0,
            height: 30.0,
        },
    ];
    let st = compute_render_state(BASE, &ops);
    assert_eq!(st.source_rect().x, 0.0);
    assert_eq!(st.dest_size(), Canvas::new(120, 30));
}

#[test]
fn hsl_and_curves_upsert_per_channel_keeping_first_position() {
    let ops = [
        hsl(HslChannel::Red, 10.0),
        hsl(HslChannel::Blue, 20.0),
        hsl(HslChannel::Red, 30.0),
    ];
    let st = compute_render_state(BASE, &ops);
    assert_eq!(st.hsl.len(), 2);
    assert_eq!(st.hsl[0].channel, HslChannel::Red);
    assert_eq!(st.hsl[0].hue, 30.0);
    assert_eq!(st.hsl[1].channel, HslChannel::Blue);

    let curve = |channel, y| Operation::Curve {
        channel,
        points: vec![CurvePoint::new(128.0, y)],
    };
    let st = compute_render_state(BASE, &[
        curve(CurveChannel::G, 100.0),
        curve(CurveChannel::Master, 140.0),
        curve(CurveChannel::G, 90.0),
    ]);
    assert_eq!(st.curves.len(), 2);
    assert_eq!(st.curves[0].points[0].y, 90.0);
}

#[test]
fn masks_append_as_independent_layers() {
    let m = RadialMaskConfig {
        cx: 0.5,
        cy: 0.5,
        rx: 0.2,
        ry: 0.2,
        feather: 10.0,
        exposure: 10.0,
    };
    let ops = [
        Operation::RadialMask { config: m },
        Operation::RadialMask { config: m },
    ];
    let st = compute_render_state(BASE, &ops);
    assert_eq!(st.radial_masks.len(), 2);
    assert!(st.needs_pixel_ops());
}

#[test]
fn scalar_effects_last_write_wins() {
    let st = compute_render_state(BASE, &[
        Operation::Grain { amount: 10.0 },
        Operation::Vignette {
            amount: 20.0,
            feather: 70.0,
        },
        Operation::Grain { amount: 0.0 },
        Operation::Sharpen {
            amount: 40.0,
            radius: 4.0,
        },
    ]);
    assert_eq!(st.grain, 0.0);
    assert_eq!(st.vignette.feather, 70.0);
    assert_eq!(st.sharpen.radius, 4.0);
}

#[test]
fn preset_combines_with_brightness_override() {
    let st = compute_render_state(BASE, &[
        Operation::preset("cinematic-cold", 100.0),
        Operation::Brightness { value: 200.0 },
    ]);
    assert_eq!(st.tonal.brightness, 190.0);
    assert_eq!(st.tonal.contrast, 115.0);
    assert_eq!(
        st.tonal.to_filter_string(),
        "brightness(190%) contrast(115%) sepia(5%) saturate(85%) hue-rotate(200deg)"
    );
}

#[test]
fn preset_intensity_interpolates_towards_identity() {
    let st = compute_render_state(BASE, &[Operation::preset("portrait-bw", 50.0)]);
    assert_eq!(st.tonal.saturation, 50.0);
    assert_eq!(
        st.tonal.to_filter_string(),
        "brightness(102.5%) contrast(105%) sepia(0%) saturate(50%)"
    );
}

#[test]
fn unknown_preset_keeps_previous() {
    let st = compute_render_state(BASE, &[
        Operation::preset("dark-noir", 100.0),
        Operation::preset("does-not-exist", 100.0),
    ]);
    assert_eq!(st.tonal.saturation, 20.0);
}

#[test]
fn neutral_split_toning_still_enters_pixel_phase() {
    let st = compute_render_state(BASE, &[Operation::SplitToning(SplitToning {
        highlight_hue: 0.0,
        highlight_sat: 0.0,
        shadow_hue: 0.0,
        shadow_sat: 0.0,
        balance: 0.0,
    })]);
    assert!(st.needs_pixel_ops());
}
