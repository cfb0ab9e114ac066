use super::*;

#[test]
fn primaries_convert_to_expected_hues() {
    let (h, s, l) = rgb_to_hsl(255, 0, 0);
    assert_eq!((h, s, l), (0.0, 1.0, 0.5));
    let (h, _, _) = rgb_to_hsl(0, 255, 0);
    assert!((h - 120.0).abs() < 1e-4);
    let (h, _, _) = rgb_to_hsl(0, 0, 255);
    assert!((h - 240.0).abs() < 1e-4);
}

#[test]
fn grey_has_zero_saturation() {
    let (h, s, l) = rgb_to_hsl(128, 128, 128);
    assert_eq!(h, 0.0);
    assert_eq!(s, 0.0);
    assert!((l - 128.0 / 255.0).abs() < 1e-6);
    assert_eq!(hsl_to_rgb(0.0, 0.0, l), [128, 128, 128]);
}

#[test]
fn hsl_roundtrip_is_close_for_sampled_colors() {
    for &(r, g, b) in &[
        (200u8, 30u8, 90u8),
        (12, 250, 130),
        (90, 91, 250),
        (255, 200, 0),
        (3, 2, 1),
    ] {
        let (h, s, l) = rgb_to_hsl(r, g, b);
        let [r2, g2, b2] = hsl_to_rgb(h, s, l);
        assert!((i16::from(r) - i16::from(r2)).abs() <= 1);
        assert!((i16::from(g) - i16::from(g2)).abs() <= 1);
        assert!((i16::from(b) - i16::from(b2)).abs() <= 1);
    }
}

#[test]
fn channel_weight_is_zero_at_band_edges_and_one_at_midpoint() {
    for ch in HslChannel::ALL {
        let (lo, hi) = ch.range();
        assert_eq!(ch.weight(lo), 0.0, "{ch:?} lo");
        assert_eq!(ch.weight(hi), 0.0, "{ch:?} hi");
    }
    assert_eq!(HslChannel::Red.weight(0.0), 1.0);
    assert_eq!(HslChannel::Orange.weight(30.0), 1.0);
    assert_eq!(HslChannel::Green.weight(120.0), 1.0);
    assert_eq!(HslChannel::Purple.weight(300.0), 1.0);
}

#[test]
fn channel_bands_cover_the_hue_circle() {
    let edges = [15.0f32, 45.0, 75.0, 165.0, 255.0, 345.0];
    let mut hue = 0.0f32;
    while hue < 360.0 {
        if !edges.contains(&hue) {
            let covered = HslChannel::ALL.iter().any(|ch| ch.weight(hue) > 0.0);
            assert!(covered, "hue {hue} has no channel");
        }
        hue += 0.5;
    }
}

#[test]
fn wrapped_red_band_contains_both_sides_of_zero() {
    assert!(HslChannel::Red.contains(350.0));
    assert!(HslChannel::Red.contains(10.0));
    assert!(!HslChannel::Red.contains(20.0));
    assert!(HslChannel::Red.weight(350.0) > 0.0);
    assert!(HslChannel::Red.weight(10.0) > 0.0);
    assert_eq!(HslChannel::Red.weight(90.0), 0.0);
}

#[test]
fn channel_serde_uses_lowercase_names() {
    let s = serde_json::to_string(&HslChannel::Purple).unwrap();
    assert_eq!(s, "\"purple\"");
    let c: HslChannel = serde_json::from_str("\"orange\"").unwrap();
    assert_eq!(c, HslChannel::Orange);
}
