use super::*;

fn identity_points() -> Vec<CurvePoint> {
    vec![CurvePoint::new(0.0, 0.0), CurvePoint::new(255.0, 255.0)]
}

#[test]
fn endpoints_only_is_identity() {
    let lut = build_curve_lut(&identity_points());
    for (x, &y) in lut.iter().enumerate() {
        assert_eq!(usize::from(y), x);
    }
}

#[test]
fn identity_master_curve_leaves_buffer_unchanged() {
    let lut = build_curve_lut(&identity_points());
    let src: Vec<u8> = (0..=255u8).flat_map(|v| [v, 255 - v, v / 2, 77]).collect();
    let mut data = src.clone();
    apply_curve_lut(&mut data, CurveChannel::Master, &lut);
    assert_eq!(data, src);
}

#[test]
fn missing_endpoints_are_synthesized() {
    let lut = build_curve_lut(&[CurvePoint::new(128.0, 64.0)]);
    assert_eq!(lut[0], 0);
    assert_eq!(lut[128], 64);
    assert_eq!(lut[255], 255);
    assert_eq!(lut[64], 32);
}

#[test]
fn existing_boundary_points_are_kept() {
    let lut = build_curve_lut(&[CurvePoint::new(0.0, 40.0), CurvePoint::new(255.0, 200.0)]);
    assert_eq!(lut[0], 40);
    assert_eq!(lut[255], 200);
}

#[test]
fn unsorted_points_are_sorted_before_interpolation() {
    let a = build_curve_lut(&[
        CurvePoint::new(200.0, 180.0),
        CurvePoint::new(50.0, 80.0),
    ]);
    let b = build_curve_lut(&[
        CurvePoint::new(50.0, 80.0),
        CurvePoint::new(200.0, 180.0),
    ]);
    assert_eq!(a, b);
    assert_eq!(a[50], 80);
}

#[test]
fn inverted_curve_is_not_monotonic_in_y() {
    let lut = build_curve_lut(&[CurvePoint::new(0.0, 255.0), CurvePoint::new(255.0, 0.0)]);
    assert_eq!(lut[0], 255);
    assert_eq!(lut[255], 0);
    assert!(lut[10] > lut[200]);
}

#[test]
fn empty_point_list_is_identity() {
    let lut = build_curve_lut(&[]);
    assert_eq!(lut[17], 17);
}

#[test]
fn single_channel_curve_only_touches_that_channel() {
    let lut = build_curve_lut(&[CurvePoint::new(0.0, 255.0), CurvePoint::new(255.0, 255.0)]);
    let mut data = vec![10u8, 20, 30, 40];
    apply_curve_lut(&mut data, CurveChannel::G, &lut);
    assert_eq!(data, vec![10, 255, 30, 40]);
}
