use super::*;

fn grey(size: Canvas, v: u8) -> Vec<u8> {
    [v, v, v, 255].repeat((size.width * size.height) as usize)
}

fn at(data: &[u8], size: Canvas, x: u32, y: u32) -> u8 {
    data[((y * size.width + x) * 4) as usize]
}

fn radial(exposure: f32, feather: f32) -> RadialMaskConfig {
    RadialMaskConfig {
        cx: 0.5,
        cy: 0.5,
        rx: 0.25,
        ry: 0.25,
        feather,
        exposure,
    }
}

#[test]
fn radial_zero_exposure_is_identity() {
    let size = Canvas::new(16, 16);
    let src = grey(size, 100);
    for feather in [0.0, 50.0, 100.0] {
        let mut d = src.clone();
        apply_radial_mask(&mut d, size, &radial(0.0, feather)).unwrap();
        assert_eq!(d, src);
    }
}

#[test]
fn radial_brightens_centre_only() {
    let size = Canvas::new(16, 16);
    let mut d = grey(size, 100);
    apply_radial_mask(&mut d, size, &radial(50.0, 0.0)).unwrap();
    // Centre gets the full 0.5 * 80 boost.
    assert_eq!(at(&d, size, 8, 8), 140);
    assert_eq!(at(&d, size, 0, 0), 100);
    assert_eq!(at(&d, size, 15, 8), 100);
}

#[test]
fn radial_feather_fades_towards_rim() {
    let size = Canvas::new(32, 1);
    let mut d = grey(size, 100);
    let m = RadialMaskConfig {
        cx: 0.0,
        cy: 0.0,
        rx: 1.0,
        ry: 1.0,
        feather: 100.0,
        exposure: 100.0,
    };
    apply_radial_mask(&mut d, size, &m).unwrap();
    let row: Vec<u8> = (0..32).map(|x| at(&d, size, x, 0)).collect();
    assert_eq!(row[0], 180);
    assert!(row.windows(2).all(|w| w[0] >= w[1]));
    assert!(row[31] < row[16]);
}

#[test]
fn radial_degenerate_radius_is_ignored() {
    let size = Canvas::new(4, 4);
    let src = grey(size, 50);
    let mut d = src.clone();
    let mut m = radial(100.0, 10.0);
    m.rx = 0.0;
    apply_radial_mask(&mut d, size, &m).unwrap();
    assert_eq!(d, src);
}

#[test]
fn gradient_splits_at_midpoint() {
    let size = Canvas::new(10, 2);
    let mut d = grey(size, 100);
    let m = GradientMaskConfig {
        x1: 0.0,
        y1: 0.0,
        x2: 1.0,
        y2: 0.0,
        feather: 0.0,
        exposure: -50.0,
    };
    apply_gradient_mask(&mut d, size, &m).unwrap();
    assert_eq!(at(&d, size, 0, 0), 60);
    assert_eq!(at(&d, size, 4, 1), 60);
    assert_eq!(at(&d, size, 6, 0), 100);
    assert_eq!(at(&d, size, 9, 1), 100);
}

#[test]
fn gradient_zero_length_applies_uniformly() {
    let size = Canvas::new(3, 3);
    let mut d = grey(size, 100);
    let m = GradientMaskConfig {
        x1: 0.5,
        y1: 0.5,
        x2: 0.5,
        y2: 0.5,
        feather: 30.0,
        exposure: 100.0,
    };
    apply_gradient_mask(&mut d, size, &m).unwrap();
    assert!(d.chunks_exact(4).all(|px| px == [180, 180, 180, 255]));
}

#[test]
fn masks_reject_wrong_buffer_length() {
    let size = Canvas::new(2, 2);
    let mut d = vec![0u8; 12];
    assert!(apply_radial_mask(&mut d, size, &radial(10.0, 10.0)).is_err());
}
