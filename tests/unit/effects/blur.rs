use super::*;

#[test]
fn box_blur_constant_image_is_identity() {
    let size = Canvas::new(4, 3);
    let px = [10u8, 20u8, 30u8, 40u8];
    let src = px.repeat(12);
    let out = box_blur_rgb(&src, size, 3.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn box_blur_keeps_alpha_from_source() {
    let size = Canvas::new(3, 1);
    let src = vec![0u8, 0, 0, 10, 255, 255, 255, 20, 0, 0, 0, 30];
    let out = box_blur_rgb(&src, size, 1.0).unwrap();
    assert_eq!(out[3], 10);
    assert_eq!(out[7], 20);
    assert_eq!(out[11], 30);
    // Centre pixel averages one white and two black neighbours on both axes.
    assert_eq!(out[4], 85);
}

#[test]
fn box_blur_radius_below_one_is_floored_to_one() {
    let size = Canvas::new(3, 1);
    let src = vec![0u8, 0, 0, 255, 255, 255, 255, 255, 0, 0, 0, 255];
    let a = box_blur_rgb(&src, size, 0.0).unwrap();
    let b = box_blur_rgb(&src, size, 1.0).unwrap();
    assert_eq!(a, b);
}

#[test]
fn box_blur_rejects_mismatched_buffer() {
    assert!(box_blur_rgb(&[0u8; 7], Canvas::new(1, 2), 1.0).is_err());
}

#[test]
fn gaussian_blur_zero_sigma_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = gaussian_blur_rgba8(&src, Canvas::new(1, 2), 0.0).unwrap();
    assert_eq!(out, src);
}

#[test]
fn gaussian_blur_constant_opaque_image_is_identity() {
    let size = Canvas::new(5, 4);
    let src = [90u8, 120, 200, 255].repeat(20);
    let out = gaussian_blur_rgba8(&src, size, 1.5).unwrap();
    assert_eq!(out, src);
}

#[test]
fn gaussian_blur_spreads_energy_from_single_pixel() {
    let size = Canvas::new(5, 5);
    let mut src = [0u8, 0, 0, 255].repeat(25);
    let center = (2 * 5 + 2) * 4;
    src[center..center + 3].copy_from_slice(&[255, 255, 255]);
    let out = gaussian_blur_rgba8(&src, size, 1.0).unwrap();
    let lit = out.chunks_exact(4).filter(|px| px[0] != 0).count();
    assert!(lit > 1);
    assert!(out[center] < 255);
}

#[test]
fn gaussian_kernel_sums_to_one_and_is_symmetric() {
    let k = gaussian_kernel(1.3).unwrap();
    assert_eq!(k.taps.len(), 2 * 4 + 1);
    assert_eq!(k.taps.iter().map(|&t| u64::from(t)).sum::<u64>(), 1 << 16);
    let n = k.taps.len();
    for i in 0..n / 2 {
        assert_eq!(k.taps[i], k.taps[n - 1 - i]);
    }
}

#[test]
fn gaussian_blur_keeps_alpha_weighted_color() {
    // A transparent neighbour must not darken the opaque pixel's color.
    let size = Canvas::new(2, 1);
    let src = vec![200u8, 100, 50, 255, 0, 0, 0, 0];
    let out = gaussian_blur_rgba8(&src, size, 1.0).unwrap();
    assert!(out[3] < 255 && out[3] > 0);
    assert!(out[0].abs_diff(200) <= 2);
    assert!(out[1].abs_diff(100) <= 2);
}
