use super::*;

#[test]
fn blur_radius_0_is_identity() {
    let src = vec![1u8, 2, 3, 4, 5, 6, 7, 8];
    let out = blur_alpha8(&src, 4, 2, BlurSpec::new(0, 1.0)).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_constant_image_is_identity() {
    let (w, h) = (4u32, 3u32);
    let src = vec![140u8; (w * h) as usize];
    let out = blur_alpha8(&src, w, h, BlurSpec::new(3, 2.0)).unwrap();
    assert_eq!(out, src);
}

#[test]
fn blur_spreads_energy_from_single_pixel() {
    let (w, h) = (5u32, 5u32);
    let mut src = vec![0u8; (w * h) as usize];
    src[(2 * w + 2) as usize] = 255;

    let out = blur_alpha8(&src, w, h, BlurSpec::new(2, 1.2)).unwrap();

    let nonzero = out.iter().filter(|&&a| a != 0).count();
    assert!(nonzero > 1);

    let sum: u32 = out.iter().map(|&a| u32::from(a)).sum();
    assert!((sum as i32 - 255).abs() <= 4);
}

#[test]
fn blur_rejects_bad_input() {
    assert!(blur_alpha8(&[0u8; 3], 2, 2, BlurSpec::new(1, 1.0)).is_err());
    assert!(blur_alpha8(&[0u8; 4], 2, 2, BlurSpec::new(1, 0.0)).is_err());
}
