use super::*;

fn size(w: u32, h: u32) -> PixelSize {
    PixelSize::new(w, h).unwrap()
}

fn gradient(w: u32, h: u32) -> Surface {
    let img = RgbaImage::from_fn(w, h, |x, y| Rgba([x as u8, y as u8, 7, 255]));
    Surface::from_rgba_image(&img).unwrap()
}

#[test]
fn host_image_roundtrip_keeps_opaque_pixels() {
    let img = RgbaImage::from_fn(3, 2, |x, y| Rgba([x as u8 * 40, y as u8 * 90, 200, 255]));
    let s = Surface::from_rgba_image(&img).unwrap();
    assert_eq!(s.to_rgba_image().unwrap(), img);
}

#[test]
fn from_rgba_image_premultiplies() {
    let img = RgbaImage::from_raw(1, 1, vec![100, 50, 200, 128]).unwrap();
    let s = Surface::from_rgba_image(&img).unwrap();
    assert_eq!(
        s.data(),
        &[
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128u8
        ]
    );
}

#[test]
fn crop_copies_the_requested_window() {
    let s = gradient(10, 8);
    let c = s.crop(PixelBox::new(2, 3, 6, 5)).unwrap();
    assert_eq!(c.size(), size(4, 2));
    assert_eq!(c.px(0, 0), [2, 3, 7, 255]);
    assert_eq!(c.px(3, 1), [5, 4, 7, 255]);
}

#[test]
fn crop_rejects_out_of_bounds_and_empty_boxes() {
    let s = gradient(10, 8);
    assert!(s.crop(PixelBox::new(2, 3, 11, 5)).is_err());
    assert!(s.crop(PixelBox::new(2, 3, 2, 5)).is_err());
}

#[test]
fn resize_of_constant_surface_stays_constant() {
    let color = Rgba8Premul::from_straight_rgba(30, 60, 90, 255);
    let s = Surface::filled(size(7, 5), color);
    let r = s.resize(size(20, 13)).unwrap();
    assert_eq!(r.size(), size(20, 13));
    assert!(r.data().chunks_exact(4).all(|px| px == [30, 60, 90, 255]));
}

#[test]
fn draw_clips_negative_offsets() {
    let mut dst = Surface::new(size(4, 4));
    let red = Surface::filled(size(3, 3), Rgba8Premul::from_straight_rgba(255, 0, 0, 255));
    dst.draw(&red, -2, -2);
    assert_eq!(dst.px(0, 0), [255, 0, 0, 255]);
    assert_eq!(dst.px(1, 0), [0, 0, 0, 0]);
    assert_eq!(dst.px(0, 1), [0, 0, 0, 0]);
}

#[test]
fn draw_clipped_respects_clip_box() {
    let mut dst = Surface::new(size(6, 6));
    let blue = Surface::filled(size(6, 6), Rgba8Premul::from_straight_rgba(0, 0, 255, 255));
    dst.draw_clipped(&blue, 0, 0, PixelBox::new(1, 1, 3, 3));
    assert_eq!(dst.px(1, 1), [0, 0, 255, 255]);
    assert_eq!(dst.px(2, 2), [0, 0, 255, 255]);
    assert_eq!(dst.px(3, 3), [0, 0, 0, 0]);
    assert_eq!(dst.px(0, 0), [0, 0, 0, 0]);
}

#[test]
fn draw_layer_requires_matching_size() {
    let mut dst = Surface::new(size(2, 2));
    assert!(dst.draw_layer(&Surface::new(size(3, 2))).is_err());
    let layer = Surface::filled(size(2, 2), Rgba8Premul::from_straight_rgba(9, 9, 9, 255));
    dst.draw_layer(&layer).unwrap();
    assert_eq!(dst, layer);
}

#[test]
fn fill_box_blends_translucent_color() {
    let mut s = Surface::filled(size(3, 3), Rgba8Premul::from_straight_rgba(255, 255, 255, 255));
    s.fill_box(PixelBox::new(1, 1, 2, 2), Rgba8Premul::from_straight_rgba(0, 0, 0, 128));
    assert_eq!(s.px(1, 1), [127, 127, 127, 255]);
    assert_eq!(s.px(0, 0), [255, 255, 255, 255]);
    assert_eq!(s.pixel(3, 0), None);
}
