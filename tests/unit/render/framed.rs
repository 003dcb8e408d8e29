use super::*;
use crate::foundation::core::Rgba8Premul;
use crate::product::styles::FrameStyle;

fn size(w: u32, h: u32) -> PixelSize {
    PixelSize::new(w, h).unwrap()
}

fn framed(matte: EdgeStyle, frame: FrameStyle) -> FramedSpec {
    FramedSpec {
        matte,
        frame,
        ..FramedSpec::new(16.0, 20.0)
    }
}

fn green_photo() -> Surface {
    Surface::filled(size(160, 200), Rgba8Premul::from_straight_rgba(0, 200, 0, 255))
}

fn close(px: Rgba8Premul, rgb: Rgb8, tol: u8) -> bool {
    px.a == 255 && px.r.abs_diff(rgb.r) <= tol && px.g.abs_diff(rgb.g) <= tol && px.b.abs_diff(rgb.b) <= tol
}

#[test]
fn layout_nests_outside_in() {
    let layout = layout_framed(&FramedSpec::new(16.0, 20.0), FramedContext::Standalone).unwrap();
    assert_eq!(layout.outer, PixelBox::new(BUFFER, BUFFER, BUFFER + 1086, BUFFER + 1280));
    assert_eq!(layout.canvas_px, size(1086 + 2 * BUFFER, 1280 + 2 * BUFFER));
    assert!((layout.dpi - 1086.0 / 22.5).abs() < 1e-9);

    assert_eq!(layout.inner, layout.outer.shrink(36));
    assert_eq!(layout.matte, layout.inner);
    assert_eq!(layout.image, layout.matte.shrink(121));
    assert_eq!(layout.bleed_in, MATTE_BLEED);
}

#[test]
fn no_matte_puts_the_photo_against_the_frame() {
    let layout = layout_framed(&framed(EdgeStyle::NoMatte, FrameStyle::Black), FramedContext::Standalone)
        .unwrap();
    assert_eq!(layout.image, layout.inner);
    assert_eq!(layout.bleed_in, 0.0);
}

#[test]
fn size_range_depends_on_context() {
    let big = FramedSpec::new(60.0, 20.0);
    assert!(layout_framed(&big, FramedContext::Standalone).is_err());
    assert!(layout_framed(
        &big,
        FramedContext::Delegated {
            version: PrintVersion::Plain
        }
    )
    .is_ok());
}

#[test]
fn wraps_are_not_frames() {
    let err = render_framed(&green_photo(), &framed(EdgeStyle::SmallMatte, FrameStyle::Wrap075))
        .unwrap_err();
    assert!(matches!(err, MockupError::Validation(_)));
}

#[test]
fn inner_outline_sits_above_the_photo() {
    let spec = framed(EdgeStyle::NoMatte, FrameStyle::White);
    let layout = layout_framed(&spec, FramedContext::Standalone).unwrap();
    let out = render_framed(&green_photo(), &spec).unwrap();

    let outline = FrameStyle::White.palette().unwrap().outline;
    let mid = (layout.inner.top + layout.inner.bottom) / 2;
    let edge = out.pixel(layout.inner.left, mid).unwrap();
    assert!(close(edge, outline, 3), "{edge:?}");

    let inside = out.pixel(layout.image.left + 20, mid).unwrap();
    assert!(inside.g > inside.r && inside.g > inside.b, "{inside:?}");
}

#[test]
fn matte_color_depends_on_context() {
    let spec = FramedSpec::new(16.0, 20.0);
    let layout = layout_framed(&spec, FramedContext::Standalone).unwrap();
    let out = render_framed(&green_photo(), &spec).unwrap();
    let mid = (layout.matte.top + layout.matte.bottom) / 2;
    assert_eq!(
        out.pixel(layout.matte.left + 5, mid),
        Some(Rgba8Premul::from_straight_rgba(250, 250, 247, 255))
    );

    let delegated = FramedContext::Delegated {
        version: PrintVersion::Plain,
    };
    let spec = framed(EdgeStyle::WhiteBorder, FrameStyle::Black);
    let layout = layout_framed(&spec, delegated).unwrap();
    assert!(layout.image.left > layout.matte.left + 2);
    let out = render_framed_with(&green_photo(), &spec, delegated).unwrap();
    let mid = (layout.matte.top + layout.matte.bottom) / 2;
    assert_eq!(
        out.pixel(layout.matte.left + 2, mid),
        Some(Rgba8Premul::from_straight_rgba(0, 0, 0, 255))
    );
}

#[test]
fn standalone_matte_is_bevelled() {
    let spec = FramedSpec::new(16.0, 20.0);
    let layout = layout_framed(&spec, FramedContext::Standalone).unwrap();
    let out = render_framed(&green_photo(), &spec).unwrap();
    let mid = (layout.image.top + layout.image.bottom) / 2;
    let dark = out.pixel(layout.image.left - 1, mid).unwrap();
    assert!(dark.r < 240, "{dark:?}");
    let light = out.pixel(layout.image.right, mid).unwrap();
    assert!(light.r >= 250, "{light:?}");
}

#[test]
fn frame_corners_are_opaque_and_canvas_corners_clear() {
    let out = render_framed(&green_photo(), &FramedSpec::new(16.0, 20.0)).unwrap();
    assert_eq!(out.pixel(0, 0).unwrap().a, 0);
    assert_eq!(out.pixel(BUFFER + 10, BUFFER + 10).unwrap().a, 255);
}
