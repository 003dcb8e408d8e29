use super::*;
use crate::foundation::core::Rgba8Premul;
use crate::foundation::error::MockupError;
use crate::product::styles::FrameStyle;

fn size(w: u32, h: u32) -> PixelSize {
    PixelSize::new(w, h).unwrap()
}

fn assert_tiles(plan: &TriptychPlan) {
    let [a, b, c] = plan.panels;
    assert_eq!(a.left, plan.aggregate.left);
    assert_eq!(a.right, b.left);
    assert_eq!(b.right, c.left);
    assert_eq!(c.right, plan.aggregate.right);
    for p in plan.panels {
        assert_eq!((p.top, p.bottom), (plan.aggregate.top, plan.aggregate.bottom));
        assert!(plan.crop.contains_box(p));
    }
}

#[test]
fn panels_tile_the_aggregate_crop() {
    let plan = plan_triptych(size(4800, 2000), &PanelSpec::new(16.0, 20.0)).unwrap();
    assert_eq!(plan.panel_px, size(800, 1000));
    assert_eq!(plan.canvas_px, size(2600, 1100));
    assert_tiles(&plan);

    for (w, h, source) in [(9.0, 31.0, size(1237, 811)), (72.0, 8.0, size(333, 999))] {
        let spec = PanelSpec::new(w, h);
        assert_tiles(&plan_triptych(source, &spec).unwrap());
        let bleed = PanelSpec {
            edge: EdgeStyle::PhotoBleed,
            frame: FrameStyle::Wrap250,
            ..spec
        };
        let plan = plan_triptych(source, &bleed).unwrap();
        assert_tiles(&plan);
        assert!(plan.aggregate.left > plan.crop.left);
    }
}

#[test]
fn panel_rects_and_shadow_spans_do_not_overlap() {
    let plan = plan_triptych(size(4800, 2000), &PanelSpec::new(16.0, 20.0)).unwrap();
    assert_eq!(plan.panel_rect(0).left, 50);
    assert_eq!(plan.panel_rect(1).left, 900);
    assert_eq!(plan.panel_rect(2).left, 1750);
    assert_eq!(plan.panel_rect(2).right + BUFFER, plan.canvas_px.width);
    for i in 0..PANELS - 1 {
        assert!(plan.shadow_span(i).right <= plan.shadow_span(i + 1).left);
    }
}

#[test]
fn range_is_checked() {
    let err = plan_triptych(size(400, 400), &PanelSpec::new(16.0, 73.0)).unwrap_err();
    assert!(matches!(err, MockupError::Validation(_)));
}

#[test]
fn render_keeps_panels_and_shadows_apart() {
    let colors = [
        Rgba8Premul::from_straight_rgba(255, 0, 0, 255),
        Rgba8Premul::from_straight_rgba(0, 255, 0, 255),
        Rgba8Premul::from_straight_rgba(0, 0, 255, 255),
    ];
    let mut source = Surface::new(size(300, 125));
    for (i, c) in colors.iter().enumerate() {
        source.fill_box(PixelBox::new(i as u32 * 100, 0, (i as u32 + 1) * 100, 125), *c);
    }

    let out = render_triptych(&source, &PanelSpec::new(16.0, 20.0)).unwrap();
    assert_eq!(out.size(), size(2600, 1100));
    for (i, c) in colors.iter().enumerate() {
        let centre = 450 + i as u32 * 850;
        assert_eq!(out.pixel(centre, 550), Some(*c));
    }

    let white = Rgba8Premul::from_straight_rgba(255, 255, 255, 255);
    assert_eq!(out.pixel(0, 0), Some(white));
    assert_eq!(out.pixel(2599, 1099), Some(white));

    // Panel 0's shadow darkens the gap next to it and fades out before its span ends.
    let near = out.pixel(860, 600).unwrap();
    assert_eq!(near.a, 255);
    assert!(near.r < 250, "{near:?}");
    for x in 872..890 {
        assert_eq!(out.pixel(x, 600), Some(white), "x = {x}");
    }
}

#[test]
fn shadows_fade_out_inside_their_spans() {
    let plan = plan_triptych(size(4800, 2000), &PanelSpec::new(16.0, 20.0)).unwrap();
    let source = Surface::filled(size(4800, 2000), Rgba8Premul::from_straight_rgba(9, 9, 9, 255));
    let out = render_triptych(&source, &PanelSpec::new(16.0, 20.0)).unwrap();

    let white = Rgba8Premul::from_straight_rgba(255, 255, 255, 255);
    let y = plan.panel_rect(0).top + 400;
    for i in 0..PANELS {
        let span = plan.shadow_span(i);
        // No hard cut: the pixels on both span edges are untouched background.
        assert_eq!(out.pixel(span.left, y), Some(white), "panel {i}");
        assert_eq!(out.pixel(span.right - 1, y), Some(white), "panel {i}");
    }
}

#[test]
fn baked_border_version_renders_like_plain() {
    let source = Surface::filled(size(600, 250), Rgba8Premul::from_straight_rgba(200, 10, 10, 255));
    let plain = PanelSpec::new(16.0, 20.0);
    let baked = PanelSpec {
        version: crate::product::styles::PrintVersion::BakedBorder,
        ..plain
    };
    assert_eq!(
        render_triptych(&source, &plain).unwrap(),
        render_triptych(&source, &baked).unwrap()
    );
}
