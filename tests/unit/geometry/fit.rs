use super::*;

#[test]
fn aspect_fit_maps_longer_side_to_max() {
    assert_eq!(
        aspect_fit(16.0, 20.0, 1000).unwrap(),
        PixelSize::new(800, 1000).unwrap()
    );
    assert_eq!(
        aspect_fit(36.0, 24.0, 1000).unwrap(),
        PixelSize::new(1000, 666).unwrap()
    );
    assert_eq!(
        aspect_fit(12.0, 12.0, 1280).unwrap(),
        PixelSize::new(1280, 1280).unwrap()
    );
}

#[test]
fn aspect_fit_holds_for_every_integer_canvas_size() {
    for max in [1000u32, 1280] {
        for w in 8..=72 {
            for h in 8..=72 {
                let out = aspect_fit(f64::from(w), f64::from(h), max).unwrap();
                assert_eq!(out.max_side(), max, "{w}x{h}");
                assert!(out.width <= max && out.height <= max);

                // Short-over-long ratio stays within one pixel of truncation.
                let (short_in, long_in) = (f64::from(w.min(h)), f64::from(w.max(h)));
                let (short_px, long_px) = (
                    f64::from(out.width.min(out.height)),
                    f64::from(out.width.max(out.height)),
                );
                let err = (short_px / long_px - short_in / long_in).abs();
                assert!(err < 1.0 / f64::from(max), "{w}x{h}: {err}");
            }
        }
    }
}

#[test]
fn aspect_fit_rejects_non_positive_input() {
    assert!(aspect_fit(0.0, 10.0, 1000).is_err());
    assert!(aspect_fit(10.0, f64::NAN, 1000).is_err());
    assert!(aspect_fit(10.0, 10.0, 0).is_err());
}

#[test]
fn center_crop_wide_source_trims_columns() {
    let src = PixelSize::new(400, 200).unwrap();
    let b = center_crop_to_aspect(src, 1.0).unwrap();
    assert_eq!(b, PixelBox::new(100, 0, 300, 200));
}

#[test]
fn center_crop_tall_source_trims_rows() {
    let src = PixelSize::new(200, 400).unwrap();
    let b = center_crop_to_aspect(src, 0.8).unwrap();
    assert_eq!(b.left, 0);
    assert_eq!(b.right, 200);
    assert_eq!(b.height(), 250);
    assert_eq!(b.top, 75);
}

#[test]
fn center_crop_stays_inside_source_for_any_aspects() {
    let sizes = [(1, 1), (1, 977), (977, 1), (640, 480), (4000, 3000), (333, 1999)];
    let aspects = [0.01, 0.1, 0.37, 0.8, 1.0, 1.25, 2.7, 9.0, 100.0];
    for (w, h) in sizes {
        let src = PixelSize::new(w, h).unwrap();
        let bounds = PixelBox::from_size(src);
        for a in aspects {
            let b = center_crop_to_aspect(src, a).unwrap();
            assert!(bounds.contains_box(b), "{w}x{h} @ {a}: {b:?}");
            assert!(!b.is_empty(), "{w}x{h} @ {a}");
        }
    }
}

#[test]
fn print_region_inset_removes_border_on_each_side() {
    let src = PixelSize::new(1900, 2400).unwrap();
    // 16x20 print with a 1.5" border baked in on every side.
    let region = PrintRegion::new(src, 19.0, 23.0).unwrap();
    let inner = region.inset(1.5);
    assert!(region.crop.contains_box(inner));

    let trim = f64::from(region.crop.width() - inner.width());
    let expected = 3.0 * region.px_per_inch_x();
    assert!((trim - expected).abs() <= 2.0, "{trim} vs {expected}");
}

#[test]
fn print_region_spans_share_edges() {
    let src = PixelSize::new(3001, 1000).unwrap();
    let region = PrintRegion::new(src, 30.0, 10.0).unwrap();
    let a = region.span(0.0, 0.0, 10.0, 10.0);
    let b = region.span(10.0, 0.0, 20.0, 10.0);
    assert_eq!(a.right, b.left);
}
