use crate::foundation::core::{PixelBox, PixelSize, Rgb8};
use crate::foundation::error::MockupResult;
use crate::geometry::fit::{PrintRegion, aspect_fit};
use crate::product::descriptor::{CANVAS_SIZE_RANGE, PanelSpec};
use crate::product::styles::EdgeStyle;
use crate::raster::blur::BlurSpec;
use crate::raster::mask::AlphaMask;
use crate::raster::surface::Surface;
use crate::render::single::{BUFFER, MAX_DIMENSION, SHADOW_ALPHA};

/// Number of panels in a triptych.
pub const PANELS: u32 = 3;

// Offset plus blur radius stays inside half the gap, so no shadow is cut at its span.
const SHADOW_OFFSET: u32 = 6;
const SHADOW_BLUR: BlurSpec = BlurSpec::new(16, 8.0);

/// Source and canvas geometry of a three-panel canvas.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriptychPlan {
    /// Size of each rendered panel.
    pub panel_px: PixelSize,
    /// Output canvas size.
    pub canvas_px: PixelSize,
    /// Source crop for the whole piece, wrap included.
    pub crop: PixelBox,
    /// Source box of the three panel faces together.
    pub aggregate: PixelBox,
    /// Source box of each panel face, left to right; they tile `aggregate` exactly.
    pub panels: [PixelBox; 3],
}

impl TriptychPlan {
    /// Where panel `index` is pasted on the canvas.
    pub fn panel_rect(&self, index: u32) -> PixelBox {
        let x = BUFFER + index * (self.panel_px.width + BUFFER);
        PixelBox::from_origin(x, BUFFER, self.panel_px)
    }

    /// Horizontal band a panel's shadow is confined to: the panel plus half the gap on each side.
    pub fn shadow_span(&self, index: u32) -> PixelBox {
        let r = self.panel_rect(index);
        PixelBox::new(
            r.left - BUFFER / 2,
            0,
            r.right + BUFFER / 2,
            self.canvas_px.height,
        )
    }
}

/// Split the source into three equal panels of `spec.size` each.
pub fn plan_triptych(source: PixelSize, spec: &PanelSpec) -> MockupResult<TriptychPlan> {
    spec.size.validate(&CANVAS_SIZE_RANGE, "triptych")?;
    let (w, h) = (spec.size.width, spec.size.height);

    let panel_px = aspect_fit(w, h, MAX_DIMENSION)?;
    let canvas_px = PixelSize::new(
        PANELS * panel_px.width + (PANELS + 1) * BUFFER,
        panel_px.height + 2 * BUFFER,
    )?;

    let edge = if spec.edge == EdgeStyle::PhotoBleed {
        spec.frame.depth()
    } else {
        0.0
    };
    let region = PrintRegion::new(
        source,
        f64::from(PANELS) * w + 2.0 * edge,
        h + 2.0 * edge,
    )?;

    // Shared panel boundaries, so neighbours meet on the same pixel column.
    let xs: [f64; 4] = std::array::from_fn(|i| edge + (i as f64) * w);
    let panels: [PixelBox; 3] =
        std::array::from_fn(|i| region.span(xs[i], edge, xs[i + 1], edge + h));
    for p in &panels {
        p.size()?;
    }

    Ok(TriptychPlan {
        panel_px,
        canvas_px,
        crop: region.crop,
        aggregate: region.span(xs[0], edge, xs[3], edge + h),
        panels,
    })
}

/// Render a three-panel canvas on white, each panel over its own soft shadow.
///
/// `spec.version` is ignored; a triptych photo never carries a baked border.
#[tracing::instrument(skip(source), fields(source_w = source.width(), source_h = source.height()))]
pub fn render_triptych(source: &Surface, spec: &PanelSpec) -> MockupResult<Surface> {
    let plan = plan_triptych(source.size(), spec)?;
    tracing::debug!(
        panel = ?plan.panel_px,
        crop = ?plan.crop,
        panels = ?plan.panels,
        "triptych plan"
    );

    let mut canvas = Surface::filled(plan.canvas_px, Rgb8::WHITE.with_alpha(255));
    for (index, panel_box) in (0..PANELS).zip(plan.panels) {
        let rect = plan.panel_rect(index);
        let span = plan.shadow_span(index);

        let mut shadow = AlphaMask::new(plan.canvas_px);
        shadow.fill_box(
            PixelBox::new(
                rect.left + SHADOW_OFFSET,
                rect.top + SHADOW_OFFSET,
                rect.right + SHADOW_OFFSET,
                rect.bottom + SHADOW_OFFSET,
            ),
            SHADOW_ALPHA,
        );
        shadow.clear_outside(span);
        shadow.blur(SHADOW_BLUR)?;
        shadow.paint_onto(&mut canvas, Rgb8::BLACK, span)?;

        let panel = source.crop(panel_box)?.resize(plan.panel_px)?;
        canvas.draw(&panel, i64::from(rect.left), i64::from(rect.top));
    }
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/triptych.rs"]
mod tests;
