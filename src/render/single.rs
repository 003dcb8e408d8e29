use crate::foundation::core::{PixelBox, PixelSize, Rgb8};
use crate::foundation::error::MockupResult;
use crate::geometry::fit::{PrintRegion, aspect_fit};
use crate::product::descriptor::{CANVAS_SIZE_RANGE, PanelSpec};
use crate::product::styles::{EdgeStyle, PrintVersion};
use crate::raster::blur::BlurSpec;
use crate::raster::surface::Surface;
use crate::render::drop_shadow;
use crate::render::framed::{FramedContext, render_framed_with};

/// Longer side of the rendered panel, in pixels.
pub const MAX_DIMENSION: u32 = 1000;
/// Transparent margin around (and, for triptychs, between) panels.
pub const BUFFER: u32 = MAX_DIMENSION / 20;

const SHADOW_OFFSET: u32 = 10;
pub(crate) const SHADOW_ALPHA: u8 = 140;
const SHADOW_BLUR: BlurSpec = BlurSpec::new(20, 10.0);

/// Where a single canvas panel comes from and where it goes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SinglePlan {
    /// Rendered panel size.
    pub panel_px: PixelSize,
    /// Output canvas size (panel plus buffer on every side).
    pub canvas_px: PixelSize,
    /// Source crop covering the panel plus any wrapped or baked border.
    pub crop: PixelBox,
    /// Source box of the visible panel face, inside `crop`.
    pub panel_box: PixelBox,
    /// Border included in `crop` on every side, in inches.
    pub border_in: f64,
    /// Source pixels per inch inside `crop`.
    pub px_per_inch: f64,
}

impl SinglePlan {
    /// Where the panel is pasted on the canvas.
    pub fn panel_rect(&self) -> PixelBox {
        PixelBox::from_origin(BUFFER, BUFFER, self.panel_px)
    }
}

/// Inches of source image outside the panel face on every side.
///
/// A photo-bleed wrap needs the wrap depth around the face; a version-2 photo carries its printed
/// border in the pixels regardless of edge style.
pub(crate) fn source_border(spec: &PanelSpec) -> f64 {
    match (spec.edge, spec.version) {
        (_, PrintVersion::BakedBorder) | (EdgeStyle::PhotoBleed, PrintVersion::Plain) => {
            spec.frame.depth()
        }
        _ => 0.0,
    }
}

/// Compute the crop and canvas geometry of a single panel.
pub fn plan_single(source: PixelSize, spec: &PanelSpec) -> MockupResult<SinglePlan> {
    spec.size.validate(&CANVAS_SIZE_RANGE, "single")?;
    let (w, h) = (spec.size.width, spec.size.height);

    let panel_px = aspect_fit(w, h, MAX_DIMENSION)?;
    let canvas_px = PixelSize::new(panel_px.width + 2 * BUFFER, panel_px.height + 2 * BUFFER)?;

    let border_in = source_border(spec);
    let region = PrintRegion::new(source, w + 2.0 * border_in, h + 2.0 * border_in)?;
    let panel_box = region.span(border_in, border_in, border_in + w, border_in + h);
    panel_box.size()?;

    Ok(SinglePlan {
        panel_px,
        canvas_px,
        crop: region.crop,
        panel_box,
        border_in,
        px_per_inch: region.px_per_inch_x(),
    })
}

/// Render one canvas panel with a soft drop shadow on a transparent canvas.
///
/// Moulded frame styles hand off to the framed-print renderer.
#[tracing::instrument(skip(source), fields(source_w = source.width(), source_h = source.height()))]
pub fn render_single(source: &Surface, spec: &PanelSpec) -> MockupResult<Surface> {
    if spec.frame.is_framed() {
        return render_framed_with(
            source,
            &spec.framed(),
            FramedContext::Delegated {
                version: spec.version,
            },
        );
    }

    let plan = plan_single(source.size(), spec)?;
    tracing::debug!(
        panel = ?plan.panel_px,
        crop = ?plan.crop,
        panel_box = ?plan.panel_box,
        "single panel plan"
    );

    let panel = source.crop(plan.panel_box)?.resize(plan.panel_px)?;
    let rect = plan.panel_rect();

    let mut canvas = Surface::new(plan.canvas_px);
    let shadow = drop_shadow(plan.canvas_px, rect, SHADOW_OFFSET, SHADOW_ALPHA, SHADOW_BLUR)?;
    let bounds = canvas.bounds();
    shadow.paint_onto(&mut canvas, Rgb8::BLACK, bounds)?;
    canvas.draw(&panel, i64::from(rect.left), i64::from(rect.top));
    Ok(canvas)
}

#[cfg(test)]
#[path = "../../tests/unit/render/single.rs"]
mod tests;
