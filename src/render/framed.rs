use std::ops::RangeInclusive;

use crate::foundation::core::{PixelBox, PixelSize, Point, Rgb8};
use crate::foundation::error::{MockupError, MockupResult};
use crate::geometry::fit::{PrintRegion, aspect_fit};
use crate::product::descriptor::{CANVAS_SIZE_RANGE, FRAMED_SIZE_RANGE, FramedSpec};
use crate::product::styles::{EdgeStyle, FramePalette, PHYSICAL_FRAME_DEPTH, PrintVersion};
use crate::raster::blur::BlurSpec;
use crate::raster::mask::AlphaMask;
use crate::raster::paint::VectorLayer;
use crate::raster::surface::Surface;
use crate::render::drop_shadow;

/// Longer side of the finished frame, in pixels.
pub const MAX_DIMENSION: u32 = 1280;
/// Transparent margin around the frame.
pub const BUFFER: u32 = MAX_DIMENSION / 15;

/// Print edge hidden under a small matte, in inches.
pub const MATTE_BLEED: f64 = 0.125;

const STANDALONE_MATTE: Rgb8 = Rgb8::new(250, 250, 247);

const SHADOW_OFFSET: u32 = 12;
const SHADOW_ALPHA: u8 = 150;
const SHADOW_BLUR: BlurSpec = BlurSpec::new(24, 12.0);

const SHINE_ALPHA: u8 = 70;
const SHINE_BLUR: BlurSpec = BlurSpec::new(3, 1.5);

const INNER_SHADOW_ALPHA: u8 = 110;
const INNER_SHADOW_FALLOFF_ALPHA: u8 = 60;
const INNER_SHADOW_BLUR: BlurSpec = BlurSpec::new(4, 2.0);

const EMBOSS_DARK_ALPHA: u8 = 90;
const EMBOSS_LIGHT_ALPHA: u8 = 160;

/// How the framed renderer was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FramedContext {
    /// The framed-print product itself.
    Standalone,
    /// A single canvas panel ordered with a moulded frame.
    Delegated {
        /// Whether the photo carries a baked-in border.
        version: PrintVersion,
    },
}

impl FramedContext {
    fn size_range(self) -> RangeInclusive<f64> {
        match self {
            FramedContext::Standalone => FRAMED_SIZE_RANGE,
            FramedContext::Delegated { .. } => CANVAS_SIZE_RANGE,
        }
    }

    /// Standalone prints sit in a white matte; a delegated panel's border must read as part of
    /// the print, so its matte is black.
    pub fn matte_color(self) -> Rgb8 {
        match self {
            FramedContext::Standalone => STANDALONE_MATTE,
            FramedContext::Delegated { .. } => Rgb8::BLACK,
        }
    }

    fn embossed(self) -> bool {
        self == FramedContext::Standalone
    }
}

/// Nested pixel rectangles of a framed print, outside in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameLayout {
    /// Output canvas size.
    pub canvas_px: PixelSize,
    /// Pixels per inch of the finished frame; every inch-to-pixel conversion uses it.
    pub dpi: f64,
    /// Outer edge of the moulding.
    pub outer: PixelBox,
    /// Inner edge of the moulding.
    pub inner: PixelBox,
    /// Matte area (equal to `inner`).
    pub matte: PixelBox,
    /// Visible photo.
    pub image: PixelBox,
    /// Matte width in inches.
    pub matte_in: f64,
    /// Print edge hidden under the matte, in inches.
    pub bleed_in: f64,
}

fn inches_to_px(inches: f64, dpi: f64) -> u32 {
    (inches * dpi).round().max(0.0) as u32
}

/// Compute the frame, matte and photo rectangles for `spec`.
pub fn layout_framed(spec: &FramedSpec, ctx: FramedContext) -> MockupResult<FrameLayout> {
    spec.size.validate(&ctx.size_range(), "framed print")?;

    let matte_in = spec.matte.matte_depth();
    let bleed_in = if spec.matte == EdgeStyle::SmallMatte {
        MATTE_BLEED
    } else {
        0.0
    };
    let border = PHYSICAL_FRAME_DEPTH + matte_in;
    let finished_w = spec.size.width + 2.0 * border;
    let finished_h = spec.size.height + 2.0 * border;

    let frame_px = aspect_fit(finished_w, finished_h, MAX_DIMENSION)?;
    let canvas_px = PixelSize::new(frame_px.width + 2 * BUFFER, frame_px.height + 2 * BUFFER)?;
    let dpi = f64::from(frame_px.width) / finished_w;

    let outer = PixelBox::from_origin(BUFFER, BUFFER, frame_px);
    let inner = outer.shrink(inches_to_px(PHYSICAL_FRAME_DEPTH, dpi));
    let matte = inner;
    let image = matte.shrink(inches_to_px(matte_in, dpi));
    if image.is_empty() {
        return Err(MockupError::validation(format!(
            "framed print {}x{} leaves no room for the photo",
            spec.size.width, spec.size.height
        )));
    }

    Ok(FrameLayout {
        canvas_px,
        dpi,
        outer,
        inner,
        matte,
        image,
        matte_in,
        bleed_in,
    })
}

/// Render the framed-print product.
pub fn render_framed(source: &Surface, spec: &FramedSpec) -> MockupResult<Surface> {
    render_framed_with(source, spec, FramedContext::Standalone)
}

/// Render a framed print reached directly or through a single panel.
///
/// Layers are laid down strictly in this order: drop shadow, moulding, shine, mitres, matte,
/// photo, recess shadow, inner outline, and (standalone only) the matte bevel.
#[tracing::instrument(skip(source), fields(source_w = source.width(), source_h = source.height()))]
pub fn render_framed_with(
    source: &Surface,
    spec: &FramedSpec,
    ctx: FramedContext,
) -> MockupResult<Surface> {
    let palette = spec.frame.palette().ok_or_else(|| {
        MockupError::validation(format!(
            "frame style {} is not a moulded frame",
            spec.frame.code()
        ))
    })?;
    let layout = layout_framed(spec, ctx)?;
    tracing::debug!(
        dpi = layout.dpi,
        outer = ?layout.outer,
        image = ?layout.image,
        "framed print layout"
    );

    let mut canvas = Surface::new(layout.canvas_px);

    let shadow = drop_shadow(
        layout.canvas_px,
        layout.outer,
        SHADOW_OFFSET,
        SHADOW_ALPHA,
        SHADOW_BLUR,
    )?;
    let bounds = canvas.bounds();
    shadow.paint_onto(&mut canvas, Rgb8::BLACK, bounds)?;

    draw_moulding(&mut canvas, &layout, palette)?;
    draw_shine(&mut canvas, &layout, palette)?;
    draw_mitres(&mut canvas, &layout, palette)?;

    canvas.fill_box(layout.matte, ctx.matte_color().with_alpha(255));

    let photo = prepare_photo(source, spec, ctx, &layout)?;
    canvas.draw(
        &photo,
        i64::from(layout.image.left),
        i64::from(layout.image.top),
    );

    draw_recess_shadow(&mut canvas, &layout)?;

    let mut outline = VectorLayer::new(layout.canvas_px)?;
    outline.stroke_box(layout.inner, 1.0, palette.outline, 255);
    canvas.draw_layer(&outline.rasterize()?)?;

    if ctx.embossed() && layout.matte_in > 0.0 {
        draw_bevel(&mut canvas, layout.image);
    }
    Ok(canvas)
}

fn draw_moulding(canvas: &mut Surface, layout: &FrameLayout, palette: FramePalette) -> MockupResult<()> {
    let mut layer = VectorLayer::new(layout.canvas_px)?;
    layer.fill_rect(layout.outer.to_rect(), palette.frame, 255);
    layer.stroke_box(layout.outer, 1.0, palette.outline, 255);
    canvas.draw_layer(&layer.rasterize()?)
}

/// Bevel highlight across the top and left moulding, softened and tinted.
fn draw_shine(canvas: &mut Surface, layout: &FrameLayout, palette: FramePalette) -> MockupResult<()> {
    let o = layout.outer.to_rect().inset(-1.0);
    let i = layout.inner.to_rect();
    let band = [
        Point::new(o.x0, o.y0),
        Point::new(o.x1, o.y0),
        Point::new(i.x1, i.y0),
        Point::new(i.x0, i.y0),
        Point::new(i.x0, i.y1),
        Point::new(o.x0, o.y1),
    ];
    let mut layer = VectorLayer::new(layout.canvas_px)?;
    layer.fill_polygon(&band, Rgb8::WHITE, SHINE_ALPHA);
    let mut shine = layer.rasterize_coverage()?;
    shine.blur(SHINE_BLUR)?;
    shine.paint_onto(canvas, palette.shine, layout.outer)
}

fn draw_mitres(canvas: &mut Surface, layout: &FrameLayout, palette: FramePalette) -> MockupResult<()> {
    let o = layout.outer.to_rect();
    let i = layout.inner.to_rect();
    let mut layer = VectorLayer::new(layout.canvas_px)?;
    for (a, b) in [
        (Point::new(o.x0, o.y0), Point::new(i.x0, i.y0)),
        (Point::new(o.x1, o.y0), Point::new(i.x1, i.y0)),
        (Point::new(o.x1, o.y1), Point::new(i.x1, i.y1)),
        (Point::new(o.x0, o.y1), Point::new(i.x0, i.y1)),
    ] {
        layer.line(a, b, 1.0, palette.outline, 255);
    }
    canvas.draw_layer(&layer.rasterize()?)
}

/// Crop and scale the photo to exactly fill `layout.image`.
///
/// The crop covers the visible print plus the edge hidden under a small matte and, for a
/// version-2 delegated photo, the baked-in border, which is trimmed off before scaling.
fn prepare_photo(
    source: &Surface,
    spec: &FramedSpec,
    ctx: FramedContext,
    layout: &FrameLayout,
) -> MockupResult<Surface> {
    let baked = match ctx {
        FramedContext::Delegated {
            version: PrintVersion::BakedBorder,
        } => spec.frame.depth(),
        _ => 0.0,
    };
    let margin = layout.bleed_in + baked;
    let region = PrintRegion::new(
        source.size(),
        spec.size.width + 2.0 * margin,
        spec.size.height + 2.0 * margin,
    )?;
    let print_box = region.inset(baked);

    let image_px = layout.image.size()?;
    let bleed_px = inches_to_px(layout.bleed_in, layout.dpi);
    let padded = PixelSize::new(
        image_px.width + 2 * bleed_px,
        image_px.height + 2 * bleed_px,
    )?;
    let photo = source.crop(print_box)?.resize(padded)?;
    if bleed_px == 0 {
        return Ok(photo);
    }
    photo.crop(PixelBox::from_origin(bleed_px, bleed_px, image_px))
}

/// Shadow cast by the matte onto the top and left of the photo.
fn draw_recess_shadow(canvas: &mut Surface, layout: &FrameLayout) -> MockupResult<()> {
    let img = layout.image;
    let t = inches_to_px(0.05, layout.dpi).max(2);
    let mut mask = AlphaMask::new(layout.canvas_px);
    for (depth, alpha) in [(t, INNER_SHADOW_ALPHA), (2 * t, INNER_SHADOW_FALLOFF_ALPHA)] {
        mask.fill_box(
            PixelBox::new(img.left, img.top, img.right, img.top + depth),
            alpha,
        );
        mask.fill_box(
            PixelBox::new(img.left, img.top, img.left + depth, img.bottom),
            alpha,
        );
    }
    mask.blur(INNER_SHADOW_BLUR)?;
    mask.paint_onto(canvas, Rgb8::BLACK, img)
}

/// One-pixel bevel around the matte opening: dark above and left, light below and right.
fn draw_bevel(canvas: &mut Surface, img: PixelBox) {
    let (l, t) = (img.left.saturating_sub(1), img.top.saturating_sub(1));
    let dark = Rgb8::BLACK.with_alpha(EMBOSS_DARK_ALPHA);
    let light = Rgb8::WHITE.with_alpha(EMBOSS_LIGHT_ALPHA);
    canvas.fill_box(PixelBox::new(l, t, img.right, img.top), dark);
    canvas.fill_box(PixelBox::new(l, img.top, img.left, img.bottom), dark);
    canvas.fill_box(PixelBox::new(l, img.bottom, img.right + 1, img.bottom + 1), light);
    canvas.fill_box(PixelBox::new(img.right, t, img.right + 1, img.bottom), light);
}

#[cfg(test)]
#[path = "../../tests/unit/render/framed.rs"]
mod tests;
