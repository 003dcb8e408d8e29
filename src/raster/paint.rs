use crate::foundation::core::{PixelBox, PixelSize, Point, Rect, Rgb8};
use crate::foundation::error::{MockupError, MockupResult};
use crate::raster::mask::AlphaMask;
use crate::raster::surface::Surface;

/// Anti-aliased vector drawing into a transparent layer, backed by `vello_cpu`.
///
/// Everything drawn into one layer is flattened when the layer is rasterized; callers composite the
/// result onto their canvas with [`Surface::draw_layer`].
pub struct VectorLayer {
    size: PixelSize,
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
}

impl std::fmt::Debug for VectorLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VectorLayer")
            .field("width", &self.size.width)
            .field("height", &self.size.height)
            .finish()
    }
}

impl VectorLayer {
    /// Empty layer of `size`; each side must fit in `u16`.
    pub fn new(size: PixelSize) -> MockupResult<Self> {
        let width = u16::try_from(size.width).map_err(|_| {
            MockupError::validation(format!("layer width {} exceeds u16", size.width))
        })?;
        let height = u16::try_from(size.height).map_err(|_| {
            MockupError::validation(format!("layer height {} exceeds u16", size.height))
        })?;
        let mut ctx = vello_cpu::RenderContext::new(width, height);
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        Ok(Self {
            size,
            width,
            height,
            ctx,
        })
    }

    fn set_color(&mut self, color: Rgb8, alpha: u8) {
        self.ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
            color.r, color.g, color.b, alpha,
        ));
    }

    /// Fill `rect` with `color` at straight alpha `alpha`.
    pub fn fill_rect(&mut self, rect: Rect, color: Rgb8, alpha: u8) {
        self.set_color(color, alpha);
        self.ctx.fill_rect(&rect_to_cpu(rect));
    }

    /// Fill the closed polygon through `points` (non-zero winding).
    pub fn fill_polygon(&mut self, points: &[Point], color: Rgb8, alpha: u8) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(*first));
        for p in rest {
            path.line_to(point_to_cpu(*p));
        }
        path.close_path();
        self.set_color(color, alpha);
        self.ctx.fill_path(&path);
    }

    /// Outline the pixels just inside `b` with a stroke of `width` pixels.
    ///
    /// The stroke is centred `width / 2` inside the box edge so it covers whole pixel rows.
    pub fn stroke_box(&mut self, b: PixelBox, width: f64, color: Rgb8, alpha: u8) {
        let half = width / 2.0;
        let r = b.to_rect().inset(-half);
        if r.width() <= 0.0 || r.height() <= 0.0 {
            return;
        }
        self.set_color(color, alpha);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_rect(&rect_to_cpu(r));
    }

    /// Straight segment from `a` to `b`.
    pub fn line(&mut self, a: Point, b: Point, width: f64, color: Rgb8, alpha: u8) {
        let mut path = vello_cpu::kurbo::BezPath::new();
        path.move_to(point_to_cpu(a));
        path.line_to(point_to_cpu(b));
        self.set_color(color, alpha);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&path);
    }

    /// Flatten the layer into a premultiplied surface.
    pub fn rasterize(mut self) -> MockupResult<Surface> {
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut pixmap);
        Surface::from_premul(self.size, pixmap.data_as_u8_slice().to_vec())
    }

    /// Flatten the layer and keep only its coverage.
    pub fn rasterize_coverage(self) -> MockupResult<AlphaMask> {
        Ok(AlphaMask::from_surface_alpha(&self.rasterize()?))
    }
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn rect_to_cpu(r: Rect) -> vello_cpu::kurbo::Rect {
    vello_cpu::kurbo::Rect::new(r.x0, r.y0, r.x1, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/raster/paint.rs"]
mod tests;
