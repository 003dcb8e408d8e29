use crate::foundation::core::{PixelBox, PixelSize};
use crate::foundation::error::{MockupError, MockupResult};

fn ensure_positive(name: &str, v: f64) -> MockupResult<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(MockupError::validation(format!(
            "{name} must be a positive finite number, got {v}"
        )));
    }
    Ok(())
}

/// Scale a physical size so its longer side maps to `max_dimension` pixels.
///
/// The shorter side is `max_dimension / ratio` (or `* ratio`) truncated toward zero, never below 1.
pub fn aspect_fit(width_in: f64, height_in: f64, max_dimension: u32) -> MockupResult<PixelSize> {
    ensure_positive("width", width_in)?;
    ensure_positive("height", height_in)?;
    if max_dimension == 0 {
        return Err(MockupError::validation("max dimension must be > 0"));
    }

    // Multiply before dividing so integral results stay exact.
    let max = f64::from(max_dimension);
    let (w, h) = if width_in > height_in {
        (max_dimension, (max * height_in / width_in) as u32)
    } else {
        ((max * width_in / height_in) as u32, max_dimension)
    };
    PixelSize::new(w.max(1), h.max(1))
}

/// Largest box of aspect `target_aspect` centered in a `source`-sized raster.
///
/// A relatively wider source keeps its full height and loses columns symmetrically; a relatively
/// taller one keeps its full width and loses rows. Edges are truncated once.
pub fn center_crop_to_aspect(source: PixelSize, target_aspect: f64) -> MockupResult<PixelBox> {
    ensure_positive("target aspect", target_aspect)?;

    let (w, h) = (f64::from(source.width), f64::from(source.height));
    let (cx, cy) = (w / 2.0, h / 2.0);
    let relative = source.aspect() / target_aspect;

    let mut b = PixelBox::from_size(source);
    if relative > 1.0 {
        let crop_w = w / relative;
        b.left = (cx - crop_w / 2.0).max(0.0) as u32;
        b.right = ((cx + crop_w / 2.0) as u32).min(source.width);
    } else {
        let crop_h = h * relative;
        b.top = (cy - crop_h / 2.0).max(0.0) as u32;
        b.bottom = ((cy + crop_h / 2.0) as u32).min(source.height);
    }

    if b.right <= b.left {
        b.right = (b.left + 1).min(source.width);
        b.left = b.right - 1;
    }
    if b.bottom <= b.top {
        b.bottom = (b.top + 1).min(source.height);
        b.top = b.bottom - 1;
    }
    Ok(b)
}

/// A center crop of the source that represents a known physical print area.
///
/// Every physical sub-measurement inside the print (borders, panels) is mapped into source pixels
/// through the same crop box, so dependent boxes never drift apart.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrintRegion {
    /// Crop box in source pixels.
    pub crop: PixelBox,
    /// Physical width represented by `crop`, in inches.
    pub physical_width: f64,
    /// Physical height represented by `crop`, in inches.
    pub physical_height: f64,
}

impl PrintRegion {
    /// Center-crop `source` to the aspect of `physical_width x physical_height`.
    pub fn new(source: PixelSize, physical_width: f64, physical_height: f64) -> MockupResult<Self> {
        ensure_positive("physical width", physical_width)?;
        ensure_positive("physical height", physical_height)?;
        let crop = center_crop_to_aspect(source, physical_width / physical_height)?;
        Ok(Self {
            crop,
            physical_width,
            physical_height,
        })
    }

    /// Source pixels per inch along x.
    pub fn px_per_inch_x(&self) -> f64 {
        f64::from(self.crop.width()) / self.physical_width
    }

    /// Source pixels per inch along y.
    pub fn px_per_inch_y(&self) -> f64 {
        f64::from(self.crop.height()) / self.physical_height
    }

    /// Source-pixel box for the physical rectangle `(x0, y0) - (x1, y1)`, measured in inches from
    /// the crop's top-left corner. Edges are truncated and clamped to the crop.
    pub fn span(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> PixelBox {
        let (sx, sy) = (self.px_per_inch_x(), self.px_per_inch_y());
        let c = self.crop;
        let edge = |origin: u32, inches: f64, scale: f64, limit: u32| -> u32 {
            let v = f64::from(origin) + inches * scale;
            (v.max(f64::from(origin)) as u32).min(limit)
        };
        PixelBox::new(
            edge(c.left, x0, sx, c.right),
            edge(c.top, y0, sy, c.bottom),
            edge(c.left, x1, sx, c.right),
            edge(c.top, y1, sy, c.bottom),
        )
    }

    /// The crop shrunk by `border` inches on every side.
    pub fn inset(&self, border: f64) -> PixelBox {
        self.span(
            border,
            border,
            self.physical_width - border,
            self.physical_height - border,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/fit.rs"]
mod tests;
