use crate::foundation::core::{PixelBox, PixelSize, Rgb8};
use crate::foundation::error::{MockupError, MockupResult};
use crate::raster::blur::{BlurSpec, blur_alpha8};
use crate::raster::composite;
use crate::raster::surface::Surface;

/// Single-channel coverage layer.
///
/// Shadows and highlights are one flat color with varying opacity, so they are built and blurred
/// as coverage only and tinted when composited.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlphaMask {
    size: PixelSize,
    data: Vec<u8>,
}

impl AlphaMask {
    /// Empty (fully transparent) mask.
    pub fn new(size: PixelSize) -> Self {
        Self {
            size,
            data: vec![0u8; size.area()],
        }
    }

    /// Take the alpha channel of a premultiplied surface.
    pub fn from_surface_alpha(surface: &Surface) -> Self {
        Self {
            size: surface.size(),
            data: surface.data().chunks_exact(4).map(|px| px[3]).collect(),
        }
    }

    /// Mask size.
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Coverage at `(x, y)`, 0 outside the mask.
    pub fn get(&self, x: u32, y: u32) -> u8 {
        if x >= self.size.width || y >= self.size.height {
            return 0;
        }
        self.data[(y as usize) * (self.size.width as usize) + (x as usize)]
    }

    fn bounds(&self) -> PixelBox {
        PixelBox::from_size(self.size)
    }

    /// Union `b` into the mask at coverage `alpha` (max of old and new).
    pub fn fill_box(&mut self, b: PixelBox, alpha: u8) {
        let b = b.intersect(self.bounds());
        let w = self.size.width as usize;
        for y in b.top..b.bottom {
            let row = (y as usize) * w;
            for v in &mut self.data[row + b.left as usize..row + b.right as usize] {
                *v = (*v).max(alpha);
            }
        }
    }

    /// Zero every pixel outside `keep`.
    pub fn clear_outside(&mut self, keep: PixelBox) {
        let w = self.size.width as usize;
        for y in 0..self.size.height {
            let row = (y as usize) * w;
            for x in 0..self.size.width {
                if !keep.contains(x, y) {
                    self.data[row + x as usize] = 0;
                }
            }
        }
    }

    /// Smallest box holding every non-zero pixel.
    pub fn content_bounds(&self) -> Option<PixelBox> {
        let w = self.size.width;
        let mut b: Option<PixelBox> = None;
        for (i, &v) in self.data.iter().enumerate() {
            if v == 0 {
                continue;
            }
            let (x, y) = ((i as u32) % w, (i as u32) / w);
            b = Some(match b {
                None => PixelBox::new(x, y, x + 1, y + 1),
                Some(b) => PixelBox::new(
                    b.left.min(x),
                    b.top.min(y),
                    b.right.max(x + 1),
                    b.bottom.max(y + 1),
                ),
            });
        }
        b
    }

    /// Gaussian-blur the mask in place.
    ///
    /// Only the content bounds grown by the kernel radius are processed; pixels further out stay
    /// zero either way.
    pub fn blur(&mut self, spec: BlurSpec) -> MockupResult<()> {
        let Some(content) = self.content_bounds() else {
            return Ok(());
        };
        let window = content.grow_within(spec.radius, self.bounds());
        let (ww, wh) = (window.width() as usize, window.height() as usize);
        let w = self.size.width as usize;

        let mut sub = Vec::with_capacity(ww * wh);
        for y in window.top..window.bottom {
            let row = (y as usize) * w + window.left as usize;
            sub.extend_from_slice(&self.data[row..row + ww]);
        }

        let blurred = blur_alpha8(&sub, window.width(), window.height(), spec)?;

        for (i, y) in (window.top..window.bottom).enumerate() {
            let row = (y as usize) * w + window.left as usize;
            self.data[row..row + ww].copy_from_slice(&blurred[i * ww..(i + 1) * ww]);
        }
        Ok(())
    }

    /// Source-over `color` through this mask onto `dst`, touching only pixels inside `clip`.
    pub fn paint_onto(&self, dst: &mut Surface, color: Rgb8, clip: PixelBox) -> MockupResult<()> {
        if dst.size() != self.size {
            return Err(MockupError::validation(format!(
                "mask {}x{} does not match surface {}x{}",
                self.size.width,
                self.size.height,
                dst.width(),
                dst.height()
            )));
        }
        let clip = clip.intersect(self.bounds());
        for y in clip.top..clip.bottom {
            for x in clip.left..clip.right {
                let a = self.get(x, y);
                if a == 0 {
                    continue;
                }
                let src = color.with_alpha(a).to_array();
                let out = composite::over(dst.px(x, y), src);
                dst.set_px(x, y, out);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/mask.rs"]
mod tests;
