use image::{ImageBuffer, Rgba, RgbaImage};

use crate::foundation::core::{PixelBox, PixelSize, Rgba8Premul};
use crate::foundation::error::{MockupError, MockupResult};
use crate::foundation::math::{mul_div255_u8, unpremul_u8};
use crate::raster::composite::{self, PremulRgba8};

/// Premultiplied RGBA8 raster, tightly packed, row-major.
///
/// Every renderer step takes surfaces by reference and returns new ones; the only in-place
/// mutation is compositing onto a canvas the step itself owns.
#[derive(Clone, PartialEq, Eq)]
pub struct Surface {
    size: PixelSize,
    data: Vec<u8>,
}

impl std::fmt::Debug for Surface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Surface")
            .field("width", &self.size.width)
            .field("height", &self.size.height)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl Surface {
    /// Fully transparent surface.
    pub fn new(size: PixelSize) -> Self {
        Self {
            size,
            data: vec![0u8; size.area() * 4],
        }
    }

    /// Surface filled with one color.
    pub fn filled(size: PixelSize, color: Rgba8Premul) -> Self {
        Self {
            size,
            data: color.to_array().repeat(size.area()),
        }
    }

    /// Wrap premultiplied bytes.
    pub fn from_premul(size: PixelSize, data: Vec<u8>) -> MockupResult<Self> {
        if data.len() != size.area() * 4 {
            return Err(MockupError::validation(format!(
                "surface {}x{} expects {} bytes, got {}",
                size.width,
                size.height,
                size.area() * 4,
                data.len()
            )));
        }
        Ok(Self { size, data })
    }

    /// Premultiply a straight-alpha host image.
    pub fn from_rgba_image(img: &RgbaImage) -> MockupResult<Self> {
        let (w, h) = img.dimensions();
        let mut data = img.as_raw().clone();
        premultiply_rgba8_in_place(&mut data);
        Self::from_premul(PixelSize::new(w, h)?, data)
    }

    /// Convert back to a straight-alpha host image.
    pub fn to_rgba_image(&self) -> MockupResult<RgbaImage> {
        let mut data = self.data.clone();
        for px in data.chunks_exact_mut(4) {
            let a = px[3];
            if a == 255 {
                continue;
            }
            px[0] = unpremul_u8(px[0], a);
            px[1] = unpremul_u8(px[1], a);
            px[2] = unpremul_u8(px[2], a);
        }
        RgbaImage::from_raw(self.size.width, self.size.height, data)
            .ok_or_else(|| MockupError::validation("surface buffer does not match its size"))
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.size.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.size.height
    }

    /// Size in pixels.
    pub fn size(&self) -> PixelSize {
        self.size
    }

    /// Box covering the whole surface.
    pub fn bounds(&self) -> PixelBox {
        PixelBox::from_size(self.size)
    }

    /// Raw premultiplied bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.size.width as usize) + (x as usize)) * 4
    }

    /// Premultiplied pixel at `(x, y)`; `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.size.width || y >= self.size.height {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgba8Premul {
            r: self.data[i],
            g: self.data[i + 1],
            b: self.data[i + 2],
            a: self.data[i + 3],
        })
    }

    pub(crate) fn px(&self, x: u32, y: u32) -> PremulRgba8 {
        let i = self.index(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub(crate) fn set_px(&mut self, x: u32, y: u32, px: PremulRgba8) {
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Copy out the pixels inside `b`.
    pub fn crop(&self, b: PixelBox) -> MockupResult<Surface> {
        if b.is_empty() || !self.bounds().contains_box(b) {
            return Err(MockupError::validation(format!(
                "crop box {b:?} is empty or outside {}x{}",
                self.size.width, self.size.height
            )));
        }
        let size = b.size()?;
        let row_bytes = (b.width() as usize) * 4;
        let mut data = Vec::with_capacity(size.area() * 4);
        for y in b.top..b.bottom {
            let start = self.index(b.left, y);
            data.extend_from_slice(&self.data[start..start + row_bytes]);
        }
        Surface::from_premul(size, data)
    }

    /// Bilinear resample to `size`.
    pub fn resize(&self, size: PixelSize) -> MockupResult<Surface> {
        if size == self.size {
            return Ok(self.clone());
        }
        let view: ImageBuffer<Rgba<u8>, &[u8]> =
            ImageBuffer::from_raw(self.size.width, self.size.height, self.data.as_slice())
                .ok_or_else(|| MockupError::validation("surface buffer does not match its size"))?;
        let out = image::imageops::resize(
            &view,
            size.width,
            size.height,
            image::imageops::FilterType::Triangle,
        );
        Surface::from_premul(size, out.into_raw())
    }

    /// Source-over `src` with its top-left corner at `(x, y)`, clipped to this surface.
    pub fn draw(&mut self, src: &Surface, x: i64, y: i64) {
        self.draw_clipped(src, x, y, self.bounds());
    }

    /// Like [`Surface::draw`], but only pixels inside `clip` are touched.
    pub fn draw_clipped(&mut self, src: &Surface, x: i64, y: i64, clip: PixelBox) {
        let clip = clip.intersect(self.bounds());
        for sy in 0..src.height() {
            let dy = y + i64::from(sy);
            if dy < i64::from(clip.top) || dy >= i64::from(clip.bottom) {
                continue;
            }
            for sx in 0..src.width() {
                let dx = x + i64::from(sx);
                if dx < i64::from(clip.left) || dx >= i64::from(clip.right) {
                    continue;
                }
                let (dx, dy) = (dx as u32, dy as u32);
                let out = composite::over(self.px(dx, dy), src.px(sx, sy));
                self.set_px(dx, dy, out);
            }
        }
    }

    /// Source-over a same-sized layer.
    pub fn draw_layer(&mut self, layer: &Surface) -> MockupResult<()> {
        if layer.size != self.size {
            return Err(MockupError::validation(format!(
                "layer {}x{} does not match surface {}x{}",
                layer.width(),
                layer.height(),
                self.width(),
                self.height()
            )));
        }
        composite::over_in_place(&mut self.data, &layer.data)
    }

    /// Source-over a solid color over the pixels inside `b`.
    pub fn fill_box(&mut self, b: PixelBox, color: Rgba8Premul) {
        let b = b.intersect(self.bounds());
        let src = color.to_array();
        for y in b.top..b.bottom {
            for x in b.left..b.right {
                let out = composite::over(self.px(x, y), src);
                self.set_px(x, y, out);
            }
        }
    }
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 255 {
            continue;
        }
        px[0] = mul_div255_u8(u16::from(px[0]), a);
        px[1] = mul_div255_u8(u16::from(px[1]), a);
        px[2] = mul_div255_u8(u16::from(px[2]), a);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/raster/surface.rs"]
mod tests;
