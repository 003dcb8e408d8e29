use crate::foundation::error::{MockupError, MockupResult};

pub use kurbo::{Point, Rect};

/// Width and height of a raster, in pixels.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PixelSize {
    /// Construct a size; both dimensions must be non-zero.
    pub fn new(width: u32, height: u32) -> MockupResult<Self> {
        if width == 0 || height == 0 {
            return Err(MockupError::validation(format!(
                "pixel size must be non-zero, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// `width / height` as a float.
    pub fn aspect(self) -> f64 {
        f64::from(self.width) / f64::from(self.height)
    }

    /// The longer of the two dimensions.
    pub fn max_side(self) -> u32 {
        self.width.max(self.height)
    }

    /// Pixel count (`width * height`).
    pub fn area(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }
}

/// Integer pixel rectangle `[left, right) x [top, bottom)`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PixelBox {
    /// Left edge (inclusive).
    pub left: u32,
    /// Top edge (inclusive).
    pub top: u32,
    /// Right edge (exclusive).
    pub right: u32,
    /// Bottom edge (exclusive).
    pub bottom: u32,
}

impl PixelBox {
    /// Construct a box from its four edges.
    pub fn new(left: u32, top: u32, right: u32, bottom: u32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Box covering a whole raster of `size`.
    pub fn from_size(size: PixelSize) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Box at `(left, top)` with the given extent.
    pub fn from_origin(left: u32, top: u32, size: PixelSize) -> Self {
        Self::new(left, top, left + size.width, top + size.height)
    }

    /// Horizontal extent (0 when degenerate).
    pub fn width(self) -> u32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent (0 when degenerate).
    pub fn height(self) -> u32 {
        self.bottom.saturating_sub(self.top)
    }

    /// `true` if the box covers no pixels.
    pub fn is_empty(self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Extent as a [`PixelSize`]; fails for empty boxes.
    pub fn size(self) -> MockupResult<PixelSize> {
        PixelSize::new(self.width(), self.height())
    }

    /// `true` if `other` lies entirely inside `self`.
    pub fn contains_box(self, other: PixelBox) -> bool {
        other.left >= self.left
            && other.top >= self.top
            && other.right <= self.right
            && other.bottom <= self.bottom
    }

    /// `true` if pixel `(x, y)` lies inside the box.
    pub fn contains(self, x: u32, y: u32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }

    /// Overlapping region of two boxes (possibly empty).
    pub fn intersect(self, other: PixelBox) -> PixelBox {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right.min(other.right).max(left);
        let bottom = self.bottom.min(other.bottom).max(top);
        PixelBox::new(left, top, right, bottom)
    }

    /// Box grown by `by` pixels on every side, clamped to `bounds`.
    pub fn grow_within(self, by: u32, bounds: PixelBox) -> PixelBox {
        PixelBox::new(
            self.left.saturating_sub(by),
            self.top.saturating_sub(by),
            self.right.saturating_add(by),
            self.bottom.saturating_add(by),
        )
        .intersect(bounds)
    }

    /// Box shrunk by `by` pixels on every side; collapses to an empty box at its center.
    pub fn shrink(self, by: u32) -> PixelBox {
        let cx = self.left + self.width() / 2;
        let cy = self.top + self.height() / 2;
        PixelBox::new(
            self.left.saturating_add(by).min(cx),
            self.top.saturating_add(by).min(cy),
            self.right.saturating_sub(by).max(cx),
            self.bottom.saturating_sub(by).max(cy),
        )
    }

    /// Same box expressed as a float rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(
            f64::from(self.left),
            f64::from(self.top),
            f64::from(self.right),
            f64::from(self.bottom),
        )
    }

    /// Snap a float rectangle to pixels by truncating each edge toward zero.
    ///
    /// Negative coordinates clamp to 0.
    pub fn from_rect_trunc(r: Rect) -> PixelBox {
        fn px(v: f64) -> u32 {
            v.max(0.0).trunc() as u32
        }
        PixelBox::new(px(r.x0), px(r.y0), px(r.x1), px(r.y1))
    }
}

/// Opaque 8-bit RGB color used by the style tables.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Construct from channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure black.
    pub const BLACK: Rgb8 = Rgb8::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Rgb8 = Rgb8::new(255, 255, 255);

    /// Premultiplied pixel of this color at straight alpha `a`.
    pub fn with_alpha(self, a: u8) -> Rgba8Premul {
        Rgba8Premul::from_straight_rgba(self.r, self.g, self.b, a)
    }
}

/// Premultiplied RGBA8 (r,g,b already multiplied by a).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8Premul {
    /// Red channel, premultiplied.
    pub r: u8,
    /// Green channel, premultiplied.
    pub g: u8,
    /// Blue channel, premultiplied.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Rgba8Premul {
    /// Fully transparent pixel.
    pub fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            a: 0,
        }
    }

    /// Premultiply a straight-alpha color.
    pub fn from_straight_rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        fn premul(c: u8, a: u8) -> u8 {
            let c = u16::from(c);
            let a = u16::from(a);
            (((c * a) + 127) / 255) as u8
        }

        Self {
            r: premul(r, a),
            g: premul(g, a),
            b: premul(b, a),
            a,
        }
    }

    /// Channels in `[r, g, b, a]` order.
    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
