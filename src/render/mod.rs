//! Product renderers and their pure layout planners.
//!
//! Every renderer is a function of the source surface and a typed product spec; none of them
//! keeps state between calls. The only shared input is the read-only scene catalog used by the
//! pillow renderer.

pub(crate) mod dispatch;
pub(crate) mod framed;
pub(crate) mod pet;
pub(crate) mod pillow;
pub(crate) mod single;
pub(crate) mod triptych;

use crate::foundation::core::{PixelBox, PixelSize};
use crate::foundation::error::MockupResult;
use crate::raster::blur::BlurSpec;
use crate::raster::mask::AlphaMask;

/// Soft rectangular shadow: `rect` moved by `offset` on both axes, filled at `alpha`, blurred.
///
/// The returned mask has the canvas size; callers clip and tint it.
pub(crate) fn drop_shadow(
    canvas: PixelSize,
    rect: PixelBox,
    offset: u32,
    alpha: u8,
    blur: BlurSpec,
) -> MockupResult<AlphaMask> {
    let mut mask = AlphaMask::new(canvas);
    let moved = PixelBox::new(
        rect.left + offset,
        rect.top + offset,
        rect.right + offset,
        rect.bottom + offset,
    );
    mask.fill_box(moved, alpha);
    mask.blur(blur)?;
    Ok(mask)
}
