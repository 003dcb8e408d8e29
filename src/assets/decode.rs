use anyhow::Context;

use crate::foundation::error::MockupResult;
use crate::raster::surface::Surface;

/// Decode encoded image bytes (PNG, JPEG, ...) into a premultiplied surface.
pub fn decode_image(bytes: &[u8]) -> MockupResult<Surface> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    Surface::from_rgba_image(&dyn_img.to_rgba8())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
