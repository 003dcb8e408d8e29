use crate::foundation::core::PixelBox;
use crate::foundation::error::{MockupError, MockupResult};
use crate::product::descriptor::PanelSpec;
use crate::raster::surface::Surface;
use crate::render::single::render_single;

/// Pixels discarded from every side of a pet-portrait photo.
pub const PET_MARGIN: u32 = 37;

/// The source with the pet-portrait margin removed.
pub fn trim_margin(source: &Surface) -> MockupResult<Surface> {
    let (w, h) = (source.width(), source.height());
    if w <= 2 * PET_MARGIN || h <= 2 * PET_MARGIN {
        return Err(MockupError::validation(format!(
            "pet portrait source {w}x{h} is too small for a {PET_MARGIN}px margin"
        )));
    }
    source.crop(PixelBox::new(
        PET_MARGIN,
        PET_MARGIN,
        w - PET_MARGIN,
        h - PET_MARGIN,
    ))
}

/// Render a pet portrait: trim the margin, then render as a single panel.
#[tracing::instrument(skip(source), fields(source_w = source.width(), source_h = source.height()))]
pub fn render_pet_portrait(source: &Surface, spec: &PanelSpec) -> MockupResult<Surface> {
    render_single(&trim_margin(source)?, spec)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pet.rs"]
mod tests;
