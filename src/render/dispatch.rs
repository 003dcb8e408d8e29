use crate::assets::scenes::SceneCatalog;
use crate::foundation::error::MockupResult;
use crate::product::descriptor::Product;
use crate::raster::surface::Surface;
use crate::render::framed::render_framed;
use crate::render::pet::render_pet_portrait;
use crate::render::pillow::render_pillow;
use crate::render::single::render_single;
use crate::render::triptych::render_triptych;

/// Render `product` from `source`.
///
/// The catalog is only consulted for scene-based products.
pub fn render_product(
    source: &Surface,
    product: &Product,
    catalog: &SceneCatalog,
) -> MockupResult<Surface> {
    match product {
        Product::Single(spec) => render_single(source, spec),
        Product::Triptych(spec) => render_triptych(source, spec),
        Product::FramedPrint(spec) => render_framed(source, spec),
        Product::Pillow(key) => render_pillow(source, key, catalog),
        Product::PetPortrait(spec) => render_pet_portrait(source, spec),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
