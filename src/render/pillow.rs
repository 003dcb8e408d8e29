use crate::assets::scenes::{SceneAsset, SceneCatalog};
use crate::foundation::core::PixelSize;
use crate::foundation::error::MockupResult;
use crate::product::descriptor::SceneKey;
use crate::raster::composite;
use crate::raster::surface::Surface;

/// Size the photo is scaled to: the scene's insert width, height in proportion (truncated).
pub fn insert_size(source: PixelSize, insert_width_px: u32) -> MockupResult<PixelSize> {
    let scale = f64::from(insert_width_px) / f64::from(source.width);
    let height = (f64::from(source.height) * scale) as u32;
    PixelSize::new(insert_width_px, height.max(1))
}

/// Render the photo into the pillow scene named by `key`.
#[tracing::instrument(skip(source, catalog), fields(scene = %key))]
pub fn render_pillow(
    source: &Surface,
    key: &SceneKey,
    catalog: &SceneCatalog,
) -> MockupResult<Surface> {
    let scene = catalog.get(key)?;
    composite_into_scene(source, &scene)
}

/// Center the resized photo in the scene, multiply it into the background through the mask,
/// and lay the result over the shadowed background.
pub fn composite_into_scene(source: &Surface, scene: &SceneAsset) -> MockupResult<Surface> {
    let background = scene.background();
    let size = insert_size(source.size(), scene.insert_width_px())?;
    tracing::debug!(insert = ?size, scene_size = ?background.size(), "pillow insert");
    let photo = source.resize(size)?;

    let mut placed = Surface::new(background.size());
    let x = (i64::from(background.width()) - i64::from(size.width)).div_euclid(2);
    let y = (i64::from(background.height()) - i64::from(size.height)).div_euclid(2);
    placed.draw(&photo, x, y);

    let mut out = background.clone();
    if let Some(shadow) = scene.shadow() {
        out.draw_layer(shadow)?;
    }

    let mask = scene.mask();
    for y in 0..out.height() {
        for x in 0..out.width() {
            let weight = mask.get(x, y);
            if weight == 0 {
                continue;
            }
            let shaded = composite::multiply(background.px(x, y), placed.px(x, y));
            let px = composite::mix(out.px(x, y), shaded, weight);
            out.set_px(x, y, px);
        }
    }
    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/render/pillow.rs"]
mod tests;
