use std::sync::Arc;

use image::RgbaImage;

use crate::assets::scenes::SceneCatalog;
use crate::foundation::error::{MockupError, MockupResult};
use crate::product::descriptor::Product;
use crate::raster::surface::Surface;
use crate::render::dispatch::render_product;

/// Result of applying a directive to a host image.
#[derive(Debug)]
pub enum FilterOutcome {
    /// The rendered scene replaces the host image.
    Rendered(RgbaImage),
    /// Rendering was aborted; the host image is handed back untouched.
    Unchanged {
        /// The original image.
        image: RgbaImage,
        /// Why rendering stopped.
        error: MockupError,
    },
}

impl FilterOutcome {
    /// `true` if a scene was rendered.
    pub fn is_rendered(&self) -> bool {
        matches!(self, FilterOutcome::Rendered(_))
    }

    /// The image the host should continue with.
    pub fn image(&self) -> &RgbaImage {
        match self {
            FilterOutcome::Rendered(image) | FilterOutcome::Unchanged { image, .. } => image,
        }
    }

    /// Split into the resulting image and the failure, if any.
    pub fn into_parts(self) -> (RgbaImage, Option<MockupError>) {
        match self {
            FilterOutcome::Rendered(image) => (image, None),
            FilterOutcome::Unchanged { image, error } => (image, Some(error)),
        }
    }
}

/// Applies `product(...)` directives to decoded host images.
///
/// Cheap to clone; the scene catalog is shared.
#[derive(Clone, Debug)]
pub struct ProductFilter {
    catalog: Arc<SceneCatalog>,
}

impl ProductFilter {
    /// Filter rendering pillow scenes from `catalog`.
    pub fn new(catalog: Arc<SceneCatalog>) -> Self {
        Self { catalog }
    }

    /// Filter backed by the bundled scene templates.
    pub fn with_bundled_scenes() -> MockupResult<Self> {
        Ok(Self::new(Arc::new(SceneCatalog::bundled()?)))
    }

    /// Scene templates in use.
    pub fn catalog(&self) -> &SceneCatalog {
        &self.catalog
    }

    /// Render `directive` from `image`, or hand `image` back with the reason it was not rendered.
    ///
    /// Never panics on bad input; every failure is logged and returned.
    pub fn apply(&self, directive: &str, image: RgbaImage) -> FilterOutcome {
        match self.render(directive, &image) {
            Ok(rendered) => FilterOutcome::Rendered(rendered),
            Err(error) => {
                if error.is_input_error() {
                    tracing::error!(directive, %error, "product render aborted");
                } else {
                    tracing::error!(directive, error = ?error, "product render failed");
                }
                FilterOutcome::Unchanged { image, error }
            }
        }
    }

    /// Render `directive` from `image`, propagating the failure.
    pub fn render(&self, directive: &str, image: &RgbaImage) -> MockupResult<RgbaImage> {
        let product = Product::parse(directive)?;
        let source = Surface::from_rgba_image(image)?;
        render_product(&source, &product, &self.catalog)?.to_rgba_image()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/filter.rs"]
mod tests;
