//! Photo-product mockups: a customer photo composited into canvas, triptych, framed-print,
//! pillow and pet-portrait scenes.
//!
//! The host hands over a decoded image and a directive such as `product(S,16,20,PB,150DW,2)`:
//!
//! - [`ProductDescriptor`] / [`Product`] parse the directive into a typed product
//! - the renderers ([`render_product`] and the per-product functions) map physical inches onto
//!   pixels, crop and scale the photo and build the scene layer by layer
//! - [`ProductFilter`] wraps it all for image services: bad input hands the photo back with the
//!   reason instead of failing the request
//!
//! Renders are pure functions of the photo, the product and the read-only [`SceneCatalog`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;
mod geometry;
mod host;
mod product;
mod raster;
mod render;

pub use crate::foundation::core::{PixelBox, PixelSize, Point, Rect, Rgb8, Rgba8Premul};
pub use crate::foundation::error::{MockupError, MockupResult};

pub use crate::geometry::fit::{PrintRegion, aspect_fit, center_crop_to_aspect};

pub use crate::product::descriptor::{
    CANVAS_SIZE_RANGE, FRAMED_SIZE_RANGE, FramedSpec, PanelSpec, PhysicalSize, Product,
    ProductCode, ProductDescriptor, SceneKey,
};
pub use crate::product::styles::{
    EdgeStyle, FramePalette, FrameStyle, PHYSICAL_FRAME_DEPTH, PrintVersion,
};

pub use crate::raster::blur::BlurSpec;
pub use crate::raster::mask::AlphaMask;
pub use crate::raster::paint::VectorLayer;
pub use crate::raster::surface::Surface;

pub use crate::assets::decode::decode_image;
pub use crate::assets::scenes::{MANIFEST_FILE, SceneAsset, SceneCatalog};

pub use crate::render::dispatch::render_product;
pub use crate::render::framed::{
    FrameLayout, FramedContext, layout_framed, render_framed, render_framed_with,
};
pub use crate::render::pet::{PET_MARGIN, render_pet_portrait, trim_margin};
pub use crate::render::pillow::{composite_into_scene, insert_size, render_pillow};
pub use crate::render::single::{SinglePlan, plan_single, render_single};
pub use crate::render::triptych::{TriptychPlan, plan_triptych, render_triptych};

pub use crate::host::filter::{FilterOutcome, ProductFilter};
