//! Premultiplied RGBA8 rasters and the pixel operators the renderers compose with.

pub(crate) mod blur;
pub(crate) mod composite;
pub(crate) mod mask;
pub(crate) mod paint;
pub(crate) mod surface;
