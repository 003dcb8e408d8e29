//! Shared geometry: aspect-fit sizing, center crops and physical-to-pixel conversion.

pub(crate) mod fit;
