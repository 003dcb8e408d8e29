//! Decoding of photos and scene templates, and the shared scene catalog.

pub(crate) mod decode;
pub(crate) mod scenes;
