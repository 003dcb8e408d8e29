//! Entry point for image services that load the photo and hand over the directive.

pub(crate) mod filter;
