//! Product directives: parsing, typed descriptors and style tables.

pub(crate) mod descriptor;
pub(crate) mod directive;
pub(crate) mod styles;
