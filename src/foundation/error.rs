/// Convenience result type used across the compositor.
pub type MockupResult<T> = Result<T, MockupError>;

/// Top-level error taxonomy used by renderer and host APIs.
#[derive(thiserror::Error, Debug)]
pub enum MockupError {
    /// Malformed directive: bad syntax, unknown product code, missing or non-numeric size.
    #[error("directive error: {0}")]
    Directive(String),

    /// Well-formed input that violates a product constraint (e.g. size out of range).
    #[error("validation error: {0}")]
    Validation(String),

    /// Scene template key with no entry in the catalog.
    #[error("unknown scene: {0}")]
    UnknownScene(String),

    /// Missing or corrupt bundled template asset.
    #[error("asset error: {0}")]
    Asset(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MockupError {
    /// Build a [`MockupError::Directive`] value.
    pub fn directive(msg: impl Into<String>) -> Self {
        Self::Directive(msg.into())
    }

    /// Build a [`MockupError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MockupError::UnknownScene`] value.
    pub fn unknown_scene(msg: impl Into<String>) -> Self {
        Self::UnknownScene(msg.into())
    }

    /// Build a [`MockupError::Asset`] value.
    pub fn asset(msg: impl Into<String>) -> Self {
        Self::Asset(msg.into())
    }

    /// `true` when the failure was caused by the request rather than by the installation.
    ///
    /// Input errors are reported back to the host; everything else is a configuration fault.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::Directive(_) | Self::Validation(_) | Self::UnknownScene(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
