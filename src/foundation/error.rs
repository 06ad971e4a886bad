/// Convenience result type used across weightbox.
pub type WeightboxResult<T> = Result<T, WeightboxError>;

/// Top-level error taxonomy used by the library APIs.
///
/// Layout passes themselves never fail: degenerate inputs (zero extents, detached children)
/// degrade to well-defined output. Errors come from the boundary: parsing documents,
/// validating them, and allocating render surfaces.
#[derive(thiserror::Error, Debug)]
pub enum WeightboxError {
    /// Invalid user-provided configuration or document data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors while rasterizing decorations onto a surface.
    #[error("render error: {0}")]
    Render(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl WeightboxError {
    /// Build a [`WeightboxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`WeightboxError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`WeightboxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
