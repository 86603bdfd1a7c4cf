use std::path::PathBuf;

/// Convenience result type used across brushwork.
pub type BrushworkResult<T> = Result<T, BrushworkError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum BrushworkError {
    /// A batch entry is unusable; reported before any painting for that entry begins.
    #[error("configuration error in entry {index}: {reason}")]
    Config {
        /// Zero-based position of the entry in its batch.
        index: usize,
        /// Human readable description of the offending field.
        reason: String,
    },

    /// Invalid user-provided values outside of a batch entry.
    #[error("validation error: {0}")]
    Validation(String),

    /// Overlay document or pixmap failures.
    #[error("render error: {0}")]
    Render(String),

    /// Destination could not be created or written.
    #[error("io error at '{}': {source}", path.display())]
    Io {
        /// Path that was being created, written or renamed.
        path: PathBuf,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Raster encoding failures.
    #[error("encode error: {0}")]
    Encode(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl BrushworkError {
    /// Build a [`BrushworkError::Config`] value.
    pub fn config(index: usize, reason: impl Into<String>) -> Self {
        Self::Config {
            index,
            reason: reason.into(),
        }
    }

    /// Build a [`BrushworkError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`BrushworkError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`BrushworkError::Io`] value.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a [`BrushworkError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`BrushworkError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// `true` for errors raised while validating a configuration, before painting.
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
