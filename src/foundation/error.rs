/// Convenience result type used across the crate.
pub type SlideshowResult<T> = Result<T, SlideshowError>;

/// Top-level error taxonomy for the slideshow pipeline.
#[derive(thiserror::Error, Debug)]
pub enum SlideshowError {
    /// Invalid configuration or caller-supplied data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing inputs or unreadable media directory.
    #[error("discovery error: {0}")]
    Discovery(String),

    /// Duration probing failed for a source file.
    #[error("probe error: {0}")]
    Probe(String),

    /// The external encoder could not be spawned or exited unsuccessfully.
    #[error("encode error: {0}")]
    Encode(String),

    /// A required external tool could not be located.
    #[error("tool not found: {0}")]
    ToolNotFound(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SlideshowError {
    /// Build a [`SlideshowError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`SlideshowError::Discovery`] value.
    pub fn discovery(msg: impl Into<String>) -> Self {
        Self::Discovery(msg.into())
    }

    /// Build a [`SlideshowError::Probe`] value.
    pub fn probe(msg: impl Into<String>) -> Self {
        Self::Probe(msg.into())
    }

    /// Build a [`SlideshowError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`SlideshowError::ToolNotFound`] value.
    pub fn tool_not_found(name: impl Into<String>) -> Self {
        Self::ToolNotFound(name.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
