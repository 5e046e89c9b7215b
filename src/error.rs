//! Error types.

use thiserror::Error;

/// Anything that stops math processing.
#[derive(Debug, Error)]
pub enum Error {
    /// The call was malformed: no container was given, or a delimiter is
    /// empty.  Raised before the tree is touched.
    #[error("{0}")]
    Validation(String),

    /// The render backend rejected a math span.
    #[error("failed to render math: {0}")]
    Render(#[from] RenderError),
}

/// A render backend's refusal of one math span.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RenderError {
    /// Human-readable reason.
    pub message: String,
}

impl RenderError {
    /// Build an error from a message.
    pub fn new<S: Into<String>>(message: S) -> Self {
        RenderError {
            message: message.into(),
        }
    }
}
