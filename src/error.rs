//! Common error type and alias for the pipeline.
//!
//! Every stage fails fast: the first error unwinds to the caller unchanged
//! and its message is printed verbatim by the binary.
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// A required credential or setting is missing. Raised before any
    /// network call is made.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The synthesis backend answered with a non-success status. Carries
    /// the raw response body.
    #[error("image generation failed: {0}")]
    Upstream(String),

    /// The synthesis backend answered success but returned no usable image.
    #[error("no image URL found in model response")]
    EmptyResult,

    /// The delivery transport failed (spawn error, non-zero exit, or a
    /// non-success gateway response).
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// The outbound request itself could not be sent or read.
    #[error(transparent)]
    HttpClient(#[from] reqwest::Error),
}
