//! Custom error types for the application.
//!
//! Provides structured error handling for each domain:
//!
//! - [`SubmitError`] - Everything that can end a submission unsuccessfully
//! - [`DomError`] - Browser plumbing failures (elements, object URLs, inputs)

use thiserror::Error;

/// Why a submission did not produce a result.
///
/// Every variant terminates at the banner layer; its `Display` text is what
/// the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// Client-side precondition failed; no request was sent.
    #[error("{0}")]
    Validation(String),
    /// Non-2xx response, or a body that could not be interpreted.
    #[error("{message}")]
    Request { status: u16, message: String },
    /// The request never produced a response.
    #[error("An error occurred: {0}")]
    Transport(String),
    /// The result arrived but could not be handed to the user.
    #[error("An error occurred: {0}")]
    Delivery(String),
}

/// Browser API failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    #[error("Browser window not available")]
    NoWindow,
    #[error("Document not available")]
    NoDocument,
    #[error("Failed to create element: {0}")]
    CreateElement(String),
    #[error("Failed to create blob")]
    BlobCreation,
    #[error("Failed to create object URL")]
    ObjectUrl,
    #[error("Failed to build form data")]
    FormData,
    #[error("Failed to update file input")]
    FileInput,
}

impl From<DomError> for SubmitError {
    fn from(err: DomError) -> Self {
        Self::Delivery(err.to_string())
    }
}
