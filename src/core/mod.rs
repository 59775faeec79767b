//! Core behavior for selection and submission.
//!
//! This module provides:
//! - [`selection`] transitions that keep a [`FileSet`](crate::models::FileSet) in step with the page
//! - [`SubmissionPipeline`] driving one request lifecycle per form
//! - [`error`] types shared by the pipeline and the browser plumbing

pub mod error;
mod pipeline;
pub mod selection;

pub use pipeline::{
    BusyGuard, FormSurface, RawResponse, SubmissionPipeline, SubmitReport, Transport,
    resolve_response,
};
