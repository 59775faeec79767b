//! Operation form and its parts.
//!
//! - [`OperationForm`] - Form shell wired to the submission pipeline
//! - [`FormState`] - Per-form signals; implements the pipeline's surface
//! - Drop zone, file list / file info, extra fields, extracted text

mod drop_zone;
mod fields;
mod file_list;
mod form;
mod result;
mod state;

pub use form::OperationForm;
pub use state::FormState;
