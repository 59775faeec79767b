//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`SelectedFile`], [`FileSet`], [`SelectionMode`] - Files chosen for one form
//! - [`Operation`], [`OperationSpec`] - The static table of server operations
//! - [`OperationRequest`], [`OperationOutcome`] - One submission's request and result
//! - [`Banner`], [`BannerStack`] - Transient notifications
//! - [`AppRoute`] - Hash-based navigation

mod banner;
mod file;
mod operation;
mod route;

pub use banner::{Banner, BannerKind, BannerStack};
pub use file::{FileRow, FileSet, FileSummary, SelectedFile, SelectionMode};
pub use operation::{
    BinaryArtifact, ExtraField, FormSnapshot, Operation, OperationOutcome, OperationRequest,
    OperationSpec, ResponseKind, Validation,
};
pub use route::AppRoute;
