//! Utility modules for web, DOM, and formatting operations.
//!
//! Provides:
//! - [`HttpTransport`] - Multipart operation requests over the Fetch API
//! - [`dom`] - Window, file input and download helpers
//! - [`format`] - Human-readable file sizes
//! - [`log`] - Browser console logging

pub mod dom;
mod fetch;
pub mod format;
pub mod log;

pub use fetch::HttpTransport;
