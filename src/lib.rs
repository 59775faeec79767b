//! Browser front end for a set of server-side PDF tools.
//!
//! Users pick or drop files, submit them to one of the server operations,
//! and get back a download or extracted text with transient feedback.
//!
//! - [`models`] - Files, operations, banners and routes
//! - [`core`] - Selection transitions and the submission pipeline
//! - [`utils`] - DOM, HTTP, formatting and logging helpers
//! - [`components`] - Leptos views

pub mod app;
pub mod components;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;
