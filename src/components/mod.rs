//! UI components built with Leptos.
//!
//! - [`router`] - Application routing (main entry point)
//! - [`home`] - Tool grid
//! - [`operation`] - Operation forms (selection, submission, results)
//! - [`messages`] - Success/error banner region
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod home;
pub mod icons;
pub mod messages;
pub mod operation;
pub mod router;

pub use router::AppRouter;
