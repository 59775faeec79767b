//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name displayed in the page header.
pub const APP_NAME: &str = "PDF Tools";

/// Tagline displayed on the home screen.
pub const APP_TAGLINE: &str = "Merge, split, rotate and convert your documents in the browser.";

// =============================================================================
// Feedback Configuration
// =============================================================================

/// Lifetime of a success/error banner in milliseconds.
pub const BANNER_TIMEOUT_MS: u32 = 5000;

/// Submit button opacity while a request is in flight.
pub const BUSY_OPACITY: &str = "0.6";

/// Submit button opacity when idle.
pub const IDLE_OPACITY: &str = "1";

// =============================================================================
// File Display Configuration
// =============================================================================

/// Label shown when the browser reports no media type for a file.
pub const DEFAULT_MEDIA_TYPE: &str = "application/pdf";

/// Unit names for human-readable sizes, in powers of 1024.
pub const SIZE_UNITS: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Rendered size for an empty file.
pub const ZERO_SIZE_LABEL: &str = "0 Bytes";

// =============================================================================
// Form Field Configuration
// =============================================================================

/// Rotation angles offered by the rotate form.
pub const ROTATION_ANGLES: &[u16] = &[90, 180, 270];

/// Default rotation angle.
pub const DEFAULT_ROTATION: u16 = 90;

/// Placeholder for the page range input.
pub const PAGES_PLACEHOLDER: &str = "1,3,5-7";

// =============================================================================
// DOM Contract
// =============================================================================

/// Element ids the forms render and the stylesheet targets.
pub mod dom_ids {
    /// Root mount point.
    pub const APP_ROOT: &str = "app";
    /// Removable file list for multi-file forms.
    pub const FILE_LIST: &str = "fileList";
    /// Single file summary.
    pub const FILE_INFO: &str = "fileInfo";
    /// Loading indicator.
    pub const LOADING: &str = "loading";
    /// Extracted text result container.
    pub const RESULT_CONTAINER: &str = "resultContainer";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
