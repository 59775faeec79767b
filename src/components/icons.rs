//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::{BannerKind, Operation};

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuFile as FilePdf, LuChevronLeft as ChevronLeft, LuCircleAlert as Error,
        LuCircleCheck as Success, LuFileText as FileText, LuFiles as Merge,
        LuImage as FileImage, LuList as ExtractPages, LuRotateCw as Rotate,
        LuScissors as Split, LuShrink as Compress, LuUpload as Upload, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsArrowClockwise as Rotate, BsArrowsCollapse as Compress, BsChevronLeft as ChevronLeft,
        BsCheckCircleFill as Success, BsCloudArrowUp as Upload,
        BsExclamationCircleFill as Error, BsFileEarmarkImage as FileImage,
        BsFileEarmarkPdf as FilePdf, BsFileEarmarkText as FileText, BsFiles as Merge,
        BsListUl as ExtractPages, BsScissors as Split, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CLOSE, Close);
themed_icon!(UPLOAD, Upload);
themed_icon!(FILE_PDF, FilePdf);
themed_icon!(FILE_TEXT, FileText);
themed_icon!(FILE_IMAGE, FileImage);
themed_icon!(SUCCESS, Success);
themed_icon!(ERROR, Error);
themed_icon!(MERGE, Merge);
themed_icon!(SPLIT, Split);
themed_icon!(ROTATE, Rotate);
themed_icon!(COMPRESS, Compress);
themed_icon!(EXTRACT_PAGES, ExtractPages);

/// Icon for an operation's tool card and form header.
pub fn operation(op: Operation) -> Icon {
    match op {
        Operation::Merge => MERGE,
        Operation::Split => SPLIT,
        Operation::ExtractText => FILE_TEXT,
        Operation::Rotate => ROTATE,
        Operation::Compress => COMPRESS,
        Operation::ExtractPages => EXTRACT_PAGES,
        Operation::ImagesToPdf => FILE_IMAGE,
    }
}

/// Icon for a banner.
pub fn banner(kind: BannerKind) -> Icon {
    match kind {
        BannerKind::Success => SUCCESS,
        BannerKind::Error => ERROR,
    }
}
