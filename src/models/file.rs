//! Selected file types backing one file input.

use crate::config::DEFAULT_MEDIA_TYPE;
use crate::utils::format::format_size;

/// Whether a file input accepts one file or many.
///
/// Fixed when the [`FileSet`] is created; governs which view renders the
/// selection and whether rows can be removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionMode {
    Single,
    Multi,
}

impl SelectionMode {
    pub fn is_multi(self) -> bool {
        matches!(self, Self::Multi)
    }
}

/// Metadata for one picked file plus the browser handle used to upload it.
///
/// The handle is opaque to everything except the HTTP transport; tests use
/// `()` or small markers in its place.
#[derive(Clone, Debug, PartialEq)]
pub struct SelectedFile<H = ()> {
    pub name: String,
    pub size_bytes: u64,
    /// Media type as reported by the browser; may be empty.
    pub media_type: String,
    pub handle: H,
}

impl SelectedFile<()> {
    /// Metadata-only file, used where no upload handle exists.
    pub fn detached(name: impl Into<String>, size_bytes: u64, media_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size_bytes,
            media_type: media_type.into(),
            handle: (),
        }
    }
}

impl<H> SelectedFile<H> {
    /// Media type for display, falling back to the default label.
    pub fn display_media_type(&self) -> &str {
        if self.media_type.is_empty() {
            DEFAULT_MEDIA_TYPE
        } else {
            &self.media_type
        }
    }
}

/// One row of the removable list view.
///
/// `index` is the row's position at render time and is recomputed on every
/// render, since removal shifts everything after it.
#[derive(Clone, Debug, PartialEq)]
pub struct FileRow {
    pub index: usize,
    pub name: String,
    pub size: String,
}

impl FileRow {
    /// Identity for keyed rendering. Covers everything the row shows, so a
    /// row is rebuilt whenever its position or contents change.
    pub fn key(&self) -> (usize, String, String) {
        (self.index, self.name.clone(), self.size.clone())
    }
}

/// Single-file summary view.
#[derive(Clone, Debug, PartialEq)]
pub struct FileSummary {
    pub name: String,
    pub size: String,
    pub media_type: String,
}

impl<H> From<&SelectedFile<H>> for FileSummary {
    fn from(file: &SelectedFile<H>) -> Self {
        Self {
            name: file.name.clone(),
            size: format_size(file.size_bytes),
            media_type: file.display_media_type().to_string(),
        }
    }
}

/// Ordered files currently chosen for one form.
///
/// The set is the single source of truth for a form's selection. The native
/// input it backs is rebuilt from it after every mutation.
#[derive(Clone, Debug)]
pub struct FileSet<H = ()> {
    mode: SelectionMode,
    files: Vec<SelectedFile<H>>,
}

impl<H> FileSet<H> {
    /// Creates an empty set in the given mode.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            files: Vec::new(),
        }
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Replaces the whole selection with a fresh batch.
    ///
    /// A new pick never appends to the previous one. In single mode only the
    /// first file of the batch is kept, matching what a single-file input
    /// can hold.
    pub fn set_from_source(&mut self, files: Vec<SelectedFile<H>>) {
        self.files = files;
        if !self.mode.is_multi() {
            self.files.truncate(1);
        }
    }

    /// Removes the file at `index`, keeping survivors in their order.
    ///
    /// Returns `false` without touching the set when the index is out of
    /// bounds or the set is in single mode.
    pub fn remove_at(&mut self, index: usize) -> bool {
        if !self.mode.is_multi() || index >= self.files.len() {
            return false;
        }
        self.files.remove(index);
        true
    }

    /// Number of files currently selected.
    pub fn current_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn files(&self) -> &[SelectedFile<H>] {
        &self.files
    }

    pub fn first(&self) -> Option<&SelectedFile<H>> {
        self.files.first()
    }

    /// Rows for the removable list view, indexed by current position.
    pub fn rows(&self) -> Vec<FileRow> {
        self.files
            .iter()
            .enumerate()
            .map(|(index, file)| FileRow {
                index,
                name: file.name.clone(),
                size: format_size(file.size_bytes),
            })
            .collect()
    }

    /// Summary for the single-file view; `None` clears it.
    pub fn summary(&self) -> Option<FileSummary> {
        self.first().map(FileSummary::from)
    }
}

impl<H: Clone> FileSet<H> {
    /// Owned copy of the selection, taken when a submission starts.
    pub fn snapshot(&self) -> Vec<SelectedFile<H>> {
        self.files.clone()
    }
}
