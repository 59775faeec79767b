//! Selection transitions.
//!
//! Normalizes the three ways a selection changes (native picker, drop,
//! removal) into [`FileSet`] mutations. Each UI event maps to exactly one
//! call of [`apply`]; the caller then re-materializes the native input and
//! lets the views re-render from the set.

use crate::models::{FileSet, SelectedFile};

/// A selection change coming from the page.
#[derive(Debug)]
pub enum SelectionEvent<H> {
    /// The native picker fired `change` with a fresh batch.
    Picked(Vec<SelectedFile<H>>),
    /// Files were dropped on the drop target.
    Dropped(Vec<SelectedFile<H>>),
    /// The removal control of the row at this index was pressed.
    Removed(usize),
}

/// Result of applying an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectionChange {
    /// The set changed; the native input must be rebuilt from it.
    Changed { resync_input: bool },
    /// Nothing happened.
    Unchanged,
}

/// Applies one event to the set.
///
/// A picker change already holds the new files in the native input, so it
/// only needs rebuilding when the set kept fewer files than were picked.
pub fn apply<H>(set: &mut FileSet<H>, event: SelectionEvent<H>) -> SelectionChange {
    match event {
        SelectionEvent::Picked(files) => {
            let picked = files.len();
            set.set_from_source(files);
            SelectionChange::Changed {
                resync_input: set.current_count() != picked,
            }
        }
        SelectionEvent::Dropped(files) => {
            set.set_from_source(files);
            SelectionChange::Changed { resync_input: true }
        }
        SelectionEvent::Removed(index) => {
            if set.remove_at(index) {
                SelectionChange::Changed { resync_input: true }
            } else {
                SelectionChange::Unchanged
            }
        }
    }
}

/// Visual state of a drop target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropTarget {
    active: bool,
}

impl DropTarget {
    /// A drag is hovering over the target.
    pub fn drag_over(&mut self) {
        self.active = true;
    }

    /// The drag left without dropping.
    pub fn drag_leave(&mut self) {
        self.active = false;
    }

    /// Files were dropped; the mark is cleared before they are applied.
    pub fn drop_files(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}
