//! Per-form reactive state.
//!
//! Each mounted operation form owns one [`FormState`]: its file set, busy
//! flag, extracted text and scalar fields. Nothing outside the form mutates
//! it, so forms on the same page never interfere.

use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::File;

use crate::app::AppContext;
use crate::config::DEFAULT_ROTATION;
use crate::core::error::SubmitError;
use crate::core::selection::{self, DropTarget, SelectionChange, SelectionEvent};
use crate::core::{FormSurface, SubmissionPipeline};
use crate::models::{BannerKind, BinaryArtifact, ExtraField, FileSet, FormSnapshot, OperationSpec};
use crate::utils::{HttpTransport, dom, log};

/// State and operations for one operation form.
///
/// This struct is `Copy` because all fields are Leptos signals or static
/// references.
#[derive(Clone, Copy)]
pub struct FormState {
    pub spec: &'static OperationSpec,
    /// Files chosen for this form; the native input mirrors it.
    pub files: RwSignal<FileSet<File>, LocalStorage>,
    /// The native file input backing `files`.
    pub input: NodeRef<html::Input>,
    pub drop_target: RwSignal<DropTarget>,
    pub busy: RwSignal<bool>,
    /// Text returned by a text-result operation.
    pub extracted: RwSignal<Option<String>>,
    pub pages: RwSignal<String>,
    pub angle: RwSignal<u16>,
    ctx: AppContext,
}

impl FormState {
    pub fn new(spec: &'static OperationSpec, ctx: AppContext) -> Self {
        Self {
            spec,
            files: RwSignal::new_local(FileSet::new(spec.mode)),
            input: NodeRef::new(),
            drop_target: RwSignal::new(DropTarget::default()),
            busy: RwSignal::new(false),
            extracted: RwSignal::new(None),
            pages: RwSignal::new(String::new()),
            angle: RwSignal::new(DEFAULT_ROTATION),
            ctx,
        }
    }

    /// Applies a selection event, then rebuilds the native input if needed.
    ///
    /// Both happen in the same task, before views re-render, so the list
    /// and the input never disagree on screen.
    pub fn apply(&self, event: SelectionEvent<File>) {
        let change = self.files.try_update(|set| selection::apply(set, event));
        if change == Some(SelectionChange::Changed { resync_input: true }) {
            self.sync_input();
        }
    }

    fn sync_input(&self) {
        let Some(input) = self.input.get_untracked() else {
            return;
        };
        let result = self
            .files
            .with_untracked(|set| dom::materialize_files(&input, set.files()));
        if let Err(err) = result {
            log::warn(&format!("{}: {}", self.spec.endpoint, err));
        }
    }

    /// Captures the current files and scalar fields.
    pub fn snapshot(&self) -> FormSnapshot<File> {
        let form = FormSnapshot::new(self.files.with_untracked(|set| set.snapshot()));
        match self.spec.extra {
            Some(field @ ExtraField::Pages) => {
                form.with_field(field.name(), self.pages.get_untracked())
            }
            Some(field @ ExtraField::Angle) => {
                form.with_field(field.name(), self.angle.get_untracked().to_string())
            }
            None => form,
        }
    }

    /// Starts one submission in the background.
    pub fn submit(self) {
        let form = self.snapshot();
        spawn_local(async move {
            let transport = HttpTransport;
            SubmissionPipeline::new(self.spec, &transport, &self)
                .submit(form)
                .await;
        });
    }
}

impl FormSurface for FormState {
    fn is_busy(&self) -> bool {
        self.busy.try_get_untracked().unwrap_or(false)
    }

    /// Entering busy also clears any earlier text result, so a result is
    /// never shown next to a later error.
    fn set_busy(&self, busy: bool) {
        if busy {
            self.extracted.try_set(None);
        }
        self.busy.try_set(busy);
    }

    fn announce(&self, kind: BannerKind, message: &str) {
        self.ctx.announce(kind, message);
    }

    fn show_text(&self, text: &str) {
        self.extracted.try_set(Some(text.to_string()));
    }

    fn download(&self, artifact: &BinaryArtifact) -> Result<(), SubmitError> {
        let blob = dom::bytes_to_blob(&artifact.bytes, artifact.content_type.as_deref())?;
        dom::trigger_download(&blob, &artifact.filename)?;
        Ok(())
    }
}
