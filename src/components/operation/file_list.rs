//! Selection views.
//!
//! Multi-file forms show a removable list; single-file forms show a summary.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::state::FormState;
use crate::components::icons as ic;
use crate::config::dom_ids;
use crate::core::selection::SelectionEvent;
use crate::models::{FileRow, Operation};

stylance::import_crate_style!(css, "src/components/operation/operation.module.css");

fn file_icon(operation: Operation) -> icondata::Icon {
    match operation {
        Operation::ImagesToPdf => ic::FILE_IMAGE,
        _ => ic::FILE_PDF,
    }
}

/// Removable list of the form's files.
///
/// Rows are keyed by position and contents, so every row after a removal is
/// rebuilt with its new index.
#[component]
pub fn FileList(state: FormState) -> impl IntoView {
    view! {
        <div id=dom_ids::FILE_LIST class=css::fileList>
            <For
                each=move || state.files.with(|set| set.rows())
                key=FileRow::key
                children=move |row| view! { <FileListItem row=row state=state /> }
            />
        </div>
    }
}

#[component]
fn FileListItem(row: FileRow, state: FormState) -> impl IntoView {
    let index = row.index;

    // Bound to this form's set, not to whichever input the page finds first.
    let on_remove = move |_: leptos::ev::MouseEvent| {
        state.apply(SelectionEvent::Removed(index));
    };

    view! {
        <div class=format!("{} file-item", css::fileItem)>
            <div class=css::fileItemInfo>
                <span class=css::fileIcon aria-hidden="true">
                    <Icon icon=file_icon(state.spec.operation) />
                </span>
                <div>
                    <div class=css::fileName>{row.name}</div>
                    <div class=css::fileSize>{row.size}</div>
                </div>
            </div>
            <button
                type="button"
                class=format!("{} file-item-remove", css::removeButton)
                on:click=on_remove
            >
                <Icon icon=ic::CLOSE />
                " Remove"
            </button>
        </div>
    }
}

/// Summary of a single-file form's file; empty when nothing is selected.
#[component]
pub fn FileInfo(state: FormState) -> impl IntoView {
    view! {
        <div id=dom_ids::FILE_INFO class=css::fileInfo>
            {move || {
                state.files.with(|set| set.summary()).map(|summary| {
                    view! {
                        <p><strong>"File: "</strong>{summary.name}</p>
                        <p><strong>"Size: "</strong>{summary.size}</p>
                        <p><strong>"Type: "</strong>{summary.media_type}</p>
                    }
                })
            }}
        </div>
    }
}
