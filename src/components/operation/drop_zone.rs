//! Drop target wrapping a form's native file input.
//!
//! Picker changes and drops both replace the selection. Clicking anywhere
//! on the target opens the picker, except on the input or its label, which
//! open it natively.

use leptos::ev::{DragEvent, Event, MouseEvent};
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen::JsCast;

use super::state::FormState;
use crate::components::icons as ic;
use crate::core::selection::SelectionEvent;
use crate::models::SelectionMode;
use crate::utils::dom;

stylance::import_crate_style!(css, "src/components/operation/operation.module.css");

/// True unless the click landed on the input itself or a label.
fn opens_picker(ev: &MouseEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .is_none_or(|el| !matches!(el.tag_name().as_str(), "INPUT" | "LABEL"))
}

#[component]
pub fn DropZone(state: FormState) -> impl IntoView {
    let spec = state.spec;
    let input = state.input;
    let input_id = format!("{}-input", spec.endpoint.trim_start_matches('/'));
    let is_multi = spec.mode.is_multi();

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        state.drop_target.update(|t| t.drag_over());
    };

    let on_dragleave = move |_: DragEvent| {
        state.drop_target.update(|t| t.drag_leave());
    };

    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        state.drop_target.update(|t| t.drop_files());
        let files = dom::selected_files(ev.data_transfer().and_then(|dt| dt.files()));
        state.apply(SelectionEvent::Dropped(files));
    };

    let on_change = move |_: Event| {
        if let Some(el) = input.get_untracked() {
            state.apply(SelectionEvent::Picked(dom::selected_files(el.files())));
        }
    };

    let on_click = move |ev: MouseEvent| {
        if opens_picker(&ev)
            && let Some(el) = input.get_untracked()
        {
            el.click();
        }
    };

    let zone_class = move || {
        if state.drop_target.with(|t| t.is_active()) {
            format!("{} {} file-upload-area dragover", css::dropZone, css::dragover)
        } else {
            format!("{} file-upload-area", css::dropZone)
        }
    };

    let prompt = match spec.mode {
        SelectionMode::Multi => "Drag & drop files here or ",
        SelectionMode::Single => "Drag & drop a file here or ",
    };

    view! {
        <div
            class=zone_class
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop
            on:click=on_click
        >
            <input
                type="file"
                id=input_id.clone()
                class=css::fileInput
                name=spec.file_field
                accept=spec.accept
                multiple=is_multi
                node_ref=input
                on:change=on_change
            />
            <span class=css::uploadIcon aria-hidden="true"><Icon icon=ic::UPLOAD /></span>
            <p class=css::prompt>
                {prompt}
                <label for=input_id class=css::browse>"browse"</label>
            </p>
            <p class=css::hint>"Accepted: " {spec.accept}</p>
        </div>
    }
}
