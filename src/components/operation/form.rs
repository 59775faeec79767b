//! Operation form component.
//!
//! One component serves all seven operations; everything that differs
//! comes from the operation's [`OperationSpec`](crate::models::OperationSpec).

use leptos::prelude::*;
use leptos_icons::Icon;

use super::drop_zone::DropZone;
use super::fields::ExtraFields;
use super::file_list::{FileInfo, FileList};
use super::result::ExtractedText;
use super::state::FormState;
use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{BUSY_OPACITY, IDLE_OPACITY, dom_ids};
use crate::models::{AppRoute, Operation, SelectionMode};

stylance::import_crate_style!(css, "src/components/operation/operation.module.css");

/// Form for a single operation.
///
/// # Props
/// - `operation`: Which server operation this form submits to
#[component]
pub fn OperationForm(operation: Operation) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let state = FormState::new(operation.spec(), ctx);
    let spec = state.spec;
    let busy = state.busy;

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        state.submit();
    };

    let selection_view = match spec.mode {
        SelectionMode::Multi => view! { <FileList state=state /> }.into_any(),
        SelectionMode::Single => view! { <FileInfo state=state /> }.into_any(),
    };

    view! {
        <section class=css::panel>
            <a class=css::back href=AppRoute::Home.to_hash()>
                <Icon icon=ic::CHEVRON_LEFT />
                " All tools"
            </a>
            <h2 class=css::title>
                <Icon icon=ic::operation(operation) />
                " "
                {spec.title}
            </h2>
            <p class=css::description>{spec.description}</p>

            <form class=css::form on:submit=on_submit>
                <DropZone state=state />
                {selection_view}
                <ExtraFields state=state />

                <button
                    type="submit"
                    class=format!("{} submit-button", css::submit)
                    disabled=move || busy.get()
                    style:opacity=move || if busy.get() { BUSY_OPACITY } else { IDLE_OPACITY }
                >
                    {spec.title}
                </button>

                <div
                    id=dom_ids::LOADING
                    class=css::loading
                    style:display=move || if busy.get() { "block" } else { "none" }
                >
                    <span class=css::spinner aria-hidden="true"></span>
                    "Processing..."
                </div>
            </form>

            <ExtractedText state=state />
        </section>
    }
}
