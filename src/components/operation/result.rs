//! Extracted text result block.

use leptos::prelude::*;
use leptos_icons::Icon;

use super::state::FormState;
use crate::components::icons as ic;
use crate::config::dom_ids;

stylance::import_crate_style!(css, "src/components/operation/operation.module.css");

/// Shows the text returned by a text-result operation.
///
/// The text is rendered as a text node, so markup in it is displayed
/// literally rather than interpreted.
#[component]
pub fn ExtractedText(state: FormState) -> impl IntoView {
    view! {
        <Show when=move || state.extracted.with(Option::is_some)>
            <div id=dom_ids::RESULT_CONTAINER class=css::result>
                <h3 class=css::resultTitle>
                    <Icon icon=ic::SUCCESS />
                    " Extracted Text"
                </h3>
                <div class=format!("{} result-text", css::resultText)>
                    {move || state.extracted.get().unwrap_or_default()}
                </div>
            </div>
        </Show>
    }
}
