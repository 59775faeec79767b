//! Tool grid shown at `#/`.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;
use crate::models::{AppRoute, Operation};

stylance::import_crate_style!(css, "src/components/home.module.css");

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <nav class=css::grid aria-label="Tools">
            {Operation::ALL
                .into_iter()
                .map(|op| view! { <ToolCard operation=op /> })
                .collect_view()}
        </nav>
    }
}

#[component]
fn ToolCard(operation: Operation) -> impl IntoView {
    let spec = operation.spec();

    view! {
        <a class=css::card href=AppRoute::Tool(operation).to_hash()>
            <span class=css::icon aria-hidden="true"><Icon icon=ic::operation(operation) /></span>
            <span class=css::title>{spec.title}</span>
            <span class=css::description>{spec.description}</span>
        </a>
    }
}
