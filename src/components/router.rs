//! Application router component.
//!
//! Handles URL-based routing with hash history.
//! Uses native hashchange events instead of leptos_router for true hash routing.
//!
//! # Architecture
//!
//! - **URL hash is the source of truth**: `#/` shows the tool grid, `#/<slug>` a tool
//! - **Page chrome never re-renders on navigation**: header and message region stay mounted
//! - **Each tool visit gets fresh form state**: the form is rebuilt when the route changes

use leptos::prelude::*;
use leptos_icons::Icon;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::Closure;

use crate::components::home::Home;
use crate::components::icons as ic;
use crate::components::messages::MessageRegion;
use crate::components::operation::OperationForm;
use crate::config::{APP_NAME, APP_TAGLINE};
use crate::models::AppRoute;

stylance::import_crate_style!(css, "src/components/router.module.css");

/// Main application router.
///
/// Sets up hash-based routing with the following structure:
/// - `#/` → Tool grid
/// - `#/merge`, `#/split`, ... → Operation form
#[component]
pub fn AppRouter() -> impl IntoView {
    // Create route signal from current URL hash
    let route = RwSignal::new(AppRoute::current());

    // Set up hashchange event listener (runs once on mount)
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;
        let closure = Closure::wrap(Box::new(move || {
            route.set(AppRoute::current());
        }) as Box<dyn Fn()>);

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("hashchange", closure.as_ref().unchecked_ref());
        }

        // Keep the closure alive for the lifetime of the app
        closure.forget();
    }

    let route_memo = Memo::new(move |_| route.get());

    view! {
        <div class=css::page>
            <header class=css::header>
                <a class=css::brand href=AppRoute::Home.to_hash()>
                    <Icon icon=ic::FILE_PDF />
                    <span>{APP_NAME}</span>
                </a>
                <span class=css::tagline>{APP_TAGLINE}</span>
            </header>

            <main class=format!("{} form-container", css::container)>
                <MessageRegion />
                {move || match route_memo.get() {
                    AppRoute::Home => view! { <Home /> }.into_any(),
                    AppRoute::Tool(operation) => {
                        view! { <OperationForm operation=operation /> }.into_any()
                    }
                }}
            </main>
        </div>
    }
}
