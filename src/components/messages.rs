//! Message region component.
//!
//! Renders the shared banner stack newest first. Removal is driven by the
//! timers scheduled in [`AppContext::announce`].

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::{Banner, BannerKind};

stylance::import_crate_style!(css, "src/components/messages.module.css");

#[component]
pub fn MessageRegion() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    view! {
        <div class=css::region role="status" aria-live="polite">
            <For
                each=move || ctx.banners.with(|stack| stack.iter().cloned().collect::<Vec<_>>())
                key=|banner| banner.id
                children=move |banner| view! { <BannerItem banner=banner /> }
            />
        </div>
    }
}

#[component]
fn BannerItem(banner: Banner) -> impl IntoView {
    let class = match banner.kind {
        BannerKind::Success => format!("{} success-message", css::success),
        BannerKind::Error => format!("{} error-message", css::error),
    };

    view! {
        <div class=class>
            <Icon icon=ic::banner(banner.kind) />
            " "
            {banner.message}
        </div>
    }
}
