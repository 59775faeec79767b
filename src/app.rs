//! Root application module.
//!
//! Contains the main App component, the AppContext definition, and the
//! page-wide notification logic.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::components::AppRouter;
use crate::config::BANNER_TIMEOUT_MS;
use crate::models::{Banner, BannerKind, BannerStack};

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`. Each operation form owns its own state;
/// only the message region is shared, so banners from different forms may
/// coexist.
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Banners shown in the message region, newest first.
    pub banners: RwSignal<BannerStack>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            banners: RwSignal::new(BannerStack::new()),
        }
    }

    /// Shows a banner at the top of the message region and schedules its
    /// removal after [`BANNER_TIMEOUT_MS`].
    ///
    /// Earlier banners keep their own timers; nothing is cancelled or merged.
    pub fn announce(&self, kind: BannerKind, message: &str) {
        let banner = Banner::new(kind, message);
        let id = banner.id;
        self.banners.update(|stack| {
            stack.push(banner);
        });

        let banners = self.banners;
        spawn_local(async move {
            TimeoutFuture::new(BANNER_TIMEOUT_MS).await;
            banners.update(|stack| stack.dismiss(id));
        });
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, then renders the router.
#[component]
pub fn App() -> impl IntoView {
    provide_context(AppContext::new());

    view! { <AppRouter /> }
}
