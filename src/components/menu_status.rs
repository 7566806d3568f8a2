//! Menu Status Components
//!
//! Loading indicator and the failure banner with its retry control.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn MenuLoading() -> impl IntoView {
    view! {
        <div id="menuLoading" class="menu-loading" aria-live="polite">
            <i class="fas fa-spinner fa-spin" aria-hidden="true"></i>
            <p>"Loading menu..."</p>
        </div>
    }
}

/// Shown above the static gallery whenever the dynamic menu failed
#[component]
pub fn MenuError(#[prop(into)] message: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <div id="menuError" class="menu-error" role="alert">
            <i class="fas fa-exclamation-triangle" aria-hidden="true"></i>
            <p>"Unable to load menu from API. Showing static menu."</p>
            <p class="menu-error-detail">"Error: " {message}</p>
            <button class="cta-btn" on:click=move |_| ctx.retry()>
                "Retry"
            </button>
        </div>
    }
}
