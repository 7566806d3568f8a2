//! Grab Or Dine Menu App
//!
//! Owns the menu store and runs the menu load on mount and on every retry.

use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_pipeline::{FilterState, HttpMenuSource, LoadError, MenuConfig, MenuSource};
use reactive_stores::Store;
use tracing::info;

use crate::components::MenuPage;
use crate::context::AppContext;
use crate::store::{MenuState, MenuStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    // State
    let store = Store::new(MenuState::default());
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    provide_context(store);
    let ctx = AppContext::new((reload_trigger, set_reload_trigger), MenuConfig::default());
    provide_context(ctx);

    // Load menu on mount and whenever Retry bumps the trigger
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let ticket = store.loader().write().begin();
        let config = ctx.config.get_value();
        info!("[APP] Loading menu, trigger={}, generation={}", trigger, ticket.generation);

        spawn_local(async move {
            let outcome = match HttpMenuSource::new(config) {
                Ok(source) => source.fetch_menu(ticket.cancel).await.map_err(LoadError::from),
                Err(err) => Err(LoadError::from(err)),
            };
            // A stale attempt leaves the current state (and filter) untouched
            if store.loader().write().settle(ticket.generation, outcome) {
                store.filter().set(FilterState::default());
            }
        });
    });

    view! {
        <main class="menu-main">
            <MenuPage />
        </main>
    }
}
