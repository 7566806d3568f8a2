//! Menu Page Component
//!
//! Switches between loading, dynamic menu and static fallback.

use leptos::prelude::*;
use menu_pipeline::LoadPhase;

use crate::components::{MenuError, MenuListing, MenuLoading, MenuSearchFilter, StaticGallery};
use crate::store::{use_menu_store, MenuStateStoreFields};

#[component]
pub fn MenuPage() -> impl IntoView {
    let store = use_menu_store();
    // Only tracks the loader, so filtering does not rebuild this subtree
    let phase = move || store.loader().read().phase().clone();

    view! {
        <section class="menu-page">
            {move || match phase() {
                LoadPhase::Idle | LoadPhase::Loading => view! { <MenuLoading /> }.into_any(),
                LoadPhase::Ready => view! {
                    <MenuSearchFilter />
                    <MenuListing />
                }.into_any(),
                LoadPhase::Failed(err) => view! {
                    <MenuError message=err.to_string() />
                    <StaticGallery />
                }.into_any(),
            }}
        </section>
    }
}
