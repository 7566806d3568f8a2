//! Menu Page State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The loader and
//! the filter are separate fields, so typing a query never re-renders the
//! load status.

use leptos::prelude::*;
use menu_pipeline::{FilterState, FilteredView, MenuLoader};
use reactive_stores::Store;

/// Page-wide menu state, owned by the menu page for one page view
#[derive(Clone, Debug, Default, Store)]
pub struct MenuState {
    /// Load state machine and the cached catalog of the last good load
    pub loader: MenuLoader,
    /// Active category and search query
    pub filter: FilterState,
}

/// Type alias for the store
pub type MenuStore = Store<MenuState>;

/// Get the menu store from context
pub fn use_menu_store() -> MenuStore {
    expect_context::<MenuStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Visible items for the current filter; `None` until a load succeeded
pub fn store_filtered_view(store: &MenuStore) -> Option<FilteredView> {
    let loader = store.loader().read();
    let filter = store.filter().read();
    loader.catalog().map(|catalog| catalog.view(&filter))
}

/// Sorted category names for the filter buttons
pub fn store_category_names(store: &MenuStore) -> Vec<String> {
    store
        .loader()
        .read()
        .catalog()
        .map(|catalog| catalog.category_names())
        .unwrap_or_default()
}

pub fn store_set_category(store: &MenuStore, category: &str) {
    store.filter().write().set_category(category);
}

pub fn store_set_query(store: &MenuStore, query: &str) {
    store.filter().write().set_query(query);
}
