//! Menu Search & Category Filter Component
//!
//! Debounced search input with an immediate clear button, plus the "All"
//! button and one button per category (alphabetical).

use leptos::html;
use leptos::prelude::*;
use leptos::task::spawn_local;
use menu_pipeline::{CategoryFilter, Debouncer};

use crate::context::AppContext;
use crate::store::{store_category_names, store_set_category, store_set_query, use_menu_store, MenuStateStoreFields};

#[component]
pub fn MenuSearchFilter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_menu_store();

    let debouncer = Debouncer::new(ctx.config.with_value(|config| config.search_debounce()));
    let input_debouncer = debouncer.clone();
    let (input_value, set_input_value) = signal(String::new());
    let input_ref: NodeRef<html::Input> = NodeRef::new();

    let category_names = Memo::new(move |_| store_category_names(&store));

    view! {
        <div id="menuSearchFilter" class="menu-search-filter">
            <div class="menu-search-box">
                <i class="fas fa-search" aria-hidden="true"></i>
                <input
                    id="menuSearchInput"
                    type="search"
                    placeholder="Search the menu..."
                    aria-label="Search menu items"
                    autocomplete="off"
                    node_ref=input_ref
                    prop:value=move || input_value.get()
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        set_input_value.set(value.clone());
                        let fire = input_debouncer.trigger();
                        spawn_local(async move {
                            if fire.await {
                                store_set_query(&store, &value);
                            }
                        });
                    }
                />
                <Show when=move || !input_value.get().trim().is_empty()>
                    <button
                        id="clearSearch"
                        class="clear-search"
                        aria-label="Clear search"
                        on:click={
                            let debouncer = debouncer.clone();
                            move |_| {
                                debouncer.cancel();
                                set_input_value.set(String::new());
                                store_set_query(&store, "");
                                if let Some(input) = input_ref.get() {
                                    let _ = input.focus();
                                }
                            }
                        }
                    >
                        "×"
                    </button>
                </Show>
            </div>

            <div id="categoryFilterButtons" class="category-filter-buttons" role="toolbar">
                <CategoryButton name="all" label="All" />
                <For
                    each=move || category_names.get()
                    key=|name| name.clone()
                    children=move |name| view! { <CategoryButton name=name.clone() label=name /> }
                />
            </div>
        </div>
    }
}

#[component]
fn CategoryButton(#[prop(into)] name: String, #[prop(into)] label: String) -> impl IntoView {
    let store = use_menu_store();
    let filter = CategoryFilter::from_name(&name);
    let is_active = move || store.filter().read().active_category == filter;
    let aria_label = format!("Filter by {}", label);

    view! {
        <button
            class="category-filter-btn"
            class:active=is_active
            data-category=name.clone()
            aria-label=aria_label
            on:click=move |_| store_set_category(&store, &name)
        >
            <span>{label}</span>
        </button>
    }
}
