//! Menu Listing Components
//!
//! Renders the filtered view: one section per category, one card per item.

use leptos::prelude::*;
use menu_pipeline::{CategorySection, MenuItem};

use crate::format::{category_anchor, category_icon, format_price};
use crate::store::{store_filtered_view, use_menu_store};

#[component]
pub fn MenuListing() -> impl IntoView {
    let store = use_menu_store();
    let view_memo = Memo::new(move |_| store_filtered_view(&store).unwrap_or_default());

    view! {
        <Show
            when=move || !view_memo.with(|view| view.is_empty())
            fallback=|| view! {
                <div class="menu-no-results">
                    <i class="fas fa-search" aria-hidden="true"></i>
                    <p>"No items found matching your search."</p>
                </div>
            }
        >
            <div id="dynamicMenuContainer" class="dynamic-menu-container">
                {move || view_memo.get().sections.into_iter()
                    .map(|section| view! { <MenuSection section=section /> })
                    .collect_view()}
            </div>
        </Show>
    }
}

#[component]
pub fn MenuSection(section: CategorySection) -> impl IntoView {
    let CategorySection { name, items } = section;
    let icon = category_icon(&name);
    let anchor = category_anchor(&name);

    view! {
        <section class="menu-category-section" data-category=name.clone()>
            <h2 id=anchor class="menu-category-title">
                <i class=format!("fas {}", icon) aria-hidden="true"></i>
                {name.clone()}
            </h2>
            <div class="menu-items-grid">
                {items.into_iter()
                    .map(|item| view! { <MenuItemCard item=item icon=icon label=name.clone() /> })
                    .collect_view()}
            </div>
        </section>
    }
}

/// A single item; falls back to the category icon when the image is
/// missing or fails to load
#[component]
pub fn MenuItemCard(
    item: MenuItem,
    icon: &'static str,
    #[prop(into)] label: String,
) -> impl IntoView {
    let MenuItem { id, name, description, price, image, .. } = item;
    let (image_failed, set_image_failed) = signal(false);
    let has_image = !image.trim().is_empty();
    let item_id = id.map(|id| id.to_string()).unwrap_or_default();
    let price = format_price(&price);
    let alt = name.clone();

    view! {
        <article class="menu-item-card" data-item-id=item_id>
            <div class="menu-item-image">
                <Show
                    when=move || has_image && !image_failed.get()
                    fallback=move || view! {
                        <div class="menu-item-placeholder">
                            <i class=format!("fas {}", icon) aria-hidden="true"></i>
                        </div>
                    }
                >
                    <img
                        src=image.clone()
                        alt=alt.clone()
                        loading="lazy"
                        on:error=move |_| set_image_failed.set(true)
                    />
                </Show>
            </div>
            <div class="menu-item-body">
                <span class="menu-item-category">{label.to_uppercase()}</span>
                <h3 class="menu-item-name">{name}</h3>
                {(!description.is_empty()).then(|| view! {
                    <p class="menu-item-description">{description}</p>
                })}
                {price.map(|price| view! { <span class="menu-item-price">{price}</span> })}
            </div>
        </article>
    }
}
