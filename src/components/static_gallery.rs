//! Static Menu Gallery
//!
//! Pre-authored menu boards shown when the dynamic menu is unavailable.

use leptos::prelude::*;

use crate::context::AppContext;

/// (image path, caption)
const STATIC_MENU: &[(&str, &str)] = &[
    ("images/menu/burgers.webp", "Burgers"),
    ("images/menu/wraps.webp", "Wraps"),
    ("images/menu/chicken.webp", "Chicken & Wings"),
    ("images/menu/sides.webp", "Fries & Sides"),
    ("images/menu/deals.webp", "Meal Deals"),
    ("images/menu/drinks-desserts.webp", "Drinks & Desserts"),
];

#[component]
pub fn StaticGallery() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let webshop_url = ctx.config.with_value(|config| config.webshop_url.clone());

    view! {
        <div id="staticMenuGallery" class="static-menu-gallery">
            {STATIC_MENU.iter().map(|(src, caption)| view! {
                <figure class="static-menu-card">
                    <img src=*src alt=*caption loading="lazy" decoding="async" />
                    <figcaption>{*caption}</figcaption>
                </figure>
            }).collect_view()}
            <a class="cta-btn" href=webshop_url target="_blank" rel="noopener">
                "Order Online"
            </a>
        </div>
    }
}
