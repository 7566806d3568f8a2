//! UI Components
//!
//! Leptos components rendering the menu pipeline's output.

mod menu_listing;
mod menu_page;
mod menu_search_filter;
mod menu_status;
mod static_gallery;

pub use menu_listing::{MenuItemCard, MenuListing, MenuSection};
pub use menu_page::MenuPage;
pub use menu_search_filter::MenuSearchFilter;
pub use menu_status::{MenuError, MenuLoading};
pub use static_gallery::StaticGallery;
