//! Static Delivergate webshop configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Endpoint, tenant and timing settings for the menu page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuConfig {
    pub base_url: String,
    /// Main menu category id (must be non-zero)
    pub category_id: u32,
    pub webshop_brand: u32,
    pub shop: u32,
    /// Sent as `x-tenant-code`
    pub tenant_code: String,
    pub origin: String,
    pub referer: String,
    pub timeout_ms: u64,
    pub search_debounce_ms: u64,
    /// Public ordering page linked from the menu
    pub webshop_url: String,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            base_url: "https://pos.delivergate.com/api/v1/webshop".to_string(),
            category_id: 1,
            webshop_brand: 1,
            shop: 1,
            tenant_code: "grabordine".to_string(),
            origin: "https://order.grabordine.co.uk".to_string(),
            referer: "https://order.grabordine.co.uk/".to_string(),
            timeout_ms: 10_000,
            search_debounce_ms: 300,
            webshop_url: "https://order.grabordine.co.uk/food-menu".to_string(),
        }
    }
}

impl MenuConfig {
    pub fn menu_url(&self) -> Result<String, ConfigError> {
        if self.category_id == 0 {
            return Err(ConfigError::MissingCategory);
        }
        Ok(format!(
            "{}/main-menu/{}/categories/webshop-brand/{}/shop/{}",
            self.base_url.trim_end_matches('/'),
            self.category_id,
            self.webshop_brand,
            self.shop
        ))
    }

    pub fn categories_url(&self) -> String {
        format!(
            "{}/categories/webshop-brand/{}/shop/{}",
            self.base_url.trim_end_matches('/'),
            self.webshop_brand,
            self.shop
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}
