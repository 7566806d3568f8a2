//! Application Context
//!
//! Shared configuration and the retry trigger, provided via Leptos Context API.

use leptos::prelude::*;
use menu_pipeline::MenuConfig;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Bumped to (re)load the menu from the API - read
    pub reload_trigger: ReadSignal<u32>,
    /// Bumped to (re)load the menu from the API - write
    set_reload_trigger: WriteSignal<u32>,
    /// Static endpoint and timing configuration
    pub config: StoredValue<MenuConfig>,
}

impl AppContext {
    pub fn new(reload_trigger: (ReadSignal<u32>, WriteSignal<u32>), config: MenuConfig) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            config: StoredValue::new(config),
        }
    }

    /// Re-attempt the menu load after a failure
    pub fn retry(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }
}
