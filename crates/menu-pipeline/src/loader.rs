//! Load Orchestrator
//!
//! `Idle -> Loading -> {Ready, Failed}`. Each attempt gets a generation; a
//! settled result is only applied if its generation is still current, so a
//! response arriving after a retry cannot overwrite newer state.

use futures::future::{AbortHandle, AbortRegistration};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::LoadError;
use crate::filter::{filter, FilterState, FilteredView};
use crate::index::CategoryIndex;
use crate::model::MenuItem;
use crate::normalize::normalize;
use crate::source::MenuSource;

/// Canonical items of one successful load plus their category index
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuCatalog {
    pub items: Vec<MenuItem>,
    pub index: CategoryIndex,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        let index = CategoryIndex::build(&items);
        Self { items, index }
    }

    pub fn category_names(&self) -> Vec<String> {
        self.index.category_names()
    }

    pub fn view(&self, state: &FilterState) -> FilteredView {
        filter(&self.index, state)
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Ready,
    /// Static fallback is shown with this message and a retry control
    Failed(LoadError),
}

/// Handed out by [`MenuLoader::begin`]; pass `cancel` to the source and
/// `generation` back to [`MenuLoader::settle`]
#[derive(Debug)]
pub struct LoadTicket {
    pub generation: u64,
    pub cancel: AbortRegistration,
}

#[derive(Debug, Clone, Default)]
pub struct MenuLoader {
    generation: u64,
    phase: LoadPhase,
    catalog: Option<MenuCatalog>,
    in_flight: Option<AbortHandle>,
}

impl MenuLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fresh attempt, discarding anything cached by earlier ones
    pub fn begin(&mut self) -> LoadTicket {
        if let Some(previous) = self.in_flight.take() {
            previous.abort();
        }
        self.generation += 1;
        self.phase = LoadPhase::Loading;
        self.catalog = None;

        let (handle, cancel) = AbortHandle::new_pair();
        self.in_flight = Some(handle);
        info!(generation = self.generation, "loading menu");
        LoadTicket {
            generation: self.generation,
            cancel,
        }
    }

    /// User-triggered re-attempt; identical to a first load
    pub fn retry(&mut self) -> LoadTicket {
        self.begin()
    }

    /// Apply the outcome of attempt `generation`. Returns `false` when the
    /// outcome was stale and has been discarded.
    pub fn settle<E>(&mut self, generation: u64, outcome: Result<Value, E>) -> bool
    where
        E: Into<LoadError>,
    {
        if generation != self.generation || self.phase != LoadPhase::Loading {
            debug!(generation, current = self.generation, "discarding stale menu result");
            return false;
        }
        self.in_flight = None;

        let items = outcome
            .map_err(Into::into)
            .and_then(|raw| normalize(&raw).map_err(LoadError::from));
        match items {
            Ok(items) => {
                let catalog = MenuCatalog::new(items);
                info!(
                    items = catalog.items.len(),
                    categories = catalog.index.len(),
                    "menu loaded"
                );
                self.catalog = Some(catalog);
                self.phase = LoadPhase::Ready;
            }
            Err(err) => {
                warn!(error = %err, "menu load failed, showing static menu");
                self.phase = LoadPhase::Failed(err);
            }
        }
        true
    }

    /// Run one complete attempt against `source`
    pub async fn load(&mut self, source: &dyn MenuSource) -> &LoadPhase {
        let ticket = self.begin();
        let outcome = source.fetch_menu(ticket.cancel).await;
        self.settle(ticket.generation, outcome);
        &self.phase
    }

    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Present only in `Ready`
    pub fn catalog(&self) -> Option<&MenuCatalog> {
        self.catalog.as_ref()
    }

    pub fn error(&self) -> Option<&LoadError> {
        match &self.phase {
            LoadPhase::Failed(err) => Some(err),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{FetchError, ShapeError};
    use serde_json::json;

    #[test]
    fn test_begin_enters_loading() {
        let mut loader = MenuLoader::new();
        assert_eq!(loader.phase(), &LoadPhase::Idle);
        let ticket = loader.begin();
        assert_eq!(ticket.generation, 1);
        assert_eq!(loader.phase(), &LoadPhase::Loading);
    }

    #[test]
    fn test_success_builds_catalog() {
        let mut loader = MenuLoader::new();
        let ticket = loader.begin();
        let raw = json!({ "data": { "Burgers": [{ "title": "Cheese Burger" }], "Sides": [{ "title": "Fries" }] } });
        assert!(loader.settle(ticket.generation, Ok::<_, FetchError>(raw)));

        assert_eq!(loader.phase(), &LoadPhase::Ready);
        let catalog = loader.catalog().unwrap();
        assert_eq!(catalog.items.len(), 2);
        assert_eq!(catalog.category_names(), ["Burgers", "Sides"]);
        assert_eq!(catalog.view(&FilterState::default()).item_count(), 2);
    }

    #[test]
    fn test_empty_data_fails_with_shape_error() {
        let mut loader = MenuLoader::new();
        let ticket = loader.begin();
        loader.settle(ticket.generation, Ok::<_, FetchError>(json!({ "data": [] })));
        assert_eq!(loader.phase(), &LoadPhase::Failed(LoadError::Shape(ShapeError::NoMenuItems)));
        assert!(loader.catalog().is_none());
        assert_eq!(loader.error().unwrap().to_string(), "no menu items found");
    }

    #[test]
    fn test_stale_result_is_discarded() {
        let mut loader = MenuLoader::new();
        let first = loader.begin();
        loader.settle(first.generation, Err(FetchError::Timeout { after_ms: 10_000 }));
        assert!(matches!(loader.phase(), LoadPhase::Failed(_)));

        let second = loader.retry();
        let late = json!({ "items": [{ "name": "Late Burger" }] });
        assert!(!loader.settle(first.generation, Ok::<_, FetchError>(late)));
        assert_eq!(loader.phase(), &LoadPhase::Loading);

        let fresh = json!({ "items": [{ "name": "Fresh Burger" }] });
        assert!(loader.settle(second.generation, Ok::<_, FetchError>(fresh)));
        assert_eq!(loader.catalog().unwrap().items[0].name, "Fresh Burger");

        // already settled
        assert!(!loader.settle(second.generation, Err(FetchError::Network { message: "late".into() })));
        assert_eq!(loader.phase(), &LoadPhase::Ready);
    }

    #[test]
    fn test_retry_discards_cached_catalog() {
        let mut loader = MenuLoader::new();
        let ticket = loader.begin();
        loader.settle(ticket.generation, Ok::<_, FetchError>(json!([{ "name": "Cola" }])));
        assert!(loader.catalog().is_some());

        loader.retry();
        assert!(loader.catalog().is_none());
        assert_eq!(loader.generation(), 2);
    }
}
