//! Menu Pipeline
//!
//! Acquisition, normalization, indexing and filtering of the Delivergate
//! webshop menu. Layered leaf-first:
//! - config: static endpoint and timing configuration
//! - source: timed, cancellable HTTP client
//! - normalize: shape detection and field alias extraction
//! - index: category grouping
//! - filter: category + free-text search
//! - loader: load state machine with stale-result protection
//! - debounce: last-trigger-wins coalescing for search input

pub mod config;
pub mod debounce;
pub mod error;
pub mod filter;
pub mod index;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod source;
pub mod timer;

pub use config::MenuConfig;
pub use debounce::Debouncer;
pub use error::{ConfigError, FetchError, LoadError, ShapeError};
pub use filter::{filter, CategoryFilter, CategorySection, FilterState, FilteredView};
pub use index::CategoryIndex;
pub use loader::{LoadPhase, LoadTicket, MenuCatalog, MenuLoader};
pub use model::{ItemId, MenuItem, Price, OTHER_CATEGORY};
pub use normalize::{detect_shape, normalize, ResponseShape};
pub use source::{with_timeout, HttpMenuSource, MenuSource};
