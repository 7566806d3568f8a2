//! Filter/Search Engine
//!
//! Pure function of (index, category filter, query). Nothing is cached here.

use serde::{Deserialize, Serialize};

use crate::index::CategoryIndex;
use crate::model::MenuItem;

/// Sentinel category meaning "no restriction"
pub const ALL_CATEGORIES: &str = "all";

/// Which categories are considered
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// `"all"` and the empty string mean no restriction
    pub fn from_name(name: &str) -> Self {
        match name {
            "" | ALL_CATEGORIES => CategoryFilter::All,
            other => CategoryFilter::Only(other.to_string()),
        }
    }

    /// Value used for the filter button `data-category` attribute
    pub fn as_name(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Only(name) => name,
        }
    }

    fn admits(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(name) => name == category,
        }
    }
}

/// Active category and search text; lives only for the page view
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub active_category: CategoryFilter,
    search_query: String,
}

impl FilterState {
    pub fn new(category: &str, query: &str) -> Self {
        Self {
            active_category: CategoryFilter::from_name(category),
            search_query: query.trim().to_string(),
        }
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_query(&mut self, query: &str) {
        self.search_query = query.trim().to_string();
    }

    pub fn set_category(&mut self, category: &str) {
        self.active_category = CategoryFilter::from_name(category);
    }
}

/// One rendered category with its surviving items
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySection {
    pub name: String,
    pub items: Vec<MenuItem>,
}

/// Visible subset grouped by category, in index order, empty categories omitted
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilteredView {
    pub sections: Vec<CategorySection>,
}

impl FilteredView {
    /// True when the sink must show the "no results" state
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }
}

pub fn filter(index: &CategoryIndex, state: &FilterState) -> FilteredView {
    let needle = state.search_query.to_lowercase();
    let sections = index
        .iter()
        .filter(|(name, _)| state.active_category.admits(name))
        .filter_map(|(name, items)| {
            let items: Vec<MenuItem> = items.iter().filter(|item| item.matches(&needle)).cloned().collect();
            (!items.is_empty()).then(|| CategorySection {
                name: name.to_string(),
                items,
            })
        })
        .collect();
    FilteredView { sections }
}
