//! Category Index Builder
//!
//! Groups canonical items by exact category label, in the order categories
//! were first encountered during normalization.

use indexmap::IndexMap;

use crate::model::MenuItem;

/// Category name -> items, insertion ordered. Rebuilt wholesale on every load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryIndex {
    groups: IndexMap<String, Vec<MenuItem>>,
}

impl CategoryIndex {
    pub fn build(items: &[MenuItem]) -> Self {
        let mut groups: IndexMap<String, Vec<MenuItem>> = IndexMap::new();
        for item in items {
            groups.entry(item.category.clone()).or_default().push(item.clone());
        }
        Self { groups }
    }

    /// Distinct names sorted for the filter buttons ("all" is implicit and not included)
    pub fn category_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.groups.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn get(&self, category: &str) -> Option<&[MenuItem]> {
        self.groups.get(category).map(Vec::as_slice)
    }

    /// Categories in first-encounter order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[MenuItem])> {
        self.groups.iter().map(|(name, items)| (name.as_str(), items.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn item_count(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }
}
