//! The store catalog: categories and store records
//!
//! The catalog is an insertion-ordered collection; insertion order is
//! display order everywhere in the UI.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::i18n::{Language, LocalizedText};

mod builtin;
pub use builtin::builtin_catalog;

/// Stable store identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoreId(String);

impl StoreId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoreId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single store listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Store {
    pub id: StoreId,
    pub name: LocalizedText,
    pub description: LocalizedText,
    /// Category id this store belongs to
    pub category: String,
    pub rating: f32,
    /// External address, shown as text only
    pub url: String,
    /// Logo reference, rendered as a placeholder monogram
    pub image: String,
}

/// A browsable category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: LocalizedText,
    /// Icon glyph shown on the category card
    pub icon: String,
}

/// Ordered collection of categories and stores
pub struct Catalog {
    categories: Vec<Category>,
    stores: IndexMap<StoreId, Store>,
}

impl Catalog {
    pub fn new(categories: Vec<Category>, stores: Vec<Store>) -> Self {
        let stores = stores
            .into_iter()
            .map(|store| (store.id.clone(), store))
            .collect();
        Self { categories, stores }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn stores(&self) -> impl Iterator<Item = &Store> {
        self.stores.values()
    }

    pub fn get(&self, id: &StoreId) -> Option<&Store> {
        self.stores.get(id)
    }

    pub fn len(&self) -> usize {
        self.stores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }

    /// Stores in a category, in catalog order
    pub fn by_category(&self, category_id: &str) -> Vec<&Store> {
        self.stores
            .values()
            .filter(|store| store.category == category_id)
            .collect()
    }

    /// Category filter and substring search combined, the way the listing
    /// page consumes them. The query matches name, description or category
    /// id, case-insensitively, in the active language.
    pub fn filtered(
        &self,
        category: Option<&str>,
        query: &str,
        language: Language,
    ) -> Vec<&Store> {
        let query = query.trim().to_lowercase();
        self.stores
            .values()
            .filter(|store| category.map_or(true, |c| store.category == c))
            .filter(|store| {
                if query.is_empty() {
                    return true;
                }
                store.name.get(language).to_lowercase().contains(&query)
                    || store
                        .description
                        .get(language)
                        .to_lowercase()
                        .contains(&query)
                    || store.category.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// Other stores in the same category, in catalog order. This is what
    /// the detail view's carousel is built from.
    pub fn similar_to(&self, id: &StoreId) -> Vec<&Store> {
        let store = match self.stores.get(id) {
            Some(store) => store,
            None => return Vec::new(),
        };
        self.stores
            .values()
            .filter(|other| other.category == store.category && other.id != *id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store(id: &str, name: &str, category: &str) -> Store {
        Store {
            id: StoreId::new(id),
            name: LocalizedText::new(name, name),
            description: LocalizedText::new("desc", "desc"),
            category: category.to_string(),
            rating: 4.0,
            url: String::new(),
            image: String::new(),
        }
    }

    fn catalog() -> Catalog {
        Catalog::new(
            vec![Category {
                id: "makeup".to_string(),
                name: LocalizedText::new("مكياج", "Макияж"),
                icon: "💄".to_string(),
            }],
            vec![
                store("a", "Alpha", "makeup"),
                store("b", "Beta", "skincare"),
                store("c", "Gamma", "makeup"),
                store("d", "Delta", "makeup"),
            ],
        )
    }

    #[test]
    fn test_insertion_order_preserved() {
        let catalog = catalog();
        let ids: Vec<_> = catalog.stores().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn test_by_category() {
        let catalog = catalog();
        let makeup: Vec<_> = catalog
            .by_category("makeup")
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(makeup, vec!["a", "c", "d"]);
    }

    #[test]
    fn test_filtered_combines_category_and_query() {
        let catalog = catalog();
        let hits = catalog.filtered(Some("makeup"), "gam", Language::Ar);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id.as_str(), "c");

        // Empty query keeps the whole category
        assert_eq!(catalog.filtered(Some("makeup"), "", Language::Ar).len(), 3);

        // No category filter searches everything
        let all = catalog.filtered(None, "BETA", Language::Ar);
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id.as_str(), "b");
    }

    #[test]
    fn test_similar_excludes_self_and_keeps_order() {
        let catalog = catalog();
        let similar: Vec<_> = catalog
            .similar_to(&StoreId::new("c"))
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(similar, vec!["a", "d"]);
    }

    #[test]
    fn test_similar_for_unknown_store_is_empty() {
        let catalog = catalog();
        assert!(catalog.similar_to(&StoreId::new("nope")).is_empty());
    }

    #[test]
    fn test_builtin_catalog_is_coherent() {
        let catalog = builtin_catalog();
        assert!(!catalog.is_empty());
        for store in catalog.stores() {
            assert!(
                catalog.category(&store.category).is_some(),
                "store {} references unknown category {}",
                store.id,
                store.category
            );
            assert!((0.0..=5.0).contains(&store.rating));
        }
        // The detail carousel needs at least one category deep enough to page
        let deepest = catalog
            .categories()
            .iter()
            .map(|c| catalog.by_category(&c.id).len())
            .max()
            .unwrap_or(0);
        assert!(deepest >= 7);
    }
}
