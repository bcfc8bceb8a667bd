//! # Catalog Store
//!
//! The full set of artworks plus the active category filter.
//!
//! ```text
//! CatalogStore
//! ├── catalog: Catalog      // immutable after load, replaced wholesale on reload
//! └── filter: Filter        // mutated only by user filter selection
//! ```
//!
//! Items are identified by their `slug`. The catalog keeps the order of the
//! source document; that order is the order of every derived sequence.

use std::collections::{BTreeMap, HashSet};
use std::fmt;

use clap::ValueEnum;
use log::warn;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Available,
    Reserved,
    Sold,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Status::Available => "Available",
            Status::Reserved => "Reserved",
            Status::Sold => "Sold",
        }
    }
}

/// How the price of an item is shown to visitors.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceDisplay {
    #[serde(rename = "number")]
    Numeric,
    #[serde(rename = "request")]
    OnRequest,
    #[serde(rename = "note")]
    NoteOnly,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    #[serde(rename = "slug")]
    pub id: String,
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub year: Option<String>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub description: Option<String>,
    pub status: Status,
    #[serde(default)]
    pub price_display: Option<PriceDisplay>,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub featured: bool,
    /// Size label → price. Empty when the work has no prints.
    #[serde(default)]
    pub print_prices: BTreeMap<String, f64>,
}

/// Accepts `"2021"` as well as `2021`.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Text(String),
        Number(serde_json::Number),
    }

    Ok(Option::<Raw>::deserialize(deserializer)?.map(|raw| match raw {
        Raw::Text(text) => text,
        Raw::Number(number) => number.to_string(),
    }))
}

impl Item {
    pub fn has_prints(&self) -> bool {
        !self.print_prices.is_empty()
    }
}

/// Category filter for the grid.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Available,
    Reserved,
    Sold,
}

impl Filter {
    pub const ALL: [Filter; 4] = [Filter::All, Filter::Available, Filter::Reserved, Filter::Sold];

    pub fn matches(&self, status: Status) -> bool {
        match self {
            Filter::All => true,
            Filter::Available => status == Status::Available,
            Filter::Reserved => status == Status::Reserved,
            Filter::Sold => status == Status::Sold,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Available => "Available",
            Filter::Reserved => "Reserved",
            Filter::Sold => "Sold",
        }
    }

    /// Cycles through the filters in display order.
    pub fn next(self) -> Self {
        match self {
            Filter::All => Filter::Available,
            Filter::Available => Filter::Reserved,
            Filter::Reserved => Filter::Sold,
            Filter::Sold => Filter::All,
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Immutable, ordered collection of items with unique ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Builds a catalog, dropping later duplicates of an id.
    pub fn new(items: Vec<Item>) -> Self {
        let mut seen = HashSet::new();
        let items = items
            .into_iter()
            .filter(|item| {
                if seen.insert(item.id.clone()) {
                    true
                } else {
                    warn!("Duplicate artwork slug '{}' dropped", item.id);
                    false
                }
            })
            .collect();
        Self { items }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Absolute position of `id` in catalog order.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Ids of featured items in catalog order, independent of any filter.
    pub fn featured_ids(&self) -> Vec<String> {
        self.items
            .iter()
            .filter(|item| item.featured)
            .map(|item| item.id.clone())
            .collect()
    }
}

/// Owns the catalog and the active filter.
#[derive(Debug, Default)]
pub struct CatalogStore {
    catalog: Catalog,
    filter: Filter,
}

impl CatalogStore {
    pub fn new(catalog: Catalog, filter: Filter) -> Self {
        Self { catalog, filter }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> Filter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Replaces the catalog wholesale; the filter is kept.
    pub fn replace(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{item, sample_catalog};

    #[test]
    fn test_item_decodes_from_source_fields() {
        let json = r#"{
            "slug": "harbour-dawn",
            "title": "Harbour at Dawn",
            "year": "2021",
            "size": "60 x 80 cm",
            "medium": "Oil on canvas",
            "image": "img/harbour.jpg",
            "status": "available",
            "price_display": "number",
            "price": 1200,
            "featured": true,
            "print_prices": { "A3": 45, "A2": 80 }
        }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.id, "harbour-dawn");
        assert_eq!(item.status, Status::Available);
        assert_eq!(item.price_display, Some(PriceDisplay::Numeric));
        assert_eq!(item.price, Some(1200.0));
        assert!(item.featured);
        assert!(item.has_prints());
        assert_eq!(item.note, None);
    }

    #[test]
    fn test_item_optional_fields_default() {
        let json = r#"{ "slug": "a", "title": "A", "year": 2019, "status": "sold" }"#;
        let item: Item = serde_json::from_str(json).unwrap();
        assert_eq!(item.year.as_deref(), Some("2019"));
        assert!(!item.featured);
        assert!(!item.has_prints());
        assert_eq!(item.price_display, None);
        assert_eq!(item.image, "");
    }

    #[test]
    fn test_unknown_status_rejected() {
        let json = r#"{ "slug": "a", "title": "A", "status": "lost" }"#;
        assert!(serde_json::from_str::<Item>(json).is_err());
    }

    #[test]
    fn test_filter_matches() {
        assert!(Filter::All.matches(Status::Sold));
        assert!(Filter::Reserved.matches(Status::Reserved));
        assert!(!Filter::Available.matches(Status::Sold));
    }

    #[test]
    fn test_filter_next_cycles() {
        let mut filter = Filter::All;
        for _ in 0..4 {
            filter = filter.next();
        }
        assert_eq!(filter, Filter::All);
    }

    #[test]
    fn test_catalog_drops_duplicate_ids() {
        let catalog = Catalog::new(vec![
            item("a", Status::Available),
            item("b", Status::Sold),
            item("a", Status::Reserved),
        ]);
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("a").unwrap().status, Status::Available);
    }

    #[test]
    fn test_catalog_position_and_featured() {
        let catalog = sample_catalog();
        assert_eq!(catalog.position("dune"), Some(2));
        assert_eq!(catalog.position("missing"), None);
        assert_eq!(catalog.featured_ids(), vec!["harbour", "dune", "orchard"]);
    }

    #[test]
    fn test_store_replace_keeps_filter() {
        let mut store = CatalogStore::new(sample_catalog(), Filter::Sold);
        store.replace(Catalog::empty());
        assert!(store.catalog().is_empty());
        assert_eq!(store.filter(), Filter::Sold);
    }
}
