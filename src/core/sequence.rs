//! # Sequence Builder
//!
//! Derives the ordered list of item ids visible under a filter. Sequences are
//! never patched in place: every filter change or catalog load rebuilds one.

use crate::core::catalog::{Catalog, Filter};

/// Ordered ids of visible items, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sequence {
    ids: Vec<String>,
}

impl Sequence {
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.ids.get(index).map(String::as_str)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.ids.iter().position(|candidate| candidate == id)
    }
}

impl FromIterator<String> for Sequence {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

/// Retains items whose status matches `filter` (everything for `Filter::All`).
pub fn rebuild(catalog: &Catalog, filter: Filter) -> Sequence {
    catalog
        .items()
        .iter()
        .filter(|item| filter.matches(item.status))
        .map(|item| item.id.clone())
        .collect()
}

/// Wraparound index: `((i mod n) + n) mod n`. `None` when `len` is zero.
pub fn wrap_index(index: isize, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    Some(index.rem_euclid(len as isize) as usize)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;

    #[test]
    fn test_rebuild_all_keeps_catalog_order() {
        let catalog = sample_catalog();
        let sequence = rebuild(&catalog, Filter::All);
        let expected: Vec<&str> = catalog.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(sequence.ids(), expected.as_slice());
    }

    #[test]
    fn test_rebuild_filters_by_status() {
        let catalog = sample_catalog();
        assert_eq!(rebuild(&catalog, Filter::Sold).ids(), ["meadow", "tide"]);
        assert_eq!(rebuild(&catalog, Filter::Reserved).ids(), ["dune"]);
        assert_eq!(
            rebuild(&catalog, Filter::Available).ids(),
            ["harbour", "orchard", "quarry"]
        );
    }

    #[test]
    fn test_rebuild_empty_catalog() {
        assert!(rebuild(&Catalog::empty(), Filter::All).is_empty());
    }

    #[test]
    fn test_every_id_exists_in_catalog() {
        let catalog = sample_catalog();
        for filter in Filter::ALL {
            for id in rebuild(&catalog, filter).ids() {
                assert!(catalog.get(id).is_some());
            }
        }
    }

    #[test]
    fn test_wrap_index_is_periodic() {
        let n = 5usize;
        for i in -12isize..12 {
            for k in -3isize..=3 {
                assert_eq!(wrap_index(i, n), wrap_index(i + k * n as isize, n));
            }
        }
    }

    #[test]
    fn test_wrap_index_edges() {
        assert_eq!(wrap_index(-1, 4), Some(3));
        assert_eq!(wrap_index(4, 4), Some(0));
        assert_eq!(wrap_index(0, 1), Some(0));
        assert_eq!(wrap_index(3, 0), None);
    }
}
