//! # Detail Navigator
//!
//! Pages through items in the detail overlay.
//!
//! ```text
//!            open(id) ok                    close()
//!   Closed ──────────────▶ Open ──────────────────▶ Closed
//!                           │ ▲
//!                           └─┘ next() / prev(): wraparound
//! ```
//!
//! `open` snapshots the sequence it resolves against. If the id is in the
//! displayed sequence, that sequence is copied; otherwise the full catalog
//! ordering is used for the rest of the session. A filter change while the
//! overlay is open therefore never moves the index under the user; the next
//! `open` picks up the new sequence.

use log::{debug, warn};

use crate::core::catalog::{Catalog, Filter};
use crate::core::gesture::Swipe;
use crate::core::listing::DetailView;
use crate::core::sequence::{Sequence, rebuild, wrap_index};

/// Which ordering the open session pages over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// The filtered sequence displayed when the overlay opened.
    Filtered,
    /// The unfiltered catalog, used when the item was outside the filter.
    FullCatalog,
}

#[derive(Debug, Clone)]
pub struct DetailNavigator {
    open: bool,
    sequence: Sequence,
    index: usize,
    scope: Scope,
}

impl Default for DetailNavigator {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailNavigator {
    pub fn new() -> Self {
        Self {
            open: false,
            sequence: Sequence::default(),
            index: 0,
            scope: Scope::Filtered,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Last resolved index. Meaningless while closed.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn sequence(&self) -> &Sequence {
        &self.sequence
    }

    pub fn current_id(&self) -> Option<&str> {
        if !self.open {
            return None;
        }
        self.sequence.get(self.index)
    }

    /// Opens on `id`. Unknown ids leave the navigator untouched.
    pub fn open(&mut self, id: &str, displayed: &Sequence, catalog: &Catalog) -> Option<DetailView> {
        if let Some(position) = displayed.position(id) {
            self.sequence = displayed.clone();
            self.index = position;
            self.scope = Scope::Filtered;
        } else if let Some(position) = catalog.position(id) {
            debug!("'{}' not in displayed sequence, paging the full catalog", id);
            self.sequence = rebuild(catalog, Filter::All);
            self.index = position;
            self.scope = Scope::FullCatalog;
        } else {
            warn!("Ignoring open request for unknown item '{}'", id);
            return None;
        }
        self.open = true;
        debug!(
            "Detail open at {}/{} ({:?})",
            self.index + 1,
            self.sequence.len(),
            self.scope
        );
        self.current(catalog)
    }

    pub fn next(&mut self, catalog: &Catalog) -> Option<DetailView> {
        self.step(1, catalog)
    }

    pub fn prev(&mut self, catalog: &Catalog) -> Option<DetailView> {
        self.step(-1, catalog)
    }

    /// Same mapping as the carousel: swipe left pages forward.
    pub fn swipe(&mut self, swipe: Swipe, catalog: &Catalog) -> Option<DetailView> {
        match swipe {
            Swipe::Left => self.next(catalog),
            Swipe::Right => self.prev(catalog),
        }
    }

    pub fn close(&mut self) {
        if self.open {
            debug!("Detail closed");
        }
        self.open = false;
    }

    /// The resolved item under the navigator, if open.
    pub fn current(&self, catalog: &Catalog) -> Option<DetailView> {
        let id = self.current_id()?;
        let item = catalog.get(id)?;
        Some(DetailView::new(item, self.index, self.sequence.len()))
    }

    fn step(&mut self, delta: isize, catalog: &Catalog) -> Option<DetailView> {
        if !self.open {
            return None;
        }
        self.index = wrap_index(self.index as isize + delta, self.sequence.len())?;
        self.current(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;

    #[test]
    fn test_open_in_filtered_sequence_uses_its_position() {
        let catalog = sample_catalog();
        let displayed = rebuild(&catalog, Filter::Available);
        let mut navigator = DetailNavigator::new();

        let view = navigator.open("orchard", &displayed, &catalog).unwrap();
        assert!(navigator.is_open());
        assert_eq!(navigator.index(), 1);
        assert_eq!(navigator.scope(), Scope::Filtered);
        assert_eq!(view.id, "orchard");
        assert_eq!(view.total, 3);
    }

    #[test]
    fn test_open_outside_filter_falls_back_to_catalog() {
        let catalog = sample_catalog();
        let displayed = rebuild(&catalog, Filter::Sold);
        let mut navigator = DetailNavigator::new();

        let view = navigator.open("dune", &displayed, &catalog).unwrap();
        assert_eq!(navigator.index(), 2);
        assert_eq!(navigator.scope(), Scope::FullCatalog);
        assert_eq!(navigator.sequence(), &rebuild(&catalog, Filter::All));
        assert_eq!(view.position, 2);
        assert_eq!(view.total, catalog.len());
    }

    #[test]
    fn test_open_unknown_id_is_noop() {
        let catalog = sample_catalog();
        let displayed = rebuild(&catalog, Filter::All);
        let mut navigator = DetailNavigator::new();
        assert!(navigator.open("nope", &displayed, &catalog).is_none());
        assert!(!navigator.is_open());
    }

    #[test]
    fn test_paging_wraps_both_ways() {
        let catalog = sample_catalog();
        let displayed = rebuild(&catalog, Filter::Available);
        let mut navigator = DetailNavigator::new();
        navigator.open("quarry", &displayed, &catalog);

        assert_eq!(navigator.next(&catalog).unwrap().id, "harbour");
        assert_eq!(navigator.prev(&catalog).unwrap().id, "quarry");
        assert_eq!(navigator.prev(&catalog).unwrap().id, "orchard");
    }

    #[test]
    fn test_swipe_pages_like_carousel() {
        let catalog = sample_catalog();
        let displayed = rebuild(&catalog, Filter::All);
        let mut navigator = DetailNavigator::new();
        navigator.open("harbour", &displayed, &catalog);

        assert_eq!(navigator.swipe(Swipe::Left, &catalog).unwrap().id, "meadow");
        assert_eq!(navigator.swipe(Swipe::Right, &catalog).unwrap().id, "harbour");
    }

    #[test]
    fn test_paging_while_closed_is_noop() {
        let catalog = sample_catalog();
        let mut navigator = DetailNavigator::new();
        assert!(navigator.next(&catalog).is_none());
        assert!(navigator.prev(&catalog).is_none());
    }

    #[test]
    fn test_close_retains_index() {
        let catalog = sample_catalog();
        let displayed = rebuild(&catalog, Filter::All);
        let mut navigator = DetailNavigator::new();
        navigator.open("tide", &displayed, &catalog);
        navigator.close();
        assert!(!navigator.is_open());
        assert_eq!(navigator.index(), 4);
        assert!(navigator.current(&catalog).is_none());
    }

    #[test]
    fn test_snapshot_survives_filter_change() {
        let catalog = sample_catalog();
        let displayed = rebuild(&catalog, Filter::Available);
        let mut navigator = DetailNavigator::new();
        navigator.open("harbour", &displayed, &catalog);

        // The grid now shows a different sequence; paging is unaffected.
        let _rebuilt = rebuild(&catalog, Filter::Sold);
        assert_eq!(navigator.next(&catalog).unwrap().id, "orchard");
        assert_eq!(navigator.sequence().len(), 3);
    }
}
