//! # Application State
//!
//! Core gallery state. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── store: CatalogStore              // catalog + active filter
//! ├── sequence: Sequence               // ids visible under the filter
//! ├── carousel: CarouselController     // featured slides + auto-advance
//! ├── detail: DetailNavigator          // overlay paging
//! ├── detail_view: Option<DetailView>  // last item the navigator published
//! ├── carousel_gesture: GestureRecognizer
//! ├── overlay_gesture: GestureRecognizer
//! ├── status_message: String           // status bar text
//! └── is_loading: bool                 // catalog fetch in flight
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! This keeps things predictable, so no surprise mutations.

use std::time::Duration;

use crate::core::carousel::CarouselController;
use crate::core::catalog::{Catalog, CatalogStore, Filter, Item};
use crate::core::detail::DetailNavigator;
use crate::core::gesture::GestureRecognizer;
use crate::core::listing::DetailView;
use crate::core::sequence::{Sequence, rebuild};
use crate::core::timer::Scheduler;

pub struct App<S: Scheduler> {
    pub store: CatalogStore,
    pub sequence: Sequence,
    pub carousel: CarouselController<S>,
    pub detail: DetailNavigator,
    /// Published on every successful open / next / prev, cleared on close.
    pub detail_view: Option<DetailView>,
    pub carousel_gesture: GestureRecognizer,
    pub overlay_gesture: GestureRecognizer,
    pub status_message: String,
    pub is_loading: bool,
}

impl<S: Scheduler> App<S> {
    /// An app waiting for its first catalog: everything empty, carousel suppressed.
    pub fn new(scheduler: S, filter: Filter, auto_advance: Duration) -> Self {
        Self {
            store: CatalogStore::new(Catalog::empty(), filter),
            sequence: Sequence::default(),
            carousel: CarouselController::new(Vec::new(), scheduler, auto_advance),
            detail: DetailNavigator::new(),
            detail_view: None,
            carousel_gesture: GestureRecognizer::new(),
            overlay_gesture: GestureRecognizer::new(),
            status_message: String::from("Loading artworks..."),
            is_loading: true,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        self.store.catalog()
    }

    pub fn filter(&self) -> Filter {
        self.store.filter()
    }

    /// Items of the current sequence, in display order.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        let catalog = self.store.catalog();
        self.sequence.ids().iter().filter_map(|id| catalog.get(id))
    }

    pub fn is_carousel_visible(&self) -> bool {
        !self.carousel.is_suppressed()
    }

    pub fn is_overlay_open(&self) -> bool {
        self.detail.is_open()
    }

    /// Recomputes the sequence from the store.
    pub(crate) fn rebuild_sequence(&mut self) {
        self.sequence = rebuild(self.store.catalog(), self.store.filter());
    }
}
