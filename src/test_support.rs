//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;
use std::time::Duration;

use crate::core::action::{Action, update};
use crate::core::carousel::AUTO_ADVANCE_PERIOD;
use crate::core::catalog::{Catalog, Filter, Item, PriceDisplay, Status};
use crate::core::state::App;
use crate::core::timer::Scheduler;

#[derive(Default)]
struct Tasks {
    started: usize,
    live: usize,
    last_period: Option<Duration>,
}

/// A scheduler that never fires; it only counts tasks so tests can check the
/// single-task invariant. Clones share counters.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    tasks: Rc<RefCell<Tasks>>,
}

pub struct ManualHandle {
    tasks: Rc<RefCell<Tasks>>,
}

impl Drop for ManualHandle {
    fn drop(&mut self) {
        self.tasks.borrow_mut().live -= 1;
    }
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tasks ever started.
    pub fn started(&self) -> usize {
        self.tasks.borrow().started
    }

    /// Tasks started and not yet cancelled.
    pub fn live(&self) -> usize {
        self.tasks.borrow().live
    }

    pub fn last_period(&self) -> Option<Duration> {
        self.tasks.borrow().last_period
    }
}

impl Scheduler for ManualScheduler {
    type Handle = ManualHandle;

    fn every(&mut self, period: Duration, _generation: u64) -> ManualHandle {
        let mut tasks = self.tasks.borrow_mut();
        tasks.started += 1;
        tasks.live += 1;
        tasks.last_period = Some(period);
        ManualHandle {
            tasks: self.tasks.clone(),
        }
    }
}

/// A minimal item with the given status.
pub fn item(id: &str, status: Status) -> Item {
    Item {
        id: id.to_string(),
        title: id.to_uppercase(),
        year: None,
        size: None,
        medium: None,
        image: format!("img/{id}.jpg"),
        description: None,
        status,
        price_display: None,
        price: None,
        note: None,
        featured: false,
        print_prices: BTreeMap::new(),
    }
}

/// Six works covering every status and price policy.
///
/// | # | id      | status    | policy  | featured |
/// |---|---------|-----------|---------|----------|
/// | 0 | harbour | available | number  | yes      |
/// | 1 | meadow  | sold      | -       |          |
/// | 2 | dune    | reserved  | request | yes      |
/// | 3 | orchard | available | note    | yes      |
/// | 4 | tide    | sold      | number  |          |
/// | 5 | quarry  | available | number  |          |
pub fn sample_catalog() -> Catalog {
    let mut harbour = item("harbour", Status::Available);
    harbour.title = "Harbour at Dawn".into();
    harbour.year = Some("2021".into());
    harbour.size = Some("60 x 80 cm".into());
    harbour.medium = Some("Oil on canvas".into());
    harbour.price_display = Some(PriceDisplay::Numeric);
    harbour.price = Some(1200.0);
    harbour.featured = true;
    harbour.print_prices = BTreeMap::from([("A3".to_string(), 45.0), ("A2".to_string(), 80.0)]);

    let mut meadow = item("meadow", Status::Sold);
    meadow.title = "Meadow".into();
    meadow.note = Some("Private collection".into());

    let mut dune = item("dune", Status::Reserved);
    dune.title = "Dune".into();
    dune.year = Some("2019".into());
    dune.price_display = Some(PriceDisplay::OnRequest);
    dune.featured = true;

    let mut orchard = item("orchard", Status::Available);
    orchard.title = "Orchard".into();
    orchard.price_display = Some(PriceDisplay::NoteOnly);
    orchard.note = Some("Part of a diptych".into());
    orchard.featured = true;

    let mut tide = item("tide", Status::Sold);
    tide.title = "Tide".into();
    tide.price_display = Some(PriceDisplay::Numeric);
    tide.price = Some(3400.0);

    let mut quarry = item("quarry", Status::Available);
    quarry.title = "Quarry".into();
    quarry.price_display = Some(PriceDisplay::Numeric);
    quarry.price = Some(850.5);

    Catalog::new(vec![harbour, meadow, dune, orchard, tide, quarry])
}

/// Creates a test App that has finished loading `catalog`.
pub fn test_app_with(catalog: Catalog) -> App<ManualScheduler> {
    let mut app = App::new(ManualScheduler::new(), Filter::All, AUTO_ADVANCE_PERIOD);
    update(&mut app, Action::CatalogLoaded(catalog));
    app
}

/// Creates a test App loaded with [`sample_catalog`].
pub fn test_app() -> App<ManualScheduler> {
    test_app_with(sample_catalog())
}
