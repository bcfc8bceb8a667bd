//! # Actions
//!
//! Everything that can happen in the gallery becomes an `Action`.
//! User picks a filter chip? That's `Action::FilterChanged(filter)`.
//! Auto-advance fires? That's `Action::AutoAdvanceTick(generation)`.
//!
//! The `update()` function applies an action to the state and returns an
//! `Effect` describing any I/O the adapter must perform. No I/O happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Every transition runs to completion before the next action is processed,
//! so no two transitions ever interleave.

use log::{debug, info};

use crate::core::carousel::CarouselCommand;
use crate::core::catalog::{Catalog, Filter};
use crate::core::gesture::GestureEvent;
use crate::core::inquiry::{InquiryRequest, Interest};
use crate::core::state::App;
use crate::core::timer::Scheduler;

/// Surface a gesture recognizer is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Carousel,
    Overlay,
}

#[derive(Debug, Clone)]
pub enum Action {
    /// A catalog arrived (startup or reload); replaces the store wholesale.
    CatalogLoaded(Catalog),
    Reload,
    FilterChanged(Filter),
    Carousel(CarouselCommand),
    /// Hover or focus entered (`true`) or left (`false`) the carousel.
    CarouselHover(bool),
    /// Click on the active slide.
    CarouselActivate,
    Open(String),
    Close,
    DetailNext,
    DetailPrev,
    Gesture { surface: Surface, event: GestureEvent },
    AutoAdvanceTick(u64),
    Inquire(Interest),
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    Quit,
    /// Fetch the catalog again and send back `CatalogLoaded`.
    Reload,
    /// Hand the request to the contact form.
    Inquiry(InquiryRequest),
}

pub fn update<S: Scheduler>(app: &mut App<S>, action: Action) -> Effect {
    match action {
        Action::CatalogLoaded(catalog) => {
            info!("Catalog replaced: {} artworks", catalog.len());
            app.store.replace(catalog);
            app.rebuild_sequence();
            let featured = app.store.catalog().featured_ids();
            app.carousel.reload(featured);
            // A release may have been dropped while the surface was gone.
            app.carousel_gesture = Default::default();
            // Ids in an open overlay may no longer exist.
            app.detail.close();
            app.detail_view = None;
            app.is_loading = false;
            app.status_message = if app.catalog().is_empty() {
                String::from("No artworks to show")
            } else {
                format!("{} artworks", app.catalog().len())
            };
            Effect::None
        }
        Action::Reload => {
            app.is_loading = true;
            app.status_message = String::from("Reloading artworks...");
            Effect::Reload
        }
        Action::FilterChanged(filter) => {
            debug!("Filter -> {:?}", filter);
            app.store.set_filter(filter);
            app.rebuild_sequence();
            app.status_message = format!("{}: {} artworks", filter, app.sequence.len());
            Effect::None
        }
        Action::Carousel(command) => {
            app.carousel.handle(command);
            Effect::None
        }
        Action::CarouselHover(true) => {
            app.carousel.pause();
            Effect::None
        }
        Action::CarouselHover(false) => {
            app.carousel.resume();
            Effect::None
        }
        Action::CarouselActivate => match app.carousel.activate() {
            Some(id) => update(app, Action::Open(id)),
            None => Effect::None,
        },
        Action::Open(id) => {
            if let Some(view) = app.detail.open(&id, &app.sequence, app.store.catalog()) {
                app.overlay_gesture = Default::default();
                app.detail_view = Some(view);
            }
            Effect::None
        }
        Action::Close => {
            app.detail.close();
            app.detail_view = None;
            Effect::None
        }
        Action::DetailNext => {
            if let Some(view) = app.detail.next(app.store.catalog()) {
                app.detail_view = Some(view);
            }
            Effect::None
        }
        Action::DetailPrev => {
            if let Some(view) = app.detail.prev(app.store.catalog()) {
                app.detail_view = Some(view);
            }
            Effect::None
        }
        Action::Gesture { surface, event } => {
            handle_gesture(app, surface, event);
            Effect::None
        }
        Action::AutoAdvanceTick(generation) => {
            app.carousel.tick(generation);
            Effect::None
        }
        Action::Inquire(interest) => inquire(app, interest),
        Action::Quit => Effect::Quit,
    }
}

fn handle_gesture<S: Scheduler>(app: &mut App<S>, surface: Surface, event: GestureEvent) {
    match surface {
        Surface::Carousel => {
            if app.carousel.is_suppressed() {
                return;
            }
            if let Some(swipe) = app.carousel_gesture.handle(event) {
                app.carousel.swipe(swipe);
            }
        }
        Surface::Overlay => {
            if !app.detail.is_open() {
                return;
            }
            if let Some(swipe) = app.overlay_gesture.handle(event)
                && let Some(view) = app.detail.swipe(swipe, app.store.catalog())
            {
                app.detail_view = Some(view);
            }
        }
    }
}

/// Only from the open overlay; print purchases need a print price table.
fn inquire<S: Scheduler>(app: &mut App<S>, interest: Interest) -> Effect {
    let Some(item) = app
        .detail
        .current_id()
        .and_then(|id| app.store.catalog().get(id))
    else {
        return Effect::None;
    };
    if interest == Interest::PrintPurchase && !item.has_prints() {
        app.status_message = format!("No prints of \u{201c}{}\u{201d}", item.title);
        return Effect::None;
    }

    let request = InquiryRequest {
        item_id: item.id.clone(),
        interest,
    };
    info!("Inquiry about '{}' ({:?})", request.item_id, interest);
    app.detail.close();
    app.detail_view = None;
    Effect::Inquiry(request)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detail::Scope;
    use crate::core::gesture::{InputSource, Point};
    use crate::test_support::{ManualScheduler, sample_catalog, test_app, test_app_with};

    fn swipe(app: &mut App<ManualScheduler>, surface: Surface, dx: f64, dy: f64) {
        let start = Point::new(300.0, 200.0);
        for event in [
            GestureEvent::Start(start, InputSource::Touch),
            GestureEvent::Move(Point::new(start.x + dx, start.y + dy), InputSource::Touch),
            GestureEvent::End(InputSource::Touch),
        ] {
            update(app, Action::Gesture { surface, event });
        }
    }

    #[test]
    fn test_catalog_loaded_builds_surfaces() {
        let app = test_app();
        assert!(!app.is_loading);
        assert_eq!(app.sequence.len(), 6);
        assert_eq!(app.carousel.len(), 3);
        assert!(app.carousel.is_auto_advancing());
        assert_eq!(app.status_message, "6 artworks");
    }

    #[test]
    fn test_empty_catalog_degrades() {
        let mut app = test_app_with(Catalog::empty());
        assert!(app.sequence.is_empty());
        assert!(!app.is_carousel_visible());
        update(&mut app, Action::Open("harbour".into()));
        assert!(!app.is_overlay_open());
        update(&mut app, Action::Carousel(CarouselCommand::Next));
        assert_eq!(app.carousel.index(), None);
        assert_eq!(app.status_message, "No artworks to show");
    }

    #[test]
    fn test_filter_change_rebuilds_sequence() {
        let mut app = test_app();
        update(&mut app, Action::FilterChanged(Filter::Sold));
        assert_eq!(app.sequence.ids(), ["meadow", "tide"]);
        // Featured subset is independent of the filter.
        assert_eq!(app.carousel.len(), 3);
    }

    #[test]
    fn test_open_close_publishes_view() {
        let mut app = test_app();
        update(&mut app, Action::Open("dune".into()));
        assert_eq!(app.detail_view.as_ref().unwrap().id, "dune");
        update(&mut app, Action::DetailNext);
        assert_eq!(app.detail_view.as_ref().unwrap().id, "orchard");
        update(&mut app, Action::Close);
        assert!(app.detail_view.is_none());
        assert!(!app.is_overlay_open());
    }

    #[test]
    fn test_filter_change_while_open_keeps_snapshot() {
        let mut app = test_app();
        update(&mut app, Action::FilterChanged(Filter::Available));
        update(&mut app, Action::Open("orchard".into()));
        update(&mut app, Action::FilterChanged(Filter::Sold));
        update(&mut app, Action::DetailNext);
        assert_eq!(app.detail_view.as_ref().unwrap().id, "quarry");
        assert_eq!(app.detail.scope(), Scope::Filtered);
    }

    #[test]
    fn test_carousel_activate_opens_outside_filter() {
        let mut app = test_app();
        update(&mut app, Action::FilterChanged(Filter::Sold));
        update(&mut app, Action::CarouselActivate);
        assert_eq!(app.detail_view.as_ref().unwrap().id, "harbour");
        assert_eq!(app.detail.scope(), Scope::FullCatalog);
        assert_eq!(app.detail.index(), 0);
    }

    #[test]
    fn test_carousel_swipe_restarts_timer() {
        let mut app = test_app();
        let before = app.carousel.generation();
        swipe(&mut app, Surface::Carousel, -60.0, 5.0);
        assert_eq!(app.carousel.index(), Some(1));
        assert!(app.carousel.generation() > before);
        assert!(app.carousel.is_auto_advancing());
    }

    #[test]
    fn test_vertical_drag_does_nothing() {
        let mut app = test_app();
        swipe(&mut app, Surface::Carousel, 30.0, 40.0);
        assert_eq!(app.carousel.index(), Some(0));
    }

    #[test]
    fn test_overlay_swipe_pages() {
        let mut app = test_app();
        update(&mut app, Action::Open("meadow".into()));
        swipe(&mut app, Surface::Overlay, 55.0, 10.0);
        assert_eq!(app.detail_view.as_ref().unwrap().id, "harbour");
        // Overlay swipes leave the carousel alone.
        assert_eq!(app.carousel.index(), Some(0));
    }

    #[test]
    fn test_overlay_gesture_ignored_when_closed() {
        let mut app = test_app();
        swipe(&mut app, Surface::Overlay, -80.0, 0.0);
        assert!(!app.is_overlay_open());
        assert!(!app.overlay_gesture.is_dragging());
    }

    #[test]
    fn test_tick_advances_and_stale_tick_does_not() {
        let mut app = test_app();
        let generation = app.carousel.generation();
        update(&mut app, Action::AutoAdvanceTick(generation));
        assert_eq!(app.carousel.index(), Some(1));
        update(&mut app, Action::Carousel(CarouselCommand::GoTo(0)));
        update(&mut app, Action::AutoAdvanceTick(generation));
        assert_eq!(app.carousel.index(), Some(0));
    }

    #[test]
    fn test_hover_pauses_and_resumes() {
        let mut app = test_app();
        update(&mut app, Action::CarouselHover(true));
        assert!(!app.carousel.is_auto_advancing());
        update(&mut app, Action::CarouselHover(false));
        assert!(app.carousel.is_auto_advancing());
    }

    #[test]
    fn test_reload_to_empty_cancels_timer() {
        let mut app = test_app();
        let generation = app.carousel.generation();
        assert_eq!(update(&mut app, Action::Reload), Effect::Reload);
        assert!(app.is_loading);
        update(&mut app, Action::CatalogLoaded(Catalog::empty()));
        assert!(!app.carousel.is_auto_advancing());
        update(&mut app, Action::AutoAdvanceTick(generation));
        assert_eq!(app.carousel.index(), None);
    }

    #[test]
    fn test_reload_mid_drag_does_not_leak_into_next_click() {
        let mut app = test_app();
        let press = |app: &mut App<ManualScheduler>, event| {
            update(app, Action::Gesture { surface: Surface::Carousel, event });
        };
        press(&mut app, GestureEvent::Start(Point::new(320.0, 64.0), InputSource::Pointer));
        update(&mut app, Action::CatalogLoaded(Catalog::empty()));
        press(&mut app, GestureEvent::End(InputSource::Pointer));
        update(&mut app, Action::CatalogLoaded(sample_catalog()));
        assert!(!app.carousel_gesture.is_dragging());

        // A plain click afterwards is not a swipe.
        let at = Point::new(80.0, 64.0);
        press(&mut app, GestureEvent::Start(at, InputSource::Pointer));
        press(&mut app, GestureEvent::Move(at, InputSource::Pointer));
        press(&mut app, GestureEvent::End(InputSource::Pointer));
        assert_eq!(app.carousel.index(), Some(0));
    }

    #[test]
    fn test_reload_closes_overlay() {
        let mut app = test_app();
        update(&mut app, Action::Open("tide".into()));
        let catalog = app.catalog().clone();
        update(&mut app, Action::CatalogLoaded(catalog));
        assert!(!app.is_overlay_open());
    }

    #[test]
    fn test_inquiry_from_overlay() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Inquire(Interest::General)), Effect::None);

        update(&mut app, Action::Open("harbour".into()));
        let effect = update(&mut app, Action::Inquire(Interest::PrintPurchase));
        assert_eq!(
            effect,
            Effect::Inquiry(InquiryRequest {
                item_id: "harbour".into(),
                interest: Interest::PrintPurchase,
            })
        );
        assert!(!app.is_overlay_open());
    }

    #[test]
    fn test_print_inquiry_requires_prints() {
        let mut app = test_app();
        update(&mut app, Action::Open("dune".into()));
        assert_eq!(update(&mut app, Action::Inquire(Interest::PrintPurchase)), Effect::None);
        assert!(app.is_overlay_open());
        assert!(app.status_message.contains("No prints"));
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
