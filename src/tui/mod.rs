//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard and mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Event Flow
//!
//! ```text
//! crossterm ──▶ TuiEvent ──▶ dispatch() ──▶ Action ──▶ update() ──▶ Effect
//!                                                        ▲
//! tokio tasks (catalog load, auto-advance ticks) ──mpsc──┘
//! ```
//!
//! Background tasks never touch `App`. They post actions into the channel
//! and the loop applies them one at a time between input batches.
//!
//! ## Pointer Units
//!
//! Mouse cells are scaled by the configured cell size before reaching the
//! gesture recognizers, so the swipe threshold is measured in roughly the
//! same units as on a pointer device (a few columns, not fifty).

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use ratatui::layout::Rect;

use crate::core::action::{Action, Effect, Surface, update};
use crate::core::carousel::CarouselCommand;
use crate::core::catalog::Catalog;
use crate::core::config::ResolvedConfig;
use crate::core::gesture::{GestureEvent, InputSource, Point};
use crate::core::inquiry::{InquiryRequest, Interest};
use crate::core::loader::{load_catalog, source_for};
use crate::core::state::App;
use crate::core::timer::{Scheduler, TokioScheduler};
use crate::tui::component::EventHandler;
use crate::tui::components::carousel_strip::hit_test;
use crate::tui::components::detail_overlay::overlay_area;
use crate::tui::components::filter_bar::{chip_at, filter_for_key};
use crate::tui::components::{
    ContactEvent, ContactPanelState, GridEvent, GridState, StripHit, contains,
};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Upper bound on how long a queued tick waits for the loop.
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Which surface the arrow keys drive while the overlay is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Grid,
    Carousel,
}

/// A mouse button held down since `at`.
#[derive(Debug, Clone, Copy)]
struct Press {
    /// Surface receiving the gesture, if the press landed on one.
    surface: Option<Surface>,
    at: (u16, u16),
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub grid: GridState,
    pub focus: Focus,
    /// Pointer is over the carousel strip.
    pub hovered: bool,
    /// Contact panel (None = hidden)
    pub contact: Option<ContactPanelState>,
    /// Last composed inquiry, kept so reopening for the same work keeps edits.
    draft: String,
    press: Option<Press>,
    cell_width: f64,
    cell_height: f64,
}

impl TuiState {
    pub fn new(cell_width: f64, cell_height: f64) -> Self {
        Self {
            grid: GridState::new(),
            focus: Focus::Grid,
            hovered: false,
            contact: None,
            draft: String::new(),
            press: None,
            cell_width,
            cell_height,
        }
    }

    fn pointer(&self, col: u16, row: u16) -> Point {
        Point::new(
            f64::from(col) * self.cell_width,
            f64::from(row) * self.cell_height,
        )
    }

    /// Shows the contact panel prefilled for `request`.
    pub fn open_contact(&mut self, catalog: &Catalog, request: &InquiryRequest) {
        let Some(item) = catalog.get(&request.item_id) else {
            warn!("Inquiry for unknown artwork '{}'", request.item_id);
            return;
        };
        let state = ContactPanelState::new(request, item, &self.draft);
        self.draft = state.message.clone();
        self.contact = Some(state);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    let scheduler = TokioScheduler::new(tx.clone());
    let mut app = App::new(scheduler, config.filter, config.auto_advance);
    let mut tui = TuiState::new(config.cell_width, config.cell_height);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    spawn_load(config.catalog.clone(), tx.clone());

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        let first_event = poll_event_timeout(POLL_INTERVAL);

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        if first_event.is_some() {
            needs_redraw = true;
        }
        let frame_area = terminal.get_frame().area();
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let effect = dispatch(&mut app, &mut tui, event, frame_area);
            should_quit |= apply_effect(&app, &mut tui, effect, &config.catalog, &tx);
        }

        if should_quit {
            break;
        }

        // Handle background task actions (loaded catalogs, ticks)
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            match &action {
                Action::CatalogLoaded(catalog) => {
                    debug!("Event loop received catalog ({} artworks)", catalog.len())
                }
                other => debug!("Event loop received: {:?}", other),
            }
            let effect = update(&mut app, action);
            should_quit |= apply_effect(&app, &mut tui, effect, &config.catalog, &tx);
        }
        sync_carousel_pause(&mut app, &mut tui);

        if should_quit {
            break;
        }
    }

    ratatui::restore();
    Ok(())
}

/// Performs an effect's I/O. Returns true when the app should quit.
fn apply_effect<S: Scheduler>(
    app: &App<S>,
    tui: &mut TuiState,
    effect: Effect,
    location: &str,
    tx: &mpsc::Sender<Action>,
) -> bool {
    match effect {
        Effect::None => {}
        Effect::Quit => return true,
        Effect::Reload => spawn_load(location.to_string(), tx.clone()),
        Effect::Inquiry(request) => tui.open_contact(app.catalog(), &request),
    }
    false
}

fn spawn_load(location: String, tx: mpsc::Sender<Action>) {
    info!("Spawning catalog load from {}", location);
    tokio::spawn(async move {
        let source = source_for(&location);
        let catalog = load_catalog(source.as_ref()).await;
        if tx.send(Action::CatalogLoaded(catalog)).is_err() {
            warn!("Failed to send loaded catalog: receiver dropped");
        }
    });
}

/// Hover or keyboard focus on the strip pauses auto-advance.
fn sync_carousel_pause<S: Scheduler>(app: &mut App<S>, tui: &mut TuiState) {
    if !app.is_carousel_visible() {
        tui.focus = Focus::Grid;
        tui.hovered = false;
        return;
    }
    let wants_pause = tui.hovered || tui.focus == Focus::Carousel;
    if wants_pause != app.carousel.is_paused() {
        update(app, Action::CarouselHover(wants_pause));
    }
}

/// Applies one terminal event to the app. `frame_area` is the area the last
/// frame was drawn into, used for mouse hit testing.
fn dispatch<S: Scheduler>(
    app: &mut App<S>,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Effect {
    tui.grid.sync(app.sequence.len());

    let mut effect = Effect::None;
    for action in actions_for(app, tui, event, frame_area) {
        match update(app, action) {
            Effect::None => {}
            Effect::Quit => return Effect::Quit,
            other => effect = other,
        }
    }
    sync_carousel_pause(app, tui);
    effect
}

fn actions_for<S: Scheduler>(
    app: &App<S>,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Vec<Action> {
    // Ctrl+C always quits
    if event == TuiEvent::ForceQuit {
        return vec![Action::Quit];
    }

    // When the contact panel is open, route all events to it
    if let Some(contact) = tui.contact.as_mut() {
        if let Some(ContactEvent::Dismiss) = contact.handle_event(&event) {
            tui.contact = None;
        }
        return Vec::new();
    }

    match event {
        // A resize mid-drag invalidates the press geometry.
        TuiEvent::Resize => match tui.press.take() {
            Some(Press {
                surface: Some(surface),
                ..
            }) => vec![Action::Gesture {
                surface,
                event: GestureEvent::Cancel,
            }],
            _ => Vec::new(),
        },
        TuiEvent::MouseDown(..)
        | TuiEvent::MouseDrag(..)
        | TuiEvent::MouseUp(..)
        | TuiEvent::MouseMove(..) => mouse_actions(app, tui, event, frame_area),
        _ => key_actions(app, tui, event).into_iter().collect(),
    }
}

fn key_actions<S: Scheduler>(app: &App<S>, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    let overlay_open = app.is_overlay_open();
    match event {
        TuiEvent::Quit | TuiEvent::ForceQuit => Some(Action::Quit),
        TuiEvent::InputChar('f') => Some(Action::FilterChanged(app.filter().next())),
        TuiEvent::InputChar('r') => Some(Action::Reload),
        TuiEvent::InputChar('i') => Some(Action::Inquire(Interest::General)),
        TuiEvent::InputChar('p') => Some(Action::Inquire(Interest::PrintPurchase)),
        TuiEvent::InputChar(c) => filter_for_key(c).map(Action::FilterChanged),
        TuiEvent::Escape if overlay_open => Some(Action::Close),
        TuiEvent::Left if overlay_open => Some(Action::DetailPrev),
        TuiEvent::Right if overlay_open => Some(Action::DetailNext),
        _ if overlay_open => None,
        TuiEvent::Tab => {
            if app.is_carousel_visible() {
                tui.focus = match tui.focus {
                    Focus::Grid => Focus::Carousel,
                    Focus::Carousel => Focus::Grid,
                };
            }
            None
        }
        _ if tui.focus == Focus::Carousel => match event {
            TuiEvent::Left => Some(Action::Carousel(CarouselCommand::Prev)),
            TuiEvent::Right => Some(Action::Carousel(CarouselCommand::Next)),
            TuiEvent::Submit => Some(Action::CarouselActivate),
            _ => None,
        },
        _ => match tui.grid.handle_event(&event) {
            Some(GridEvent::Open(index)) => app
                .sequence
                .get(index)
                .map(|id| Action::Open(id.to_string())),
            None => None,
        },
    }
}

/// The surface a press at `(col, row)` starts a gesture on.
fn surface_at<S: Scheduler>(app: &App<S>, frame_area: Rect, col: u16, row: u16) -> Option<Surface> {
    if app.is_overlay_open() {
        return contains(overlay_area(frame_area), col, row).then_some(Surface::Overlay);
    }
    let regions = ui::layout(frame_area, app.is_carousel_visible());
    regions
        .carousel
        .filter(|area| contains(*area, col, row))
        .map(|_| Surface::Carousel)
}

fn mouse_actions<S: Scheduler>(
    app: &App<S>,
    tui: &mut TuiState,
    event: TuiEvent,
    frame_area: Rect,
) -> Vec<Action> {
    let gesture = |surface, event| Action::Gesture { surface, event };
    let source = InputSource::Pointer;

    match event {
        TuiEvent::MouseMove(col, row) => {
            tui.hovered = surface_at(app, frame_area, col, row) == Some(Surface::Carousel);
            Vec::new()
        }
        TuiEvent::MouseDown(col, row) => {
            let surface = surface_at(app, frame_area, col, row);
            tui.press = Some(Press {
                surface,
                at: (col, row),
            });
            surface
                .map(|s| gesture(s, GestureEvent::Start(tui.pointer(col, row), source)))
                .into_iter()
                .collect()
        }
        TuiEvent::MouseDrag(col, row) => match tui.press {
            Some(Press {
                surface: Some(s), ..
            }) => vec![gesture(s, GestureEvent::Move(tui.pointer(col, row), source))],
            _ => Vec::new(),
        },
        TuiEvent::MouseUp(col, row) => {
            let Some(press) = tui.press.take() else {
                return Vec::new();
            };
            let mut actions = Vec::new();
            if let Some(s) = press.surface {
                actions.push(gesture(s, GestureEvent::Move(tui.pointer(col, row), source)));
                actions.push(gesture(s, GestureEvent::End(source)));
            }
            // Press and release on the same cell is a click.
            if press.at == (col, row) {
                actions.extend(click_action(app, tui, frame_area, col, row));
            }
            actions
        }
        _ => Vec::new(),
    }
}

fn click_action<S: Scheduler>(
    app: &App<S>,
    tui: &mut TuiState,
    frame_area: Rect,
    col: u16,
    row: u16,
) -> Option<Action> {
    if app.is_overlay_open() {
        return (!contains(overlay_area(frame_area), col, row)).then_some(Action::Close);
    }

    let regions = ui::layout(frame_area, app.is_carousel_visible());
    if let Some(area) = regions.carousel
        && contains(area, col, row)
    {
        return match hit_test(area, app.carousel.len(), col, row)? {
            StripHit::Prev => Some(Action::Carousel(CarouselCommand::Prev)),
            StripHit::Next => Some(Action::Carousel(CarouselCommand::Next)),
            StripHit::Dot(index) => Some(Action::Carousel(CarouselCommand::GoTo(index as isize))),
            StripHit::Slide => Some(Action::CarouselActivate),
        };
    }
    if let Some(filter) = chip_at(regions.filters, col, row) {
        return Some(Action::FilterChanged(filter));
    }
    if contains(regions.grid, col, row) {
        let index = tui.grid.index_at(regions.grid, row)?;
        tui.grid.select(index);
        tui.focus = Focus::Grid;
        return app.sequence.get(index).map(|id| Action::Open(id.to_string()));
    }
    None
}
