use ratatui::Frame;
use ratatui::layout::Rect;

use crate::tui::event::TuiEvent;

/// Something drawn into a region of the gallery screen.
///
/// Props are plain struct fields filled in per frame from `App` and
/// `TuiState`. Components that need to keep something between frames
/// (the grid's `ListState`) borrow it mutably for the render.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// Persistent component state that reacts to terminal input.
///
/// Returns a component-level event for the run loop to turn into core
/// actions, or `None` when the input was absorbed locally.
pub trait EventHandler {
    type Event;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event>;
}
