//! # Grid Component
//!
//! The visible works as a selectable list of two-line cards:
//!
//! ```text
//! Harbour at Dawn                    2021
//!   Available  $1,200 · 60 x 80 cm · Oil on canvas
//! ```
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GridState` lives in `TuiState`
//! - `Grid` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::core::catalog::Item;
use crate::core::listing::price_text;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::{status_style, truncate_str};
use crate::tui::event::TuiEvent;

/// Lines per card.
const CARD_HEIGHT: u16 = 2;

pub enum GridEvent {
    /// Open the card at this position in the current sequence.
    Open(usize),
}

/// Persistent state for the grid.
#[derive(Default)]
pub struct GridState {
    pub list_state: ListState,
    len: usize,
}

impl GridState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.list_state.selected()
    }

    /// Clamp the selection to a sequence of `len` cards.
    pub fn sync(&mut self, len: usize) {
        self.len = len;
        if len == 0 {
            self.list_state.select(None);
            *self.list_state.offset_mut() = 0;
            return;
        }
        let selected = self.list_state.selected().unwrap_or(0).min(len - 1);
        self.list_state.select(Some(selected));
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.list_state.select(Some(index));
        }
    }

    /// The card under screen row `row` for a grid drawn in `area`.
    pub fn index_at(&self, area: Rect, row: u16) -> Option<usize> {
        let inner = Block::default().borders(Borders::ALL).inner(area);
        if row < inner.y || row >= inner.y + inner.height {
            return None;
        }
        let index = self.list_state.offset() + ((row - inner.y) / CARD_HEIGHT) as usize;
        (index < self.len).then_some(index)
    }
}

impl EventHandler for GridState {
    type Event = GridEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<GridEvent> {
        if self.len == 0 {
            return None;
        }
        match event {
            TuiEvent::Up | TuiEvent::Left => {
                let selected = self.selected().unwrap_or(0).saturating_sub(1);
                self.list_state.select(Some(selected));
                None
            }
            TuiEvent::Down | TuiEvent::Right => {
                let selected = self.selected().map_or(0, |i| (i + 1).min(self.len - 1));
                self.list_state.select(Some(selected));
                None
            }
            TuiEvent::Submit => self.selected().map(GridEvent::Open),
            _ => None,
        }
    }
}

/// Transient render wrapper for the grid.
pub struct Grid<'a> {
    state: &'a mut GridState,
    items: Vec<&'a Item>,
    focused: bool,
}

impl<'a> Grid<'a> {
    pub fn new(state: &'a mut GridState, items: Vec<&'a Item>, focused: bool) -> Self {
        Self {
            state,
            items,
            focused,
        }
    }
}

fn card(item: &Item, width: usize) -> ListItem<'static> {
    let year = item.year.clone().unwrap_or_default();
    let title_width = width.saturating_sub(year.len() + 1);
    let title = truncate_str(&item.title, title_width);
    let padding = " ".repeat(width.saturating_sub(title.chars().count() + year.len()));

    let mut details = Vec::new();
    let price = price_text(item);
    if !price.is_empty() {
        details.push(price);
    }
    details.extend(item.size.iter().cloned());
    details.extend(item.medium.iter().cloned());
    let detail_text = truncate_str(
        &details.join(" · "),
        width.saturating_sub(item.status.label().len() + 4),
    );

    ListItem::new(vec![
        Line::from(vec![
            Span::styled(title, Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(padding),
            Span::styled(year, Style::default().fg(Color::Gray)),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(item.status.label(), status_style(item.status)),
            Span::raw("  "),
            Span::styled(detail_text, Style::default().fg(Color::Gray)),
        ]),
    ])
}

impl Component for Grid<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" Works ({}) ", self.items.len()));

        if self.items.is_empty() {
            let empty = Paragraph::new("No works in this category.")
                .style(Style::default().fg(Color::DarkGray))
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let width = block.inner(area).width as usize;
        let cards: Vec<ListItem> = self.items.iter().map(|item| card(item, width)).collect();
        let list = List::new(cards)
            .block(block)
            .highlight_style(Style::default().bg(Color::DarkGray));
        frame.render_stateful_widget(list, area, &mut self.state.list_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::sample_catalog;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_sync_clamps_selection() {
        let mut state = GridState::new();
        state.sync(5);
        assert_eq!(state.selected(), Some(0));
        state.select(4);
        state.sync(2);
        assert_eq!(state.selected(), Some(1));
        state.sync(0);
        assert_eq!(state.selected(), None);
    }

    #[test]
    fn test_navigation_clamps_and_opens() {
        let mut state = GridState::new();
        state.sync(3);
        state.handle_event(&TuiEvent::Up);
        assert_eq!(state.selected(), Some(0));
        for _ in 0..5 {
            state.handle_event(&TuiEvent::Down);
        }
        assert_eq!(state.selected(), Some(2));
        assert!(matches!(
            state.handle_event(&TuiEvent::Submit),
            Some(GridEvent::Open(2))
        ));
    }

    #[test]
    fn test_empty_grid_ignores_events() {
        let mut state = GridState::new();
        state.sync(0);
        assert!(state.handle_event(&TuiEvent::Submit).is_none());
    }

    #[test]
    fn test_index_at_uses_card_height() {
        let mut state = GridState::new();
        state.sync(6);
        let area = Rect::new(0, 10, 40, 12);
        assert_eq!(state.index_at(area, 10), None); // top border
        assert_eq!(state.index_at(area, 11), Some(0));
        assert_eq!(state.index_at(area, 12), Some(0));
        assert_eq!(state.index_at(area, 13), Some(1));
        assert_eq!(state.index_at(area, 21), None); // bottom border
    }

    #[test]
    fn test_grid_renders_cards() {
        let catalog = sample_catalog();
        let mut state = GridState::new();
        state.sync(catalog.len());
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let items = catalog.items().iter().collect();
                Grid::new(&mut state, items, true).render(f, f.area());
            })
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("Works (6)"));
        assert!(text.contains("Harbour at Dawn"));
        assert!(text.contains("$1,200"));
    }
}
