//! # FilterBar Component
//!
//! One line of category chips: ` 1 All `, ` 2 Available `, ... The active chip
//! is reversed. Chip geometry is computed in one place ([`chip_spans`]) and
//! shared by rendering and hit testing.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::catalog::Filter;
use crate::tui::component::Component;

const CHIP_GAP: u16 = 1;

pub struct FilterBar {
    pub active: Filter,
}

impl FilterBar {
    pub fn new(active: Filter) -> Self {
        Self { active }
    }
}

fn chip_label(position: usize, filter: Filter) -> String {
    format!(" {} {} ", position + 1, filter.label())
}

/// `(filter, start column offset, width)` for each chip.
fn chip_spans() -> Vec<(Filter, u16, u16)> {
    let mut offset = 0u16;
    Filter::ALL
        .iter()
        .enumerate()
        .map(|(position, filter)| {
            let width = chip_label(position, *filter).chars().count() as u16;
            let span = (*filter, offset, width);
            offset += width + CHIP_GAP;
            span
        })
        .collect()
}

/// The chip under column `col`, if any.
pub fn chip_at(area: Rect, col: u16, row: u16) -> Option<Filter> {
    if row != area.y || col < area.x {
        return None;
    }
    let rel = col - area.x;
    chip_spans()
        .into_iter()
        .find(|(_, start, width)| rel >= *start && rel < start + width)
        .map(|(filter, _, _)| filter)
}

/// Filter selected by a digit key (`1`-`4`).
pub fn filter_for_key(c: char) -> Option<Filter> {
    let position = c.to_digit(10)?.checked_sub(1)? as usize;
    Filter::ALL.get(position).copied()
}

impl Component for FilterBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = Vec::new();
        for (position, filter) in Filter::ALL.iter().enumerate() {
            let style = if *filter == self.active {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(Color::Gray)
            };
            if position > 0 {
                spans.push(Span::raw(" ".repeat(CHIP_GAP as usize)));
            }
            spans.push(Span::styled(chip_label(position, *filter), style));
        }
        frame.render_widget(Line::from(spans), area);
    }
}
