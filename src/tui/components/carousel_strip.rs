//! # CarouselStrip Component
//!
//! Shows the active featured slide with prev/next arrows at the edges and a
//! row of dots along the bottom. Hidden entirely when the carousel is
//! suppressed.
//!
//! ```text
//! ┌ Featured 2/3 ─────────────────────────────┐
//! │‹            Dune                         ›│
//! │             2019                          │
//! │       Reserved • Request price            │
//! │                                           │
//! │                 ○ ● ○                     │
//! └───────────────────────────────────────────┘
//! ```

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::catalog::Item;
use crate::core::listing::{meta_line, price_text};
use crate::tui::component::Component;
use crate::tui::components::{status_style, truncate_str};

/// Total height including borders.
pub const STRIP_HEIGHT: u16 = 7;

/// What a click on the strip landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripHit {
    Prev,
    Next,
    Dot(usize),
    Slide,
}

pub struct CarouselStrip<'a> {
    pub slide: Option<&'a Item>,
    pub index: usize,
    pub len: usize,
    pub paused: bool,
    pub focused: bool,
}

fn inner(area: Rect) -> Rect {
    Block::default().borders(Borders::ALL).inner(area)
}

fn dots_row(inner: Rect) -> u16 {
    inner.y + inner.height.saturating_sub(1)
}

fn dots_start(inner: Rect, len: usize) -> u16 {
    let dots_width = (len as u16).saturating_mul(2).saturating_sub(1);
    inner.x + inner.width.saturating_sub(dots_width) / 2
}

/// Classifies a click at `(col, row)` on a strip drawn in `area`.
pub fn hit_test(area: Rect, len: usize, col: u16, row: u16) -> Option<StripHit> {
    let inner = inner(area);
    if inner.width == 0 || inner.height == 0 || !super::contains(inner, col, row) {
        return None;
    }

    if row == dots_row(inner) && len > 0 {
        let start = dots_start(inner, len);
        if col >= start {
            let rel = (col - start) as usize;
            if rel % 2 == 0 && rel / 2 < len {
                return Some(StripHit::Dot(rel / 2));
            }
        }
        return None;
    }
    if col == inner.x {
        return Some(StripHit::Prev);
    }
    if col == inner.x + inner.width - 1 {
        return Some(StripHit::Next);
    }
    Some(StripHit::Slide)
}

impl Component for CarouselStrip<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut title = format!(" Featured {}/{} ", self.index + 1, self.len);
        if self.paused {
            title.push_str("⏸ ");
        }
        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(title);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(item) = self.slide else {
            return;
        };
        if inner.width < 3 || inner.height == 0 {
            return;
        }

        let body_width = inner.width - 2;
        let body = Rect::new(inner.x + 1, inner.y, body_width, inner.height.saturating_sub(1));
        let mut status = item.status.label().to_string();
        let price = price_text(item);
        if !price.is_empty() {
            status.push_str(" • ");
            status.push_str(&price);
        }
        let lines = vec![
            Line::from(Span::styled(
                truncate_str(&item.title, body_width as usize),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                truncate_str(&meta_line(item), body_width as usize),
                Style::default().fg(Color::Gray),
            )),
            Line::from(Span::styled(status, status_style(item.status))),
        ];
        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), body);

        let arrow_row = inner.y + inner.height.saturating_sub(1) / 2;
        let arrow_style = Style::default().fg(Color::Gray);
        frame.render_widget(
            Span::styled("‹", arrow_style),
            Rect::new(inner.x, arrow_row, 1, 1),
        );
        frame.render_widget(
            Span::styled("›", arrow_style),
            Rect::new(inner.x + inner.width - 1, arrow_row, 1, 1),
        );

        // Placed cell by cell so rendering and `hit_test` share one geometry.
        let start = dots_start(inner, self.len);
        let row = dots_row(inner);
        for i in 0..self.len {
            let x = start + 2 * i as u16;
            if x >= inner.x + inner.width {
                break;
            }
            let dot = if i == self.index {
                Span::styled("●", Style::default().fg(Color::White))
            } else {
                Span::styled("○", Style::default().fg(Color::DarkGray))
            };
            frame.render_widget(dot, Rect::new(x, row, 1, 1));
        }
    }
}
