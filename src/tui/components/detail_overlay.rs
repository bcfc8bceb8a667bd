//! # Detail Overlay Component
//!
//! Full-screen overlay with one work's details, paged with ←/→ or a swipe.
//! Renders a [`DetailView`] snapshot and nothing else; paging state lives in
//! the core's detail navigator.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph};

use crate::core::listing::DetailView;
use crate::tui::component::Component;
use crate::tui::components::{centered_rect, status_style};

/// Where the overlay sits inside the frame.
pub fn overlay_area(frame_area: Rect) -> Rect {
    centered_rect(70, 80, frame_area)
}

pub struct DetailOverlay<'a> {
    pub view: &'a DetailView,
    /// Paging over the whole catalog rather than the filtered grid.
    pub full_catalog: bool,
}

impl DetailOverlay<'_> {
    fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let view = self.view;
        let mut lines = vec![
            Line::from(Span::styled(
                view.title.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(view.meta.clone(), Style::default().fg(Color::Gray))),
            Line::from(Span::styled(view.status_line.clone(), status_style(view.status))),
            Line::default(),
        ];

        if !view.description.is_empty() {
            for wrapped in textwrap::wrap(&view.description, width.max(1)) {
                lines.push(Line::from(wrapped.into_owned()));
            }
            lines.push(Line::default());
        }

        if !view.image.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Image: {}", view.image),
                Style::default().fg(Color::DarkGray),
            )));
        }

        if view.print_available {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Prints",
                Style::default().add_modifier(Modifier::UNDERLINED),
            )));
            let size_width = view
                .print_prices
                .iter()
                .map(|(size, _)| size.chars().count())
                .max()
                .unwrap_or(0);
            for (size, price) in &view.print_prices {
                lines.push(Line::from(format!("  {size:<size_width$}  {price}")));
            }
        }
        lines
    }
}

impl Component for DetailOverlay<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = overlay_area(area);
        frame.render_widget(Clear, overlay);

        let mut title = format!(" {} / {} ", self.view.position + 1, self.view.total);
        if self.full_catalog {
            title.push_str("(all works) ");
        }
        let help = if self.view.print_available {
            " ←/→ Page  i Inquire  p Buy print  Esc Close "
        } else {
            " ←/→ Page  i Inquire  Esc Close "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title)
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help).centered())
            .padding(Padding::horizontal(1));
        let width = block.inner(overlay).width as usize;

        let paragraph = Paragraph::new(self.lines(width)).block(block);
        frame.render_widget(paragraph, overlay);
    }
}
