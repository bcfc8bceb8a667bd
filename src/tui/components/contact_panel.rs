//! # Contact Panel Component
//!
//! Shows the prefilled inquiry after the visitor asks about a work from the
//! overlay. Stands in for the page's contact form: interest field on top,
//! message body below. Esc or Enter dismisses it.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::catalog::Item;
use crate::core::inquiry::{InquiryRequest, prefill};
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::centered_rect;
use crate::tui::event::TuiEvent;

pub struct ContactPanelState {
    pub interest: &'static str,
    pub message: String,
}

impl ContactPanelState {
    /// Prefills from `request`, keeping `previous` text about the same work.
    pub fn new(request: &InquiryRequest, item: &Item, previous: &str) -> Self {
        Self {
            interest: request.interest.form_value(),
            message: prefill(previous, item, request.interest),
        }
    }
}

pub enum ContactEvent {
    Dismiss,
}

impl EventHandler for ContactPanelState {
    type Event = ContactEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<ContactEvent> {
        match event {
            TuiEvent::Escape | TuiEvent::Submit => Some(ContactEvent::Dismiss),
            _ => None,
        }
    }
}

pub struct ContactPanel<'a> {
    pub state: &'a ContactPanelState,
}

impl Component for ContactPanel<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let panel = centered_rect(60, 50, area);
        frame.render_widget(Clear, panel);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(" Contact ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(" Enter/Esc Done ").centered())
            .padding(Padding::horizontal(1));

        let mut lines = vec![
            Line::from(vec![
                Span::styled("Interest: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    self.state.interest,
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::default(),
        ];
        lines.extend(self.state.message.lines().map(|l| Line::from(l.to_string())));

        let paragraph = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, panel);
    }
}
