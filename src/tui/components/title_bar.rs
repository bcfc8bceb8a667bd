//! # TitleBar Component
//!
//! Top status line: gallery name, active filter, status message and the
//! current year.
//!
//! The text changes based on state:
//!
//! 1. **Loading**: `"Gallery | All | Loading artworks... ⟳ | © 2026"`
//! 2. **Status message**: `"Gallery | Sold | 2 artworks | © 2026"`
//! 3. **Default**: `"Gallery | All | © 2026"`

use crate::core::catalog::Filter;
use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::Span;

pub struct TitleBar {
    pub filter: Filter,
    pub status_message: String,
    pub is_loading: bool,
    pub year: i32,
}

impl TitleBar {
    pub fn new(filter: Filter, status_message: String, is_loading: bool, year: i32) -> Self {
        Self {
            filter,
            status_message,
            is_loading,
            year,
        }
    }

    fn text(&self) -> String {
        let mut text = format!("Gallery | {}", self.filter);
        if !self.status_message.is_empty() {
            text.push_str(" | ");
            text.push_str(&self.status_message);
        }
        if self.is_loading {
            text.push_str(" ⟳");
        }
        text.push_str(&format!(" | © {}", self.year));
        text
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let span = Span::styled(self.text(), Style::default().add_modifier(Modifier::BOLD));
        frame.render_widget(span, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_title_text_variants() {
        let bar = TitleBar::new(Filter::Sold, "2 artworks".into(), false, 2026);
        assert_eq!(bar.text(), "Gallery | Sold | 2 artworks | © 2026");

        let bar = TitleBar::new(Filter::All, String::new(), false, 2026);
        assert_eq!(bar.text(), "Gallery | All | © 2026");

        let bar = TitleBar::new(Filter::All, "Loading artworks...".into(), true, 2026);
        assert!(bar.text().contains("Loading artworks... ⟳"));
    }

    #[test]
    fn test_title_bar_renders() {
        let backend = TestBackend::new(60, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| {
                let mut bar = TitleBar::new(Filter::All, "6 artworks".into(), false, 2026);
                bar.render(f, f.area());
            })
            .unwrap();
        let line: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(line.starts_with("Gallery | All | 6 artworks"));
    }
}
