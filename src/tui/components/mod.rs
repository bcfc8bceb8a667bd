//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: gallery name, active filter, status, year
//! - `FilterBar`: the category chips
//! - `CarouselStrip`: the active featured slide with arrows and dots
//! - `DetailOverlay`: the paged detail view of one work
//!
//! ### Stateful Components (Event-Driven)
//!
//! Components that manage local state and emit events:
//! - `Grid`: selectable list of the visible works
//! - `ContactPanel`: the prefilled inquiry, dismissed with Esc/Enter
//!
//! Each component file also owns the hit testing for the area it draws, so
//! mouse handling never has to re-derive another file's geometry.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── title_bar.rs
//! ├── filter_bar.rs
//! ├── carousel_strip.rs
//! ├── grid.rs
//! ├── detail_overlay.rs
//! └── contact_panel.rs
//! ```

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};

use crate::core::catalog::Status;

pub mod carousel_strip;
pub mod contact_panel;
pub mod detail_overlay;
pub mod filter_bar;
pub mod grid;
pub mod title_bar;

pub use carousel_strip::{CarouselStrip, StripHit};
pub use contact_panel::{ContactEvent, ContactPanel, ContactPanelState};
pub use detail_overlay::DetailOverlay;
pub use filter_bar::FilterBar;
pub use grid::{Grid, GridEvent, GridState};
pub use title_bar::TitleBar;

/// Badge colour per status.
pub fn status_style(status: Status) -> Style {
    match status {
        Status::Available => Style::default().fg(Color::Green),
        Status::Reserved => Style::default().fg(Color::Yellow),
        Status::Sold => Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
    }
}

/// Compute a centered rect using percentage of the outer rect.
pub fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}

/// True if the cell `(col, row)` lies inside `area`.
pub fn contains(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.x + area.width && row >= area.y && row < area.y + area.height
}

/// Truncate a string to fit within `max_width` columns, adding "..." if needed.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut width = 0;
    for ch in s.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width - 3 {
            break;
        }
        width += w;
        out.push(ch);
    }
    out.push_str("...");
    out
}
