use chrono::Datelike;
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::listing::DetailView;
use crate::core::state::App;
use crate::core::timer::Scheduler;
use crate::tui::component::Component;
use crate::tui::components::carousel_strip::STRIP_HEIGHT;
use crate::tui::components::{
    CarouselStrip, ContactPanel, DetailOverlay, FilterBar, Grid, TitleBar,
};
use crate::tui::{Focus, TuiState};

/// Screen regions. Computed once per frame and reused for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GalleryLayout {
    pub title: Rect,
    pub filters: Rect,
    /// `None` while the carousel is suppressed.
    pub carousel: Option<Rect>,
    pub grid: Rect,
    pub footer: Rect,
}

pub fn layout(area: Rect, carousel_visible: bool) -> GalleryLayout {
    use Constraint::{Length, Min};
    let strip_height = if carousel_visible { STRIP_HEIGHT } else { 0 };
    let [title, filters, carousel, grid, footer] =
        Layout::vertical([Length(1), Length(1), Length(strip_height), Min(0), Length(1)])
            .areas(area);
    GalleryLayout {
        title,
        filters,
        carousel: carousel_visible.then_some(carousel),
        grid,
        footer,
    }
}

fn help_text(tui: &TuiState, overlay: Option<&DetailView>) -> &'static str {
    if tui.contact.is_some() {
        "Enter/Esc Done"
    } else if let Some(view) = overlay {
        if view.print_available {
            "←/→ Page  i Inquire  p Buy print  Esc Close  q Quit"
        } else {
            "←/→ Page  i Inquire  Esc Close  q Quit"
        }
    } else if tui.focus == Focus::Carousel {
        "←/→ Slide  Enter Open  Tab Grid  1-4/f Filter  r Reload  q Quit"
    } else {
        "↑/↓ Select  Enter Open  Tab Carousel  1-4/f Filter  r Reload  q Quit"
    }
}

pub fn draw_ui<S: Scheduler>(frame: &mut Frame, app: &App<S>, tui: &mut TuiState) {
    let regions = layout(frame.area(), app.is_carousel_visible());

    let year = chrono::Local::now().year();
    TitleBar::new(app.filter(), app.status_message.clone(), app.is_loading, year)
        .render(frame, regions.title);
    FilterBar::new(app.filter()).render(frame, regions.filters);

    if let Some(area) = regions.carousel {
        let mut strip = CarouselStrip {
            slide: app
                .carousel
                .current_id()
                .and_then(|id| app.catalog().get(id)),
            index: app.carousel.index().unwrap_or(0),
            len: app.carousel.len(),
            paused: app.carousel.is_paused(),
            focused: tui.focus == Focus::Carousel,
        };
        strip.render(frame, area);
    }

    tui.grid.sync(app.sequence.len());
    let items = app.visible_items().collect();
    Grid::new(&mut tui.grid, items, tui.focus == Focus::Grid).render(frame, regions.grid);

    frame.render_widget(
        Span::styled(
            help_text(tui, app.detail_view.as_ref()),
            Style::default().fg(Color::DarkGray),
        ),
        regions.footer,
    );

    if let Some(view) = &app.detail_view {
        let mut overlay = DetailOverlay {
            view,
            full_catalog: app.detail.scope() == crate::core::detail::Scope::FullCatalog,
        };
        overlay.render(frame, frame.area());
    }

    if let Some(state) = &tui.contact {
        ContactPanel { state }.render(frame, frame.area());
    }
}
