//! # Carousel Controller
//!
//! Rotates through the featured items. Two states:
//!
//! ```text
//!   Suppressed   featured subset empty: no index, no timer, surface hidden
//!   Active       index ∈ [0, len), auto-advance task while len > 1 and not paused
//! ```
//!
//! Manual navigation (arrows, dots, swipes) restarts the auto-advance task so
//! the next automatic step is a full period away. Hover or focus over the
//! surface pauses it; leaving resumes it with a fresh period.
//!
//! At most one task exists per controller: the old handle is dropped (and so
//! cancelled) before a new one is requested.

use std::time::Duration;

use log::debug;

use crate::core::gesture::Swipe;
use crate::core::sequence::wrap_index;
use crate::core::timer::Scheduler;

pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_millis(8000);

/// Navigation commands accepted by the carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselCommand {
    Next,
    Prev,
    /// Dot selection. Any integer is accepted and wrapped.
    GoTo(isize),
}

struct ActiveCarousel<H> {
    ids: Vec<String>,
    index: usize,
    task: Option<H>,
    paused: bool,
}

enum CarouselState<H> {
    Suppressed,
    Active(ActiveCarousel<H>),
}

pub struct CarouselController<S: Scheduler> {
    scheduler: S,
    period: Duration,
    generation: u64,
    state: CarouselState<S::Handle>,
}

impl<S: Scheduler> CarouselController<S> {
    pub fn new(featured: Vec<String>, scheduler: S, period: Duration) -> Self {
        let mut controller = Self {
            scheduler,
            period,
            generation: 0,
            state: CarouselState::Suppressed,
        };
        controller.reload(featured);
        controller
    }

    /// Replaces the featured subset. An empty subset cancels any task before
    /// returning.
    pub fn reload(&mut self, featured: Vec<String>) {
        let paused = match &self.state {
            CarouselState::Active(active) => active.paused,
            CarouselState::Suppressed => false,
        };
        // Drop the old handle first.
        self.state = CarouselState::Suppressed;

        if featured.is_empty() {
            debug!("Carousel suppressed: no featured items");
            return;
        }
        debug!("Carousel active with {} featured items", featured.len());
        self.state = CarouselState::Active(ActiveCarousel {
            ids: featured,
            index: 0,
            task: None,
            paused,
        });
        self.start_auto_advance();
    }

    pub fn is_suppressed(&self) -> bool {
        matches!(self.state, CarouselState::Suppressed)
    }

    pub fn len(&self) -> usize {
        match &self.state {
            CarouselState::Active(active) => active.ids.len(),
            CarouselState::Suppressed => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self) -> Option<usize> {
        match &self.state {
            CarouselState::Active(active) => Some(active.index),
            CarouselState::Suppressed => None,
        }
    }

    pub fn current_id(&self) -> Option<&str> {
        match &self.state {
            CarouselState::Active(active) => active.ids.get(active.index).map(String::as_str),
            CarouselState::Suppressed => None,
        }
    }

    /// True while a repeating task is outstanding.
    pub fn is_auto_advancing(&self) -> bool {
        matches!(&self.state, CarouselState::Active(active) if active.task.is_some())
    }

    pub fn is_paused(&self) -> bool {
        matches!(&self.state, CarouselState::Active(active) if active.paused)
    }

    /// Generation of the most recently started task.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn handle(&mut self, command: CarouselCommand) {
        match command {
            CarouselCommand::Next => self.next(),
            CarouselCommand::Prev => self.prev(),
            CarouselCommand::GoTo(index) => self.go_to(index),
        }
    }

    pub fn go_to(&mut self, index: isize) {
        if self.set_index(index) {
            self.start_auto_advance();
        }
    }

    pub fn next(&mut self) {
        if let Some(current) = self.index() {
            self.go_to(current as isize + 1);
        }
    }

    pub fn prev(&mut self) {
        if let Some(current) = self.index() {
            self.go_to(current as isize - 1);
        }
    }

    /// Swipe left shows the next slide, swipe right the previous one.
    pub fn swipe(&mut self, swipe: Swipe) {
        match swipe {
            Swipe::Left => self.next(),
            Swipe::Right => self.prev(),
        }
    }

    /// Auto-advance firing. Stale generations are ignored. Returns whether the
    /// slide changed.
    pub fn tick(&mut self, generation: u64) -> bool {
        if generation != self.generation || !self.is_auto_advancing() {
            debug!("Ignoring stale auto-advance tick (generation {})", generation);
            return false;
        }
        match self.index() {
            Some(current) => self.set_index(current as isize + 1),
            None => false,
        }
    }

    /// Hover or focus entered the surface.
    pub fn pause(&mut self) {
        if let CarouselState::Active(active) = &mut self.state
            && !active.paused
        {
            active.paused = true;
            active.task = None;
            debug!("Auto-advance paused");
        }
    }

    /// Hover or focus left the surface.
    pub fn resume(&mut self) {
        if let CarouselState::Active(active) = &mut self.state
            && active.paused
        {
            active.paused = false;
            debug!("Auto-advance resumed");
            self.start_auto_advance();
        }
    }

    /// Click on the active slide: the id to open in the detail view.
    pub fn activate(&self) -> Option<String> {
        self.current_id().map(str::to_string)
    }

    fn set_index(&mut self, index: isize) -> bool {
        let CarouselState::Active(active) = &mut self.state else {
            return false;
        };
        let Some(wrapped) = wrap_index(index, active.ids.len()) else {
            return false;
        };
        active.index = wrapped;
        debug!("Carousel index -> {}", wrapped);
        true
    }

    /// (Re)starts the repeating task, cancelling any prior one first. No task
    /// is started for a single slide or while paused.
    fn start_auto_advance(&mut self) {
        let CarouselState::Active(active) = &mut self.state else {
            return;
        };
        active.task = None;
        if active.paused || active.ids.len() <= 1 {
            return;
        }
        self.generation += 1;
        active.task = Some(self.scheduler.every(self.period, self.generation));
    }
}
