//! # Gesture Recognizer
//!
//! Turns a drag (press, moves, release) into a horizontal swipe direction.
//! One recognizer is attached to each surface; they share nothing.
//!
//! ```text
//!            start(p, src)                 end(src)
//!   Idle ───────────────────▶ Dragging ───────────────▶ Idle
//!                              │    ▲                   emits Swipe / nothing
//!                              └────┘ move(p, src): keep latest point only
//! ```
//!
//! Events from a source other than the one that started the drag are ignored
//! until that drag ends, so a touch and a synthetic pointer stream for the same
//! finger never double count. A second start from the same source means the
//! previous release was lost; the drag restarts from the new point.

use log::debug;

/// Minimum horizontal travel for a swipe, in distance units.
pub const SWIPE_THRESHOLD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Pointer,
    Touch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Left,
    Right,
}

/// Raw drag input for a single surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start(Point, InputSource),
    Move(Point, InputSource),
    End(InputSource),
    /// The platform aborted the drag (focus loss, pointer capture lost).
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureState {
    Idle,
    Dragging {
        origin: Point,
        last: Point,
        source: InputSource,
    },
}

#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    state: GestureState,
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureRecognizer {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, GestureState::Dragging { .. })
    }

    /// Feed one event. Returns a swipe only on a completed drag.
    pub fn handle(&mut self, event: GestureEvent) -> Option<Swipe> {
        match event {
            GestureEvent::Start(point, source) => {
                self.start(point, source);
                None
            }
            GestureEvent::Move(point, source) => {
                self.move_to(point, source);
                None
            }
            GestureEvent::End(source) => self.end(source),
            GestureEvent::Cancel => {
                self.state = GestureState::Idle;
                None
            }
        }
    }

    pub fn start(&mut self, point: Point, source: InputSource) {
        if let GestureState::Dragging { source: active, .. } = self.state
            && active != source
        {
            return;
        }
        self.state = GestureState::Dragging {
            origin: point,
            last: point,
            source,
        };
    }

    pub fn move_to(&mut self, point: Point, from: InputSource) {
        if let GestureState::Dragging { last, source, .. } = &mut self.state
            && *source == from
        {
            *last = point;
        }
    }

    pub fn end(&mut self, from: InputSource) -> Option<Swipe> {
        let GestureState::Dragging {
            origin,
            last,
            source,
        } = self.state
        else {
            return None;
        };
        if source != from {
            return None;
        }
        self.state = GestureState::Idle;

        let swipe = classify(last.x - origin.x, last.y - origin.y);
        debug!(
            "Drag ended: dx={:.1} dy={:.1} -> {:?}",
            last.x - origin.x,
            last.y - origin.y,
            swipe
        );
        swipe
    }
}

/// Horizontal-dominant travel of at least [`SWIPE_THRESHOLD`] is a swipe.
pub fn classify(dx: f64, dy: f64) -> Option<Swipe> {
    if dx.abs() < dy.abs() {
        return None;
    }
    if dx <= -SWIPE_THRESHOLD {
        Some(Swipe::Left)
    } else if dx >= SWIPE_THRESHOLD {
        Some(Swipe::Right)
    } else {
        None
    }
}
