//! # Core Application Logic
//!
//! This module contains the gallery's navigation and interaction state.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No UI. Timers behind   │
//!                    │  the Scheduler trait.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    Web     │      │   Tests    │
//!     │  Adapter   │      │  Adapter   │      │  (manual   │
//!     │ (ratatui)  │      │  (future)  │      │ scheduler) │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! Data flows one way: catalog → sequence → {carousel, detail}. Gestures
//! become swipe commands for whichever surface they were attached to.
//!
//! ## Modules
//!
//! - [`catalog`]: items, the filter, and the store that owns them
//! - [`sequence`]: the filtered id list and wraparound arithmetic
//! - [`carousel`]: featured slides and the auto-advance lifecycle
//! - [`detail`]: the overlay's paging state
//! - [`gesture`]: drag → swipe classification
//! - [`timer`]: cancellable repeating tasks
//! - [`state`]: the `App` struct, all core state in one place
//! - [`action`]: the `Action` enum and `update()`

pub mod action;
pub mod carousel;
pub mod catalog;
pub mod config;
pub mod detail;
pub mod gesture;
pub mod inquiry;
pub mod listing;
pub mod loader;
pub mod sequence;
pub mod state;
pub mod timer;
