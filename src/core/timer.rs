//! # Repeating Tasks
//!
//! The carousel's auto-advance is the only scheduled work in the app. It is
//! modeled as a cancellable repeating task behind the [`Scheduler`] trait so
//! the controller can be driven by tokio in the binary and by a manual clock
//! in tests.
//!
//! Ownership rule: a task lives exactly as long as its handle. Dropping the
//! handle cancels the task, so replacing `Option<Handle>` can never leak one.
//!
//! Every task is stamped with a generation number. A tick that was already
//! queued when its task got cancelled still carries the old generation and
//! is discarded by the receiver.

use std::sync::mpsc;
use std::time::Duration;

use log::{debug, warn};

use crate::core::action::Action;

pub trait Scheduler {
    /// Cancels the task when dropped.
    type Handle;

    /// Starts a task that fires every `period`, first firing one full period
    /// from now. Each firing delivers `generation` back to the owner.
    fn every(&mut self, period: Duration, generation: u64) -> Self::Handle;
}

/// Spawns tokio interval tasks that post `Action::AutoAdvanceTick` into the
/// event loop channel.
#[derive(Clone)]
pub struct TokioScheduler {
    tx: mpsc::Sender<Action>,
}

impl TokioScheduler {
    pub fn new(tx: mpsc::Sender<Action>) -> Self {
        Self { tx }
    }
}

/// Aborts the spawned task on drop.
#[derive(Debug)]
pub struct RepeatingTask {
    handle: tokio::task::AbortHandle,
}

impl Drop for RepeatingTask {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

impl Scheduler for TokioScheduler {
    type Handle = RepeatingTask;

    fn every(&mut self, period: Duration, generation: u64) -> RepeatingTask {
        debug!("Scheduling auto-advance every {:?} (generation {})", period, generation);
        let tx = self.tx.clone();
        let task = tokio::spawn(async move {
            let start = tokio::time::Instant::now() + period;
            let mut interval = tokio::time::interval_at(start, period);
            loop {
                interval.tick().await;
                if tx.send(Action::AutoAdvanceTick(generation)).is_err() {
                    warn!("Auto-advance tick dropped: receiver closed");
                    return;
                }
            }
        });
        RepeatingTask {
            handle: task.abort_handle(),
        }
    }
}
