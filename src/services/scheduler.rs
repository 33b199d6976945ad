//! Pause before a generation completes.
//!
//! The delay only exists for perceived responsiveness in front ends; tests
//! swap in [`ImmediateScheduler`].

use std::sync::{Arc, Mutex};
use std::time::Duration;

pub trait Scheduler {
    fn pause(&self, duration: Duration);
}

/// Blocks the calling thread for the requested duration.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadScheduler;

impl Scheduler for ThreadScheduler {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            std::thread::sleep(duration);
        }
    }
}

/// Returns immediately and records every requested pause.
#[derive(Debug, Default, Clone)]
pub struct ImmediateScheduler {
    requested: Arc<Mutex<Vec<Duration>>>,
}

impl ImmediateScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pauses requested so far, oldest first.
    pub fn requested(&self) -> Vec<Duration> {
        self.requested
            .lock()
            .map(|r| r.clone())
            .unwrap_or_default()
    }
}

impl Scheduler for ImmediateScheduler {
    fn pause(&self, duration: Duration) {
        if let Ok(mut requested) = self.requested.lock() {
            requested.push(duration);
        }
    }
}
