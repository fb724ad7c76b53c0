//! Search limits: a ply bound plus an optional wall-clock budget.
//!
//! Depth is always enforced. A move time is an optional extra: when it runs
//! out the engine keeps whatever it had fully searched so far.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Limits handed to [`crate::Engine::search`].
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Maximum search depth in plies, at least 1
    pub depth: u8,
    /// Maximum time allowed for this move (None = run to completion)
    pub move_time: Option<Duration>,
    pub time_control: TimeControl,
}

impl SearchLimits {
    pub fn depth(depth: u8) -> Self {
        Self {
            depth,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth,
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Start the clock. Call when the search begins.
    pub fn start(&mut self) {
        self.time_control.start();
    }

    #[inline]
    pub fn should_stop(&self) -> bool {
        self.time_control.is_stopped()
    }
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self::depth(5)
    }
}

/// Deadline tracker with a shared stop flag.
///
/// The flag can be raised from another thread through [`TimeControl::stop_handle`].
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    started: Option<Instant>,
    time_limit: Option<Duration>,
    /// Clock is read once per this many nodes.
    check_interval: u64,
}

impl TimeControl {
    pub fn new(time_limit: Option<Duration>) -> Self {
        Self::with_check_interval(time_limit, 1024)
    }

    /// Read the clock every `interval` nodes instead of the default 1024.
    pub fn with_check_interval(time_limit: Option<Duration>, interval: u64) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            started: None,
            time_limit,
            check_interval: interval.max(1),
        }
    }

    pub fn start(&mut self) {
        self.started = Some(Instant::now());
        self.stopped.store(false, Ordering::SeqCst);
    }

    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    pub fn stop_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.stopped)
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Read the clock and raise the stop flag if the budget is spent.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }
        match (self.time_limit, self.started) {
            (Some(limit), Some(start)) if start.elapsed() >= limit => {
                self.stop();
                true
            }
            _ => false,
        }
    }

    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        nodes % self.check_interval == 0
    }

    pub fn elapsed(&self) -> Duration {
        self.started.map(|s| s.elapsed()).unwrap_or(Duration::ZERO)
    }
}

impl Default for TimeControl {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
#[path = "time_control_tests.rs"]
mod time_control_tests;
