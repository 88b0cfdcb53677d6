//! Search limits and the optional move-time deadline.
//!
//! Depth is the primary bound on search work. A move time is an optional
//! extra: once it expires the shared stop flag is raised and every worker
//! still inside the recursion falls back to static evaluation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// How far (and optionally how long) a single search may go.
#[derive(Debug, Clone)]
pub struct SearchLimits {
    /// Search depth in plies (half-moves), or `None` for the engine's
    /// configured depth
    pub depth: Option<u8>,
    /// Maximum time allowed for this move (None = depth only)
    pub move_time: Option<Duration>,
    /// Stop flag and clock shared by every search worker
    pub time_control: TimeControl,
}

impl SearchLimits {
    /// Create limits with only depth constraint (no time limit).
    pub fn depth(depth: u8) -> Self {
        Self {
            depth: Some(depth),
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }

    /// Create limits with both depth and time constraints.
    pub fn depth_and_time(depth: u8, move_time: Duration) -> Self {
        Self {
            depth: Some(depth),
            move_time: Some(move_time),
            time_control: TimeControl::new(Some(move_time)),
        }
    }

    /// Start the clock. Call this when search begins.
    pub fn start(&self) {
        self.time_control.start();
    }
}

impl Default for SearchLimits {
    /// Engine's own depth, no time limit.
    fn default() -> Self {
        Self {
            depth: None,
            move_time: None,
            time_control: TimeControl::new(None),
        }
    }
}

/// Thread-safe stop flag with an optional deadline.
///
/// Clones share the flag and the deadline, so one instance can be handed to
/// every rayon worker. `is_stopped` is a relaxed atomic load; the clock itself
/// is only read every `check_interval` nodes.
#[derive(Debug, Clone)]
pub struct TimeControl {
    stopped: Arc<AtomicBool>,
    deadline: Arc<RwLock<Option<Instant>>>,
    budget: Option<Duration>,
    check_interval: u64,
}

impl TimeControl {
    pub fn new(budget: Option<Duration>) -> Self {
        Self {
            stopped: Arc::new(AtomicBool::new(false)),
            deadline: Arc::new(RwLock::new(None)),
            budget,
            check_interval: 1024,
        }
    }

    /// Clears the stop flag and arms the deadline, if there is a budget.
    pub fn start(&self) {
        let deadline = self.budget.map(|b| Instant::now() + b);
        *self
            .deadline
            .write()
            .unwrap_or_else(PoisonError::into_inner) = deadline;
        self.stopped.store(false, Ordering::SeqCst);
    }

    /// Force stop the search immediately.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
    }

    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// Reads the clock and raises the stop flag once the deadline passed.
    /// Returns whether the search should stop.
    pub fn check_time(&self) -> bool {
        if self.is_stopped() {
            return true;
        }

        let deadline = *self
            .deadline
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        if let Some(deadline) = deadline
            && Instant::now() >= deadline
        {
            self.stop();
            return true;
        }

        false
    }

    /// True every `check_interval` nodes.
    #[inline]
    pub fn should_check_time(&self, nodes: u64) -> bool {
        self.budget.is_some() && nodes.is_multiple_of(self.check_interval)
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
