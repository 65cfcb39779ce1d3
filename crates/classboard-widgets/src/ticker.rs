//! Cancellable periodic task
//!
//! The host advances a ticker with the time elapsed since its last frame;
//! the ticker reports how many whole intervals passed. A [`TickerHandle`]
//! shares the cancel flag so the board can stop the ticker when its widget
//! is closed.

use std::cell::Cell;
use std::rc::Rc;
use classboard_desktop::ContentHooks;

/// Periodic task owned by one widget
#[derive(Debug)]
pub struct Ticker {
    interval_ms: u32,
    /// Time carried over from previous advances, always below one interval
    accumulated_ms: f64,
    cancelled: Rc<Cell<bool>>,
}

impl Ticker {
    /// Create a ticker firing every `interval_ms` (at least 1 ms)
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            accumulated_ms: 0.0,
            cancelled: Rc::new(Cell::new(false)),
        }
    }

    #[inline]
    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Advance by `elapsed_ms`, returning the number of intervals that
    /// completed. A cancelled ticker never fires.
    pub fn advance(&mut self, elapsed_ms: f64) -> u32 {
        if self.is_cancelled() || !elapsed_ms.is_finite() || elapsed_ms <= 0.0 {
            return 0;
        }

        let interval = f64::from(self.interval_ms);
        self.accumulated_ms += elapsed_ms;
        let fired = (self.accumulated_ms / interval).floor();
        self.accumulated_ms -= fired * interval;
        fired as u32
    }

    /// Drop any partial interval, e.g. when the task is restarted
    pub fn restart(&mut self) {
        self.accumulated_ms = 0.0;
    }

    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }

    /// Handle sharing this ticker's cancel flag
    pub fn handle(&self) -> TickerHandle {
        TickerHandle(Rc::clone(&self.cancelled))
    }
}

impl ContentHooks for Ticker {
    fn teardown(&mut self) {
        self.cancel();
    }
}

/// Cancels its ticker on teardown
#[derive(Clone, Debug)]
pub struct TickerHandle(Rc<Cell<bool>>);

impl TickerHandle {
    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

impl ContentHooks for TickerHandle {
    fn teardown(&mut self) {
        self.0.set(true);
    }
}
