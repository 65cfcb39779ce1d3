//! Countdown timer

use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

/// Countdown in whole seconds
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Countdown {
    pub time_left: u32,
    pub is_running: bool,
    /// Value `reset` returns to
    pub initial_time: u32,
}

impl Default for Countdown {
    fn default() -> Self {
        Self {
            time_left: Self::DEFAULT_SECONDS,
            is_running: false,
            initial_time: Self::DEFAULT_SECONDS,
        }
    }
}

impl ContentModel for Countdown {
    const KIND: WidgetKind = WidgetKind::Timer;
}

impl Countdown {
    /// Five minutes
    pub const DEFAULT_SECONDS: u32 = 300;
    pub const TICK_MS: u32 = 1000;

    /// Start or pause. Starting with nothing left does nothing.
    pub fn toggle(&mut self) -> Payload {
        if self.is_running || self.time_left > 0 {
            self.is_running = !self.is_running;
        }
        self.patch(&["timeLeft", "isRunning", "initialTime"])
    }

    /// One second elapsed. Returns a patch only when the countdown
    /// finishes; intermediate seconds are not persisted.
    pub fn tick(&mut self) -> Option<Payload> {
        if !self.is_running {
            return None;
        }
        self.time_left = self.time_left.saturating_sub(1);
        if self.time_left == 0 {
            self.is_running = false;
            return Some(self.patch(&["isRunning", "timeLeft"]));
        }
        None
    }

    /// Apply `ticks` elapsed seconds, returning the finishing patch if any
    pub fn advance(&mut self, ticks: u32) -> Option<Payload> {
        (0..ticks).find_map(|_| self.tick())
    }

    /// Stop and return to the initial time
    pub fn reset(&mut self) -> Payload {
        self.is_running = false;
        self.time_left = self.initial_time;
        self.patch(&["isRunning", "timeLeft"])
    }

    /// Shift the initial time by `delta_seconds` (floor 0) and restart
    /// the remaining time from it
    pub fn adjust(&mut self, delta_seconds: i64) -> Payload {
        let adjusted = (i64::from(self.initial_time) + delta_seconds).clamp(0, i64::from(u32::MAX));
        self.initial_time = adjusted as u32;
        self.time_left = self.initial_time;
        self.patch(&["initialTime", "timeLeft"])
    }

    /// Remaining time as `mm:ss`
    pub fn format(&self) -> String {
        format_seconds(self.time_left)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.time_left == 0
    }
}

/// Seconds as zero-padded `mm:ss`; minutes are not wrapped into hours
pub fn format_seconds(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
