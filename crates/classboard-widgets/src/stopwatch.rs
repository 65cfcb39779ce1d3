//! Stopwatch

use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

/// Elapsed-time stopwatch with centisecond display
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stopwatch {
    /// Elapsed milliseconds
    pub time: u64,
    pub running: bool,
}

impl ContentModel for Stopwatch {
    const KIND: WidgetKind = WidgetKind::Stopwatch;
}

impl Stopwatch {
    pub const TICK_MS: u32 = 10;

    /// Start or stop; the elapsed time is persisted with the new state
    pub fn toggle(&mut self) -> Payload {
        self.running = !self.running;
        self.patch(&["time", "running"])
    }

    /// Add `elapsed_ms` while running
    pub fn tick(&mut self, elapsed_ms: u64) {
        if self.running {
            self.time = self.time.saturating_add(elapsed_ms);
        }
    }

    /// Stop and zero
    pub fn reset(&mut self) -> Payload {
        self.running = false;
        self.time = 0;
        self.patch(&["time", "running"])
    }

    /// Elapsed time as `MM:SS.cc`
    pub fn format(&self) -> String {
        let seconds = self.time / 1000;
        format!("{:02}:{:02}.{:02}", seconds / 60, seconds % 60, (self.time % 1000) / 10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runs_only_when_started() {
        let mut watch = Stopwatch::default();
        watch.tick(500);
        assert_eq!(watch.time, 0);

        let patch = watch.toggle();
        assert_eq!(patch.get("running").unwrap(), true);
        watch.tick(1234);
        assert_eq!(watch.format(), "00:01.23");

        let patch = watch.toggle();
        assert_eq!(patch.get("time").unwrap(), 1234);
        watch.tick(100);
        assert_eq!(watch.time, 1234);
    }

    #[test]
    fn test_reset() {
        let mut watch = Stopwatch { time: 61_990, running: true };
        assert_eq!(watch.format(), "01:01.99");
        let patch = watch.reset();
        assert_eq!(patch.get("time").unwrap(), 0);
        assert!(!watch.running);
    }
}
