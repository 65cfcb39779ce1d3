//! Live clock

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use classboard_desktop::WidgetKind;
use crate::ContentModel;

/// Wall clock; keeps no state of its own
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveClock {}

impl ContentModel for LiveClock {
    const KIND: WidgetKind = WidgetKind::Clock;
}

impl LiveClock {
    pub const TICK_MS: u32 = 1000;

    /// Time of day as `HH:MM:SS`
    pub fn display(now: NaiveTime) -> String {
        now.format("%H:%M:%S").to_string()
    }
}
