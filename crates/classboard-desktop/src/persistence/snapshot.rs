//! Dashboard snapshot

use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::background::BackgroundSettings;
use crate::widget::WidgetInstance;

/// Everything saved and restored as one unit
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Version for migration support (0 = written before versioning)
    #[serde(default)]
    pub version: u32,
    /// Widgets in creation order
    #[serde(default)]
    pub widgets: Vec<WidgetInstance>,
    /// Board background
    #[serde(default)]
    pub background: BackgroundSettings,
}

impl DashboardState {
    /// Current snapshot version
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a new snapshot
    pub fn new(widgets: Vec<WidgetInstance>, background: BackgroundSettings) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            widgets,
            background,
        }
    }

    /// Check if snapshot needs migration
    pub fn needs_migration(&self) -> bool {
        self.version < Self::CURRENT_VERSION
    }

    /// Migrate snapshot to current version.
    ///
    /// Version 0 records differ only in field names and missing sizes,
    /// which the decoder already normalises.
    pub fn migrate(&mut self) {
        if self.needs_migration() {
            warn!(from = self.version, to = Self::CURRENT_VERSION, "migrating saved dashboard");
        }
        self.version = Self::CURRENT_VERSION;
    }
}
