//! Board configuration
//!
//! Every field has a default, so a partial JSON document (or none at all)
//! yields a usable configuration.

use serde::{Deserialize, Serialize};
use crate::error::BoardError;
use crate::math::{Size, Vec2};

/// Storage key the dashboard is saved under
pub const DEFAULT_STORAGE_KEY: &str = "classroom-screen-state";

/// Tunables for geometry, stacking and persistence
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BoardConfig {
    /// Pixels of a widget that must stay on screen while dragging
    pub min_visible: f32,
    /// Smallest size a resize may produce
    pub min_size: Size,
    /// Floor for z-order; the first widget gets `base_z + 1`
    pub base_z: i64,
    /// Position of the first widget on an empty board
    pub cascade_origin: Vec2,
    /// Per-widget offset applied to new widgets on both axes
    pub cascade_step: f32,
    /// Height of the draggable header strip
    pub header_height: f32,
    /// Side of the square resize handle in the bottom-right corner
    pub resize_handle_size: f32,
    /// Side of the square close button in the header
    pub close_button_size: f32,
    /// Key used by the persistence bridge
    pub storage_key: String,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            min_visible: 50.0,
            min_size: Size::new(200.0, 150.0),
            base_z: 10,
            cascade_origin: Vec2::new(100.0, 100.0),
            cascade_step: 20.0,
            header_height: 40.0,
            resize_handle_size: 20.0,
            close_button_size: 24.0,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl BoardConfig {
    /// Parse a (possibly partial) JSON configuration document
    pub fn from_json(json: &str) -> Result<Self, BoardError> {
        serde_json::from_str(json).map_err(|e| BoardError::InvalidConfig(e.to_string()))
    }
}
