//! Input result type

use serde::Serialize;
use crate::widget::WidgetId;

/// Result of input handling
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum InputResult {
    /// Input was handled by the board
    Handled,
    /// Input hit no widget (pass through to the background)
    Unhandled,
    /// Input should be forwarded to the widget's content component
    Forward {
        /// Target widget
        #[serde(rename = "widgetId")]
        widget_id: WidgetId,
        /// X coordinate in widget-local space
        #[serde(rename = "localX")]
        local_x: f32,
        /// Y coordinate in widget-local space
        #[serde(rename = "localY")]
        local_y: f32,
    },
}

impl InputResult {
    /// Check if input was handled
    #[inline]
    pub fn is_handled(&self) -> bool {
        matches!(self, InputResult::Handled | InputResult::Forward { .. })
    }

    /// Check if input should be forwarded
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, InputResult::Forward { .. })
    }
}
