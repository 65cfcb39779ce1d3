//! Input router state machine

use crate::math::Vec2;
use crate::widget::WidgetId;
use super::DragState;

/// Input router holding the board's single active gesture
pub struct InputRouter {
    /// Current drag state
    drag: Option<DragState>,
}

impl Default for InputRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl InputRouter {
    /// Create a new input router
    pub fn new() -> Self {
        Self { drag: None }
    }

    /// Get current drag state
    #[inline]
    pub fn drag_state(&self) -> Option<&DragState> {
        self.drag.as_ref()
    }

    /// Check if a gesture is active
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Widget targeted by the active gesture
    pub fn target(&self) -> Option<&WidgetId> {
        self.drag.as_ref().map(DragState::widget_id)
    }

    /// Start widget move operation, replacing any active gesture
    pub fn start_widget_move(&mut self, widget_id: WidgetId, offset: Vec2) {
        self.drag = Some(DragState::MoveWidget { widget_id, offset });
    }

    /// Start widget resize operation, replacing any active gesture
    pub fn start_widget_resize(&mut self, widget_id: WidgetId) {
        self.drag = Some(DragState::ResizeWidget { widget_id });
    }

    /// End current drag operation, returning it
    pub fn end_drag(&mut self) -> Option<DragState> {
        self.drag.take()
    }
}
