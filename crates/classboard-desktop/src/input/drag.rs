//! Drag state for input operations

use crate::math::Vec2;
use crate::widget::WidgetId;

/// Current gesture. There is at most one per board, since a single pointer
/// drives both moving and resizing.
#[derive(Clone, Debug, PartialEq)]
pub enum DragState {
    /// Moving a widget by its header
    MoveWidget {
        /// Widget being moved
        widget_id: WidgetId,
        /// Offset from widget origin to cursor
        offset: Vec2,
    },
    /// Resizing a widget by its bottom-right handle
    ResizeWidget {
        /// Widget being resized
        widget_id: WidgetId,
    },
}

impl DragState {
    /// Check if this is a widget move operation
    #[inline]
    pub fn is_move(&self) -> bool {
        matches!(self, DragState::MoveWidget { .. })
    }

    /// Check if this is a widget resize operation
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, DragState::ResizeWidget { .. })
    }

    /// Get the target widget ID
    pub fn widget_id(&self) -> &WidgetId {
        match self {
            DragState::MoveWidget { widget_id, .. } => widget_id,
            DragState::ResizeWidget { widget_id } => widget_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_widget_state() {
        let state = DragState::MoveWidget {
            widget_id: WidgetId::from_seq(42),
            offset: Vec2::new(10.0, 20.0),
        };

        assert!(state.is_move());
        assert!(!state.is_resize());
        assert_eq!(state.widget_id().as_str(), "widget-42");
    }

    #[test]
    fn test_resize_widget_state() {
        let state = DragState::ResizeWidget {
            widget_id: WidgetId::from_seq(123),
        };

        assert!(!state.is_move());
        assert!(state.is_resize());
        assert_eq!(state.widget_id().as_str(), "widget-123");
    }

    #[test]
    fn test_move_widget_offset() {
        let state = DragState::MoveWidget {
            widget_id: WidgetId::from_seq(1),
            offset: Vec2::new(15.5, 25.5),
        };

        if let DragState::MoveWidget { offset, .. } = state {
            assert!((offset.x - 15.5).abs() < 0.001);
            assert!((offset.y - 25.5).abs() < 0.001);
        } else {
            panic!("Expected MoveWidget state");
        }
    }
}
