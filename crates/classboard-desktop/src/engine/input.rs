//! Input handling for pointer events and drag operations

use tracing::debug;
use crate::input::{calculate_resize, clamp_drag_position, DragState, InputResult};
use crate::math::Vec2;
use crate::widget::{WidgetId, WidgetRegion};
use super::BoardEngine;

impl BoardEngine {
    /// Start moving a widget by its header
    pub fn begin_drag(&mut self, id: &WidgetId, x: f32, y: f32) {
        let position = match self.widgets.get(id) {
            Some(widget) => widget.position,
            None => return,
        };

        self.widgets.focus(id);
        self.input.start_widget_move(id.clone(), Vec2::new(x, y) - position);
        debug!(id = %id, "drag started");
    }

    /// Start resizing a widget by its corner handle.
    ///
    /// The pointer is applied immediately.
    pub fn begin_resize(&mut self, id: &WidgetId, x: f32, y: f32) {
        if self.widgets.get(id).is_none() {
            return;
        }

        self.widgets.focus(id);
        self.input.start_widget_resize(id.clone());
        self.apply_resize(id, Vec2::new(x, y));
        debug!(id = %id, "resize started");
    }

    /// Handle pointer down
    pub fn handle_pointer_down(&mut self, x: f32, y: f32) -> InputResult {
        let pos = Vec2::new(x, y);
        let (widget_id, region) = match self.widgets.region_at(pos) {
            Some((id, region)) => (id.clone(), region),
            None => return InputResult::Unhandled,
        };

        self.widgets.focus(&widget_id);
        match region {
            WidgetRegion::CloseButton => {
                self.close_widget(&widget_id);
                InputResult::Handled
            }
            WidgetRegion::Header => {
                self.begin_drag(&widget_id, x, y);
                InputResult::Handled
            }
            WidgetRegion::ResizeHandle => {
                self.begin_resize(&widget_id, x, y);
                InputResult::Handled
            }
            WidgetRegion::Content => self.handle_content_click(widget_id, pos),
        }
    }

    /// Forward a click in the content area to the content component
    fn handle_content_click(&mut self, widget_id: WidgetId, pos: Vec2) -> InputResult {
        let position = match self.widgets.get(&widget_id) {
            Some(w) => w.position,
            None => return InputResult::Unhandled,
        };

        let local = pos - position;
        InputResult::Forward {
            widget_id,
            local_x: local.x,
            local_y: local.y,
        }
    }

    /// Handle pointer move
    pub fn handle_pointer_move(&mut self, x: f32, y: f32) -> InputResult {
        let pointer = Vec2::new(x, y);

        let drag_state = match self.input.drag_state() {
            Some(state) => state.clone(),
            None => return InputResult::Unhandled,
        };

        match drag_state {
            DragState::MoveWidget { widget_id, offset } => {
                let position = clamp_drag_position(pointer - offset, self.viewport, self.config().min_visible);
                self.widgets.move_widget(&widget_id, position);
            }
            DragState::ResizeWidget { widget_id } => {
                self.apply_resize(&widget_id, pointer);
            }
        }
        InputResult::Handled
    }

    /// Handle pointer up
    pub fn handle_pointer_up(&mut self) -> InputResult {
        match self.input.end_drag() {
            Some(_) => InputResult::Handled,
            None => InputResult::Unhandled,
        }
    }

    /// Handle the pointer leaving the board. Ends a gesture exactly like
    /// pointer up.
    pub fn handle_pointer_leave(&mut self) -> InputResult {
        self.handle_pointer_up()
    }

    /// End an active move. A resize in progress is left alone.
    pub fn end_drag(&mut self) -> bool {
        if self.input.drag_state().is_some_and(DragState::is_move) {
            self.input.end_drag();
            return true;
        }
        false
    }

    /// End an active resize. A move in progress is left alone.
    pub fn end_resize(&mut self) -> bool {
        if self.input.drag_state().is_some_and(DragState::is_resize) {
            self.input.end_drag();
            return true;
        }
        false
    }

    fn apply_resize(&mut self, id: &WidgetId, pointer: Vec2) {
        let position = match self.widgets.get(id) {
            Some(widget) => widget.position,
            None => return,
        };
        let size = calculate_resize(position, pointer, self.config().min_size);
        self.widgets.resize(id, size);
    }
}
