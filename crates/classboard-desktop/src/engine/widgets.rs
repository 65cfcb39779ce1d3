//! Widget lifecycle and operations

use tracing::{debug, info};
use crate::widget::{CreateOutcome, Payload, WidgetId, WidgetInstance, WidgetKind};
use super::{BoardEngine, ContentHooks};

impl BoardEngine {
    /// Add a widget of `kind`, or focus the existing singleton
    pub fn add_widget(&mut self, kind: WidgetKind) -> CreateOutcome {
        let outcome = self.widgets.create(kind);
        if let CreateOutcome::FocusExisting(id) = &outcome {
            debug!(id = %id, "singleton already open, focused instead");
        }
        outcome
    }

    /// Bring a widget to the front
    pub fn focus_widget(&mut self, id: &WidgetId) -> bool {
        self.widgets.focus(id)
    }

    /// Close a widget, releasing its content resources.
    ///
    /// An active gesture targeting the widget ends with it.
    pub fn close_widget(&mut self, id: &WidgetId) -> Option<WidgetInstance> {
        let removed = self.widgets.close(id)?;
        self.teardown_content(id);
        if self.input.target() == Some(id) {
            self.input.end_drag();
        }
        info!(id = %id, kind = removed.kind.id(), "widget closed");
        Some(removed)
    }

    /// Remove every widget. Returns how many were removed.
    pub fn clear(&mut self) -> usize {
        let removed = self.widgets.clear();
        self.teardown_all_content();
        self.input.end_drag();
        info!(count = removed.len(), "board cleared");
        removed.len()
    }

    /// Shallow-merge `patch` into a widget's payload
    pub fn update_payload(&mut self, id: &WidgetId, patch: Payload) -> bool {
        self.widgets.update_payload(id, patch)
    }

    /// Register the content resources of a widget.
    ///
    /// Hooks for an unknown widget are torn down immediately; hooks already
    /// registered for the widget are torn down and replaced.
    pub fn attach_content(&mut self, id: &WidgetId, mut hooks: Box<dyn ContentHooks>) -> bool {
        if self.widgets.get(id).is_none() {
            hooks.teardown();
            return false;
        }
        if let Some(mut previous) = self.content.insert(id.clone(), hooks) {
            previous.teardown();
        }
        true
    }

    /// Check whether a widget has registered content resources
    pub fn has_content(&self, id: &WidgetId) -> bool {
        self.content.contains_key(id)
    }

    fn teardown_content(&mut self, id: &WidgetId) {
        if let Some(mut hooks) = self.content.remove(id) {
            hooks.teardown();
        }
    }

    pub(crate) fn teardown_all_content(&mut self) {
        for (_, mut hooks) in self.content.drain() {
            hooks.teardown();
        }
    }
}
