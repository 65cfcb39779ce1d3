//! Widget manager for creation, focus, z-order and hit testing

use std::collections::HashSet;
use tracing::debug;
use crate::config::BoardConfig;
use crate::math::{Size, Vec2};
use super::{first_free_seq, Payload, WidgetId, WidgetInstance, WidgetKind, WidgetRegion};

/// Result of asking the registry for a new widget
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new widget was added
    Created(WidgetId),
    /// A singleton of that kind already exists and was focused instead
    FocusExisting(WidgetId),
}

impl CreateOutcome {
    /// Identifier of the widget that ended up on top
    pub fn id(&self) -> &WidgetId {
        match self {
            CreateOutcome::Created(id) | CreateOutcome::FocusExisting(id) => id,
        }
    }

    #[inline]
    pub fn is_created(&self) -> bool {
        matches!(self, CreateOutcome::Created(_))
    }
}

/// Owner of the live widget collection.
///
/// The only writer of widget position, size and z-order. Widgets are kept
/// in creation order, which is also the order they are saved in.
pub struct WidgetManager {
    /// All widgets in creation order
    widgets: Vec<WidgetInstance>,
    /// Counter for the next generated identifier; `None` once it has run
    /// past `u64::MAX`
    next_seq: Option<u64>,
    /// Geometry and stacking tunables
    config: BoardConfig,
}

impl Default for WidgetManager {
    fn default() -> Self {
        Self::new(BoardConfig::default())
    }
}

impl WidgetManager {
    /// Create a new, empty widget manager
    pub fn new(config: BoardConfig) -> Self {
        Self {
            widgets: Vec::new(),
            next_seq: Some(1),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Create a widget of `kind`, or focus the existing singleton
    pub fn create(&mut self, kind: WidgetKind) -> CreateOutcome {
        if kind.is_singleton() {
            if let Some(existing) = self.find_kind(&kind).map(|w| w.id.clone()) {
                self.focus(&existing);
                return CreateOutcome::FocusExisting(existing);
            }
        }

        let id = WidgetId::from_seq(self.allocate_seq());
        let z_order = self.next_z();

        let offset = self.config.cascade_step * self.widgets.len() as f32;
        let widget = WidgetInstance {
            id: id.clone(),
            position: self.config.cascade_origin + Vec2::splat(offset),
            size: kind.default_size(),
            z_order,
            payload: Payload::new(),
            kind,
        };

        debug!(id = %id, kind = widget.kind.id(), z = widget.z_order, "widget created");
        self.widgets.push(widget);
        CreateOutcome::Created(id)
    }

    /// Remove a widget, returning it if it existed
    pub fn close(&mut self, id: &WidgetId) -> Option<WidgetInstance> {
        let index = self.index_of(id)?;
        Some(self.widgets.remove(index))
    }

    /// Remove every widget
    pub fn clear(&mut self) -> Vec<WidgetInstance> {
        std::mem::take(&mut self.widgets)
    }

    /// Get a widget by ID
    pub fn get(&self, id: &WidgetId) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| &w.id == id)
    }

    /// Get a mutable widget by ID
    pub fn get_mut(&mut self, id: &WidgetId) -> Option<&mut WidgetInstance> {
        self.widgets.iter_mut().find(|w| &w.id == id)
    }

    /// First widget of the given kind
    pub fn find_kind(&self, kind: &WidgetKind) -> Option<&WidgetInstance> {
        self.widgets.iter().find(|w| &w.kind == kind)
    }

    /// Bring a widget to the top of the stack.
    ///
    /// Returns false if the widget is unknown or already strictly on top.
    pub fn focus(&mut self, id: &WidgetId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        let z = self.widgets[index].z_order;
        let on_top = self
            .widgets
            .iter()
            .enumerate()
            .all(|(i, w)| i == index || w.z_order < z);
        if on_top {
            return false;
        }

        let next = self.next_z();
        self.widgets[index].z_order = next;
        debug!(id = %id, z = next, "widget focused");
        true
    }

    /// The widget with the highest z-order
    pub fn focused(&self) -> Option<&WidgetId> {
        self.widgets.iter().max_by_key(|w| w.z_order).map(|w| &w.id)
    }

    /// Highest z-order in use, or the configured base when empty
    pub fn top_z(&self) -> i64 {
        self.widgets
            .iter()
            .map(|w| w.z_order)
            .max()
            .unwrap_or(self.config.base_z)
            .max(self.config.base_z)
    }

    /// Set a widget's position without clamping
    pub fn move_widget(&mut self, id: &WidgetId, position: Vec2) {
        if let Some(widget) = self.get_mut(id) {
            widget.position = position;
        }
    }

    /// Resize a widget, raising each dimension to the configured minimum
    pub fn resize(&mut self, id: &WidgetId, size: Size) {
        let min = self.config.min_size;
        if let Some(widget) = self.get_mut(id) {
            widget.size = size.at_least(min);
        }
    }

    /// Shallow-merge `patch` into a widget's payload.
    ///
    /// Returns false if the widget does not exist.
    pub fn update_payload(&mut self, id: &WidgetId, patch: Payload) -> bool {
        match self.get_mut(id) {
            Some(widget) => {
                widget.payload.merge(patch);
                true
            }
            None => false,
        }
    }

    /// Replace the whole collection with loaded widgets.
    ///
    /// The identifier counter only moves forward: past every loaded
    /// generated identifier and never below its current value. Z-orders
    /// are renumbered when the top of the stack is saturated.
    pub fn restore(&mut self, widgets: Vec<WidgetInstance>) {
        let loaded_max = widgets.iter().filter_map(|w| w.id.seq()).max();
        if let (Some(current), Some(max)) = (self.next_seq, loaded_max) {
            self.next_seq = max.checked_add(1).map(|next| next.max(current));
        }
        self.widgets = widgets;
        if self.top_z() == i64::MAX {
            self.renumber_z();
        }
    }

    /// Counter value the next created widget will get, unless the counter
    /// is exhausted and free values are being reused
    #[inline]
    pub fn next_seq(&self) -> Option<u64> {
        self.next_seq
    }

    /// Widgets in creation order
    #[inline]
    pub fn widgets(&self) -> &[WidgetInstance] {
        &self.widgets
    }

    /// Get widgets sorted by z-order (back to front)
    pub fn widgets_by_z(&self) -> Vec<&WidgetInstance> {
        let mut widgets: Vec<&WidgetInstance> = self.widgets.iter().collect();
        widgets.sort_by_key(|w| w.z_order);
        widgets
    }

    /// Find the topmost widget at a screen position
    pub fn widget_at(&self, pos: Vec2) -> Option<&WidgetId> {
        self.region_at(pos).map(|(id, _)| id)
    }

    /// Find which region of which widget is at a screen position
    pub fn region_at(&self, pos: Vec2) -> Option<(&WidgetId, WidgetRegion)> {
        let mut widgets = self.widgets_by_z();
        widgets.reverse();

        widgets
            .into_iter()
            .find(|w| w.rect().contains(pos))
            .map(|w| (&w.id, hit_test_widget(w, pos, &self.config)))
    }

    /// Get the number of widgets
    #[inline]
    pub fn count(&self) -> usize {
        self.widgets.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.widgets.is_empty()
    }

    fn index_of(&self, id: &WidgetId) -> Option<usize> {
        self.widgets.iter().position(|w| &w.id == id)
    }

    fn allocate_seq(&mut self) -> u64 {
        let used: HashSet<u64> = self.widgets.iter().filter_map(|w| w.id.seq()).collect();
        match self.next_seq.filter(|seq| !used.contains(seq)) {
            Some(seq) => {
                self.next_seq = seq.checked_add(1);
                seq
            }
            None => first_free_seq(&used),
        }
    }

    fn next_z(&mut self) -> i64 {
        if self.top_z() == i64::MAX {
            self.renumber_z();
        }
        self.top_z().saturating_add(1)
    }

    /// Pack z-orders into `base_z + 1..`, keeping the stacking order
    fn renumber_z(&mut self) {
        let mut order: Vec<usize> = (0..self.widgets.len()).collect();
        order.sort_by_key(|&i| self.widgets[i].z_order);
        for (rank, index) in order.into_iter().enumerate() {
            self.widgets[index].z_order = self.config.base_z.saturating_add(rank as i64 + 1);
        }
        debug!(count = self.widgets.len(), "z-order renumbered");
    }
}

/// Hit test a widget already known to contain `pos`
fn hit_test_widget(widget: &WidgetInstance, pos: Vec2, config: &BoardConfig) -> WidgetRegion {
    if widget.close_button_rect(config).contains(pos) {
        return WidgetRegion::CloseButton;
    }
    // handle is checked before the header so a short widget stays resizable
    if widget.resize_handle_rect(config).contains(pos) {
        return WidgetRegion::ResizeHandle;
    }
    if widget.header_rect(config).contains(pos) {
        return WidgetRegion::Header;
    }
    WidgetRegion::Content
}
