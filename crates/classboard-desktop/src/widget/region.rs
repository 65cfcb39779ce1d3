//! Widget region for hit testing

/// Region of a widget under the pointer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WidgetRegion {
    /// Header strip (drag to move)
    Header,
    /// Close button in the header
    CloseButton,
    /// Bottom-right resize handle
    ResizeHandle,
    /// Content area, owned by the widget's content component
    Content,
}

impl WidgetRegion {
    /// Check if this region starts a resize
    #[inline]
    pub fn is_resize(&self) -> bool {
        matches!(self, WidgetRegion::ResizeHandle)
    }

    /// Get CSS cursor style for this region
    pub fn cursor(&self) -> &'static str {
        match self {
            WidgetRegion::Header => "move",
            WidgetRegion::CloseButton => "pointer",
            WidgetRegion::ResizeHandle => "nwse-resize",
            WidgetRegion::Content => "default",
        }
    }
}
