//! Widget record

use serde::{Deserialize, Serialize};
use crate::config::BoardConfig;
use crate::math::{Rect, Size, Vec2};
use super::{Payload, WidgetId, WidgetKind};

/// A widget placed on the board
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetInstance {
    /// Unique identifier
    pub id: WidgetId,
    /// What the widget hosts
    pub kind: WidgetKind,
    /// Top-left corner in screen pixels
    pub position: Vec2,
    /// Outer size including header
    pub size: Size,
    /// Stacking order (higher = on top)
    pub z_order: i64,
    /// Content state owned by the widget's content component
    #[serde(default)]
    pub payload: Payload,
}

impl WidgetInstance {
    /// Display title from the registry
    #[inline]
    pub fn title(&self) -> &'static str {
        self.kind.title()
    }

    /// Get the widget's bounding rectangle
    #[inline]
    pub fn rect(&self) -> Rect {
        Rect::from_pos_size(self.position, self.size)
    }

    /// Get the header (drag strip) rectangle
    pub fn header_rect(&self, config: &BoardConfig) -> Rect {
        Rect::new(
            self.position.x,
            self.position.y,
            self.size.width,
            config.header_height.min(self.size.height),
        )
    }

    /// Get the close button rectangle, right-aligned in the header
    pub fn close_button_rect(&self, config: &BoardConfig) -> Rect {
        let margin = ((config.header_height - config.close_button_size) / 2.0).max(0.0);
        Rect::new(
            self.rect().right() - margin - config.close_button_size,
            self.position.y + margin,
            config.close_button_size,
            config.close_button_size,
        )
    }

    /// Get the resize handle rectangle in the bottom-right corner
    pub fn resize_handle_rect(&self, config: &BoardConfig) -> Rect {
        let side = config.resize_handle_size;
        Rect::new(self.rect().right() - side, self.rect().bottom() - side, side, side)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dice_at(x: f32, y: f32) -> WidgetInstance {
        WidgetInstance {
            id: WidgetId::from_seq(1),
            kind: WidgetKind::Dice,
            position: Vec2::new(x, y),
            size: Size::new(300.0, 250.0),
            z_order: 11,
            payload: Payload::new(),
        }
    }

    #[test]
    fn test_widget_rects() {
        let config = BoardConfig::default();
        let widget = dice_at(100.0, 100.0);

        let header = widget.header_rect(&config);
        assert!((header.height - 40.0).abs() < 0.001);
        assert!((header.width - 300.0).abs() < 0.001);

        let close = widget.close_button_rect(&config);
        assert!((close.right() - 392.0).abs() < 0.001);
        assert!((close.y - 108.0).abs() < 0.001);

        let handle = widget.resize_handle_rect(&config);
        assert!((handle.x - 380.0).abs() < 0.001);
        assert!((handle.y - 330.0).abs() < 0.001);
    }

    #[test]
    fn test_widget_json_layout() {
        let widget = dice_at(100.0, 120.0);
        let json = serde_json::to_value(&widget).unwrap();
        assert_eq!(json["id"], "widget-1");
        assert_eq!(json["kind"], "dice");
        assert_eq!(json["zOrder"], 11);
        assert_eq!(json["size"]["width"], 300.0);
        assert_eq!(json["position"]["y"], 120.0);
        assert!(json["payload"].as_object().unwrap().is_empty());
    }
}
