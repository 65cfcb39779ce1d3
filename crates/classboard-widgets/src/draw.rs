//! Drawing board tool settings

use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrawTool {
    #[default]
    Pen,
    Eraser,
}

/// Pen settings; the strokes themselves live on the host canvas
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DrawSettings {
    pub color: String,
    pub line_width: u32,
    pub tool: DrawTool,
}

impl Default for DrawSettings {
    fn default() -> Self {
        Self {
            color: "#000000".to_string(),
            line_width: 4,
            tool: DrawTool::Pen,
        }
    }
}

impl ContentModel for DrawSettings {
    const KIND: WidgetKind = WidgetKind::Draw;
}

impl DrawSettings {
    pub const MIN_WIDTH: u32 = 1;
    pub const MAX_WIDTH: u32 = 20;
    /// Eraser strokes are this many times wider than the pen
    pub const ERASER_SCALE: u32 = 4;
    const ERASER_COLOR: &'static str = "#ffffff";

    pub fn set_color(&mut self, color: impl Into<String>) -> Payload {
        self.color = color.into();
        self.patch(&["color"])
    }

    pub fn set_line_width(&mut self, width: u32) -> Payload {
        self.line_width = width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH);
        self.patch(&["lineWidth"])
    }

    pub fn set_tool(&mut self, tool: DrawTool) -> Payload {
        self.tool = tool;
        self.patch(&["tool"])
    }

    /// Width of the stroke the current tool paints
    pub fn stroke_width(&self) -> u32 {
        let width = self.line_width.clamp(Self::MIN_WIDTH, Self::MAX_WIDTH);
        match self.tool {
            DrawTool::Pen => width,
            DrawTool::Eraser => width * Self::ERASER_SCALE,
        }
    }

    /// Colour of the stroke the current tool paints
    pub fn stroke_color(&self) -> &str {
        match self.tool {
            DrawTool::Pen => &self.color,
            DrawTool::Eraser => Self::ERASER_COLOR,
        }
    }
}
