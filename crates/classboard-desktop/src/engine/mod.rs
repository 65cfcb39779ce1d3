//! Board engine coordinating all components
//!
//! This module is split into focused submodules:
//! - `widgets`: Widget lifecycle and content teardown
//! - `input`: Pointer event handling and drag/resize gestures
//! - `state`: Save, load and background changes

mod widgets;
mod input;
mod state;

use std::collections::HashMap;
use crate::background::{BackgroundGenerator, BackgroundSettings};
use crate::config::BoardConfig;
use crate::input::InputRouter;
use crate::math::Size;
use crate::persistence::PersistenceBridge;
use crate::widget::{WidgetId, WidgetInstance, WidgetManager};

/// Resources a widget's content component holds outside the payload
/// (timers, intervals, media). Torn down when the widget leaves the board.
pub trait ContentHooks {
    /// Release everything the content holds. Called at most once.
    fn teardown(&mut self);
}

/// Board engine coordinating all board components
///
/// This is the main entry point for board operations, managing:
/// - Widget manager (widget CRUD, focus, z-order)
/// - Input router (the single drag/resize gesture)
/// - Board background
/// - Content resources registered per widget
pub struct BoardEngine {
    /// Visible area in screen pixels
    pub viewport: Size,
    /// Widget manager
    pub widgets: WidgetManager,
    /// Input router
    pub input: InputRouter,
    /// Current board background
    pub(crate) background: BackgroundSettings,
    /// Content resources keyed by owning widget
    pub(crate) content: HashMap<WidgetId, Box<dyn ContentHooks>>,
    /// Save/load bridge
    pub(crate) bridge: PersistenceBridge,
    /// Background image generation chain
    pub(crate) generator: BackgroundGenerator,
}

impl Default for BoardEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardEngine {
    /// Create a new board engine with the default configuration
    pub fn new() -> Self {
        Self::with_config(BoardConfig::default())
    }

    /// Create a new board engine
    pub fn with_config(config: BoardConfig) -> Self {
        Self {
            viewport: Size::ZERO,
            bridge: PersistenceBridge::new(&config),
            widgets: WidgetManager::new(config),
            input: InputRouter::new(),
            background: BackgroundSettings::default(),
            content: HashMap::new(),
            generator: BackgroundGenerator::default(),
        }
    }

    /// Initialize the board with screen dimensions
    pub fn init(&mut self, width: f32, height: f32) {
        self.set_viewport(width, height);
    }

    /// Resize the viewport. Widgets are not moved; the new bounds apply
    /// from the next drag.
    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Size::new(width.max(0.0), height.max(0.0));
    }

    #[inline]
    pub fn config(&self) -> &BoardConfig {
        self.widgets.config()
    }

    /// Replace the background generation chain
    pub fn set_generator(&mut self, generator: BackgroundGenerator) {
        self.generator = generator;
    }

    /// Widgets back to front, for painting
    pub fn widgets_by_z(&self) -> Vec<&WidgetInstance> {
        self.widgets.widgets_by_z()
    }
}
