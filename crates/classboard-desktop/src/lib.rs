//! Window manager for the Classboard classroom dashboard
//!
//! This crate provides the core board functionality:
//! - Widget registry (default sizes, titles, singleton kinds)
//! - Widget management (create, close, focus, z-order)
//! - Input routing, hit testing and bounds clamping
//! - Board background and tiered background generation
//! - State serialization to a key/value store
//!
//! ## Architecture
//!
//! - [`math`]: Core geometry types (`Vec2`, `Rect`, `Size`)
//! - [`widget`]: Widget records and the widget manager
//! - [`input`]: Input routing and drag state machine
//! - [`background`]: Background settings and image generation
//! - [`persistence`]: Saving and loading the dashboard
//!
//! ## Example
//!
//! ```rust
//! use classboard_desktop::{BoardEngine, MemoryStore, WidgetKind};
//!
//! let mut engine = BoardEngine::new();
//! engine.init(1920.0, 1080.0);
//!
//! let id = engine.add_widget(WidgetKind::Timer).id().clone();
//! engine.begin_drag(&id, 110.0, 110.0);
//! engine.handle_pointer_move(400.0, 300.0);
//! engine.handle_pointer_up();
//!
//! let mut store = MemoryStore::new();
//! engine.save(&mut store).unwrap();
//! ```
//!
//! All state is plain Rust and testable without a browser; the browser
//! surface lives in `classboard-web`.

pub mod math;
pub mod config;
pub mod error;
pub mod widget;
pub mod input;
pub mod background;
pub mod persistence;

mod engine;

// Re-export core types for convenience
pub use math::{Rect, Size, Vec2};
pub use config::{BoardConfig, DEFAULT_STORAGE_KEY};
pub use error::BoardError;
pub use widget::{CreateOutcome, Payload, WidgetId, WidgetInstance, WidgetKind, WidgetManager, WidgetRegion};
pub use input::{DragState, InputResult, InputRouter};
pub use background::{
    BackgroundGenerator, BackgroundKind, BackgroundSettings, ImageProvider, ImageTier, ProviderError,
};
pub use persistence::{DashboardState, KeyValueStore, MemoryStore, PersistenceBridge};

pub use engine::{BoardEngine, ContentHooks};
