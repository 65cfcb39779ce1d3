//! Browser bindings for Classboard
//!
//! This crate runs in the browser's main thread. It wraps the board engine
//! in a JS-friendly controller, persists to `window.localStorage` and drives
//! periodic widget content from the page's animation frames.

mod live;
mod storage;

pub use storage::LocalStorageStore;

use std::collections::HashMap;

use chrono::NaiveTime;
use classboard_desktop::{
    BackgroundSettings, BoardConfig, BoardEngine, BoardError, CreateOutcome, InputResult, Payload, WidgetId,
    WidgetKind, background::PRESET_BACKGROUNDS,
};
use classboard_widgets::LiveClock;
use live::LiveContent;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// Board controller for WASM - wraps BoardEngine with JS-friendly API
#[wasm_bindgen]
pub struct BoardController {
    engine: BoardEngine,
    /// Widgets whose content is ticking
    live: HashMap<WidgetId, LiveContent>,
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl BoardController {
    /// Create a new board controller
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::from_engine(BoardEngine::new())
    }

    /// Create a controller from a (possibly partial) JSON configuration
    #[wasm_bindgen(js_name = withConfig)]
    pub fn with_config(config_json: &str) -> Result<BoardController, JsValue> {
        let config = BoardConfig::from_json(config_json).map_err(js_error)?;
        Ok(Self::from_engine(BoardEngine::with_config(config)))
    }

    // =========================================================================
    // Initialization
    // =========================================================================

    /// Initialize the board with screen dimensions
    #[wasm_bindgen]
    pub fn init(&mut self, width: f32, height: f32) {
        self.engine.init(width, height);
    }

    /// Resize the board viewport
    #[wasm_bindgen]
    pub fn resize(&mut self, width: f32, height: f32) {
        self.engine.set_viewport(width, height);
    }

    // =========================================================================
    // Widgets
    // =========================================================================

    /// Add a widget by kind id. Returns `{"id", "created"}` as JSON.
    #[wasm_bindgen]
    pub fn add_widget(&mut self, kind: &str) -> String {
        let outcome = self.engine.add_widget(WidgetKind::from_id(kind));
        let created = matches!(outcome, CreateOutcome::Created(_));
        serde_json::to_string(&serde_json::json!({
            "id": outcome.id(),
            "created": created,
        }))
        .unwrap_or_else(|_| "{}".to_string())
    }

    /// Bring a widget to the front
    #[wasm_bindgen]
    pub fn focus(&mut self, id: &str) -> bool {
        self.engine.focus_widget(&WidgetId::from(id))
    }

    /// Close a widget
    #[wasm_bindgen]
    pub fn close(&mut self, id: &str) -> bool {
        let id = WidgetId::from(id);
        self.live.remove(&id);
        self.engine.close_widget(&id).is_some()
    }

    /// Remove every widget. Confirmation is up to the caller.
    #[wasm_bindgen]
    pub fn clear(&mut self) -> u32 {
        self.live.clear();
        self.engine.clear() as u32
    }

    /// Shallow-merge a JSON object into a widget's payload
    #[wasm_bindgen]
    pub fn update_payload(&mut self, id: &str, patch_json: &str) -> Result<bool, JsValue> {
        let id = WidgetId::from(id);
        let patch = parse_payload(patch_json)?;

        // In-flight ticking state is the baseline the patch applies to
        if let Some(live) = self.live.get(&id) {
            self.engine.update_payload(&id, live.payload());
        }
        let updated = self.engine.update_payload(&id, patch);
        if let (Some(live), Some(widget)) = (self.live.get_mut(&id), self.engine.widgets.get(&id)) {
            live.reload(&widget.payload);
        }
        Ok(updated)
    }

    /// Get all widgets back to front as JSON
    #[wasm_bindgen]
    pub fn get_widgets_json(&self) -> String {
        let widgets: Vec<serde_json::Value> = self
            .engine
            .widgets_by_z()
            .into_iter()
            .map(|w| {
                let payload = match self.live.get(&w.id) {
                    Some(live) => live.payload(),
                    None => w.payload.clone(),
                };
                serde_json::json!({
                    "id": w.id,
                    "kind": w.kind,
                    "title": w.title(),
                    "position": { "x": w.position.x, "y": w.position.y },
                    "size": { "width": w.size.width, "height": w.size.height },
                    "zOrder": w.z_order,
                    "focused": self.engine.widgets.focused() == Some(&w.id),
                    "payload": payload,
                })
            })
            .collect();
        serde_json::to_string(&widgets).unwrap_or_else(|_| "[]".to_string())
    }

    /// Get the toolbar entries (`id`, `title`) as JSON
    #[wasm_bindgen]
    pub fn get_widget_kinds_json(&self) -> String {
        let kinds: Vec<serde_json::Value> = WidgetKind::all()
            .iter()
            .map(|k| serde_json::json!({ "id": k.id(), "title": k.title() }))
            .collect();
        serde_json::to_string(&kinds).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Input Handling
    // =========================================================================

    /// Handle pointer down event
    #[wasm_bindgen]
    pub fn pointer_down(&mut self, x: f32, y: f32) -> String {
        let result = self.engine.handle_pointer_down(x, y);
        if let InputResult::Handled = result {
            // A close button may have removed a ticking widget
            self.live.retain(|_, live| !live.is_cancelled());
        }
        input_json(&result)
    }

    /// Handle pointer move event
    #[wasm_bindgen]
    pub fn pointer_move(&mut self, x: f32, y: f32) -> String {
        input_json(&self.engine.handle_pointer_move(x, y))
    }

    /// Handle pointer up event
    #[wasm_bindgen]
    pub fn pointer_up(&mut self) -> String {
        input_json(&self.engine.handle_pointer_up())
    }

    /// Handle the pointer leaving the board
    #[wasm_bindgen]
    pub fn pointer_leave(&mut self) -> String {
        input_json(&self.engine.handle_pointer_leave())
    }

    /// Get the CSS cursor for a screen position
    #[wasm_bindgen]
    pub fn cursor_at(&self, x: f32, y: f32) -> String {
        match self.engine.widgets.region_at(classboard_desktop::Vec2::new(x, y)) {
            Some((_, region)) => region.cursor().to_string(),
            None => "default".to_string(),
        }
    }

    // =========================================================================
    // Periodic content
    // =========================================================================

    /// Start ticking a widget's content (timer, stopwatch, clock)
    #[wasm_bindgen]
    pub fn start_ticker(&mut self, id: &str) -> bool {
        let id = WidgetId::from(id);
        match LiveContent::start(&mut self.engine, &id) {
            Some(live) => {
                self.live.insert(id, live);
                true
            }
            None => false,
        }
    }

    /// Advance every ticking widget by `elapsed_ms`. Returns the current
    /// payload of each as JSON (`[{"widgetId", "payload"}]`).
    #[wasm_bindgen]
    pub fn tick(&mut self, elapsed_ms: f64) -> String {
        self.live.retain(|_, live| !live.is_cancelled());

        let mut frames = Vec::with_capacity(self.live.len());
        for (id, live) in self.live.iter_mut() {
            if let Some(patch) = live.advance(elapsed_ms) {
                self.engine.update_payload(id, patch);
            }
            frames.push(serde_json::json!({ "widgetId": id, "payload": live.payload() }));
        }
        serde_json::to_string(&frames).unwrap_or_else(|_| "[]".to_string())
    }

    /// Current local time as `HH:MM:SS`, for clock widgets
    #[wasm_bindgen]
    pub fn clock_text(&self) -> String {
        local_time().map(LiveClock::display).unwrap_or_default()
    }

    // =========================================================================
    // Background
    // =========================================================================

    /// Get the background as JSON
    #[wasm_bindgen]
    pub fn get_background_json(&self) -> String {
        serde_json::to_string(self.engine.background()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Replace the background from JSON (`{"kind", "value", "prompt"?}`)
    #[wasm_bindgen]
    pub fn set_background_json(&mut self, json: &str) -> Result<(), JsValue> {
        let background: BackgroundSettings =
            serde_json::from_str(json).map_err(|e| js_error(BoardError::Serialize(e)))?;
        self.engine.set_background(background);
        Ok(())
    }

    /// Get the preset background URLs as JSON
    #[wasm_bindgen]
    pub fn get_preset_backgrounds_json(&self) -> String {
        serde_json::to_string(PRESET_BACKGROUNDS).unwrap_or_else(|_| "[]".to_string())
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    /// Save the board to localStorage
    #[wasm_bindgen]
    pub fn save(&mut self) -> Result<(), JsValue> {
        self.flush_live();
        let mut store = LocalStorageStore::open().map_err(js_error)?;
        self.engine.save(&mut store).map_err(js_error)?;
        log("[classboard] screen saved");
        Ok(())
    }

    /// Load the board from localStorage. Resolves to false when nothing
    /// was saved.
    #[wasm_bindgen]
    pub fn load(&mut self) -> Result<bool, JsValue> {
        let store = LocalStorageStore::open().map_err(js_error)?;
        let loaded = self.engine.load(&store).map_err(js_error)?;
        if loaded {
            self.live.clear();
            log("[classboard] screen loaded");
        }
        Ok(loaded)
    }
}

impl BoardController {
    fn from_engine(engine: BoardEngine) -> Self {
        // Set up panic hook for better error messages
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();

        Self {
            engine,
            live: HashMap::new(),
        }
    }

    /// Access the engine from Rust hosts
    pub fn engine(&self) -> &BoardEngine {
        &self.engine
    }

    /// Write in-flight ticking state into the widget payloads
    fn flush_live(&mut self) {
        for (id, live) in &self.live {
            self.engine.update_payload(id, live.payload());
        }
    }
}

fn parse_payload(json: &str) -> Result<Payload, JsValue> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(|e| js_error(BoardError::Serialize(e)))?;
    Payload::from_value(value).ok_or_else(|| JsValue::from_str("payload must be a JSON object"))
}

fn local_time() -> Option<NaiveTime> {
    let now = js_sys::Date::new_0();
    NaiveTime::from_hms_opt(now.get_hours(), now.get_minutes(), now.get_seconds())
}

fn input_json(result: &InputResult) -> String {
    serde_json::to_string(result).unwrap_or_else(|_| r#"{"type":"unhandled"}"#.to_string())
}

fn js_error(err: BoardError) -> JsValue {
    log(&format!("[classboard] {}", err));
    JsValue::from_str(err.notification())
}
