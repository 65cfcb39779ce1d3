//! Integration tests for BoardEngine
//!
//! These tests verify the full board workflow including:
//! - Widget creation, cascade placement and the singleton rule
//! - Focus ordering
//! - Drag and resize bounds
//! - Save/load round trips and legacy records
//! - Background generation fallback

use std::cell::Cell;
use std::rc::Rc;
use classboard_desktop::{
    BackgroundKind, BackgroundSettings, BoardEngine, BoardError, ContentHooks, CreateOutcome,
    DashboardState, ImageProvider, ImageTier, InputResult, KeyValueStore, MemoryStore, ProviderError,
    Size, Vec2, WidgetId, WidgetKind, DEFAULT_STORAGE_KEY,
};

fn board() -> BoardEngine {
    let mut engine = BoardEngine::new();
    engine.init(1280.0, 800.0);
    engine
}

fn add(engine: &mut BoardEngine, kind: WidgetKind) -> WidgetId {
    engine.add_widget(kind).id().clone()
}

fn assert_strictly_top(engine: &BoardEngine, id: &WidgetId) {
    let top = engine.widgets.get(id).unwrap().z_order;
    for w in engine.widgets.widgets() {
        if &w.id != id {
            assert!(w.z_order < top, "{} (z {}) is not below {} (z {})", w.id, w.z_order, id, top);
        }
    }
}

// =============================================================================
// Creation
// =============================================================================

#[test]
fn test_create_dice_cascade() {
    let mut engine = board();

    let first = add(&mut engine, WidgetKind::Dice);
    assert_eq!(engine.widgets.count(), 1);
    let w = engine.widgets.get(&first).unwrap();
    assert_eq!(w.position, Vec2::new(100.0, 100.0));
    assert_eq!(w.size, Size::new(300.0, 250.0));
    assert_eq!(w.z_order, 11);

    let second = add(&mut engine, WidgetKind::Dice);
    let w = engine.widgets.get(&second).unwrap();
    assert_eq!(w.position, Vec2::new(120.0, 120.0));
    assert_eq!(w.z_order, 12);
    assert_ne!(first, second);
}

#[test]
fn test_background_settings_is_singleton() {
    let mut engine = board();
    let settings = add(&mut engine, WidgetKind::BackgroundSettings);
    add(&mut engine, WidgetKind::Clock);
    add(&mut engine, WidgetKind::Calendar);

    let outcome = engine.add_widget(WidgetKind::BackgroundSettings);
    assert_eq!(outcome, CreateOutcome::FocusExisting(settings.clone()));
    assert_eq!(engine.widgets.count(), 3);
    assert_strictly_top(&engine, &settings);
}

// =============================================================================
// Focus
// =============================================================================

#[test]
fn test_focus_first_of_two() {
    let mut engine = board();
    let first = add(&mut engine, WidgetKind::Timer);
    let second = add(&mut engine, WidgetKind::Timer);

    engine.focus_widget(&first);
    assert_eq!(engine.widgets.get(&first).unwrap().z_order, 13);
    assert_eq!(engine.widgets.get(&second).unwrap().z_order, 12);
}

#[test]
fn test_focus_sequences_keep_last_on_top() {
    let mut engine = board();
    let ids: Vec<WidgetId> = WidgetKind::all().iter().skip(1).map(|k| add(&mut engine, k.clone())).collect();

    let order = [3usize, 0, 7, 7, 2, 11, 0, 5, 1, 3];
    for &i in &order {
        engine.focus_widget(&ids[i]);
        assert_strictly_top(&engine, &ids[i]);
    }
}

#[test]
fn test_pointer_down_focuses_hit_widget() {
    let mut engine = board();
    let first = add(&mut engine, WidgetKind::Dice);
    add(&mut engine, WidgetKind::Dice);

    // Only the first widget covers this point
    let result = engine.handle_pointer_down(105.0, 300.0);
    assert!(result.is_forward());
    assert_strictly_top(&engine, &first);
}

// =============================================================================
// Drag and resize
// =============================================================================

#[test]
fn test_drag_stays_in_bounds() {
    let mut engine = board();
    let id = add(&mut engine, WidgetKind::Clock);
    engine.begin_drag(&id, 150.0, 120.0);

    let coords = [-5000.0f32, -1.0, 0.0, 49.0, 640.0, 1229.0, 1230.0, 1281.0, 9000.0];
    for &x in &coords {
        for &y in &coords {
            engine.handle_pointer_move(x, y);
            let pos = engine.widgets.get(&id).unwrap().position;
            assert!(pos.x >= 0.0 && pos.x <= 1230.0, "x out of range: {}", pos.x);
            assert!(pos.y >= 0.0 && pos.y <= 750.0, "y out of range: {}", pos.y);
        }
    }
    engine.handle_pointer_up();
}

#[test]
fn test_drag_uses_new_viewport_after_resize() {
    let mut engine = board();
    let id = add(&mut engine, WidgetKind::Clock);
    engine.set_viewport(400.0, 300.0);

    engine.begin_drag(&id, 100.0, 100.0);
    engine.handle_pointer_move(1000.0, 1000.0);
    let pos = engine.widgets.get(&id).unwrap().position;
    assert!((pos.x - 350.0).abs() < 0.001);
    assert!((pos.y - 250.0).abs() < 0.001);
}

#[test]
fn test_resize_respects_minimum() {
    let mut engine = board();
    let id = add(&mut engine, WidgetKind::Draw);
    engine.begin_resize(&id, 350.0, 300.0);
    let size = engine.widgets.get(&id).unwrap().size;
    assert!((size.width - 250.0).abs() < 0.001);
    assert!((size.height - 200.0).abs() < 0.001);

    let coords = [-300.0f32, 0.0, 100.0, 250.0, 299.0, 301.0, 800.0];
    for &x in &coords {
        for &y in &coords {
            engine.handle_pointer_move(x, y);
            let w = engine.widgets.get(&id).unwrap();
            assert!(w.size.width >= 200.0);
            assert!(w.size.height >= 150.0);
            assert_eq!(w.position, Vec2::new(100.0, 100.0));
        }
    }
    assert!(engine.end_resize());
    assert!(!engine.input.is_dragging());
}

#[test]
fn test_gestures_are_exclusive() {
    let mut engine = board();
    let a = add(&mut engine, WidgetKind::Dice);
    let b = add(&mut engine, WidgetKind::Dice);

    engine.begin_drag(&a, 110.0, 110.0);
    engine.begin_resize(&b, 500.0, 500.0);
    assert!(engine.input.drag_state().unwrap().is_resize());
    assert!(!engine.end_drag());

    let before = engine.widgets.get(&a).unwrap().position;
    engine.handle_pointer_move(700.0, 600.0);
    assert_eq!(engine.widgets.get(&a).unwrap().position, before);
}

#[test]
fn test_pointer_leave_ends_gesture() {
    let mut engine = board();
    let id = add(&mut engine, WidgetKind::Dice);
    engine.begin_drag(&id, 110.0, 110.0);
    engine.handle_pointer_move(210.0, 210.0);

    assert_eq!(engine.handle_pointer_leave(), InputResult::Handled);
    let pos = engine.widgets.get(&id).unwrap().position;
    assert_eq!(engine.handle_pointer_move(600.0, 600.0), InputResult::Unhandled);
    assert_eq!(engine.widgets.get(&id).unwrap().position, pos);
}

// =============================================================================
// Content teardown
// =============================================================================

struct Flag(Rc<Cell<bool>>);

impl ContentHooks for Flag {
    fn teardown(&mut self) {
        self.0.set(true);
    }
}

#[test]
fn test_close_cancels_registered_content() {
    let mut engine = board();
    let timer = add(&mut engine, WidgetKind::Timer);
    let clock = add(&mut engine, WidgetKind::Clock);
    let timer_done = Rc::new(Cell::new(false));
    let clock_done = Rc::new(Cell::new(false));
    engine.attach_content(&timer, Box::new(Flag(timer_done.clone())));
    engine.attach_content(&clock, Box::new(Flag(clock_done.clone())));

    engine.close_widget(&timer);
    assert!(timer_done.get());
    assert!(!clock_done.get());
    assert!(!engine.has_content(&timer));
    assert!(engine.has_content(&clock));
}

#[test]
fn test_load_tears_down_replaced_content() {
    let mut engine = board();
    let mut store = MemoryStore::new();
    engine.save(&mut store).unwrap();

    let id = add(&mut engine, WidgetKind::Stopwatch);
    let done = Rc::new(Cell::new(false));
    engine.attach_content(&id, Box::new(Flag(done.clone())));

    assert!(engine.load(&store).unwrap());
    assert!(done.get());
    assert!(engine.widgets.is_empty());
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn test_save_load_round_trip() {
    let mut engine = board();
    let mut store = MemoryStore::new();
    let a = add(&mut engine, WidgetKind::Text);
    let b = add(&mut engine, WidgetKind::TrafficLight);
    engine.update_payload(&a, classboard_desktop::Payload::new().with("text", "Quiet reading"));
    engine.begin_drag(&b, 130.0, 130.0);
    engine.handle_pointer_move(400.0, 300.0);
    engine.handle_pointer_up();
    engine.set_background(BackgroundSettings::color("#0f172a"));
    engine.save(&mut store).unwrap();

    let mut restored = board();
    assert!(restored.load(&store).unwrap());
    assert_eq!(restored.snapshot(), engine.snapshot());
}

#[test]
fn test_load_not_found_vs_empty_save() {
    let mut engine = board();
    let mut store = MemoryStore::new();
    assert!(!engine.load(&store).unwrap());

    engine.save(&mut store).unwrap();
    let saved = store.get(DEFAULT_STORAGE_KEY).unwrap().unwrap();
    let state: DashboardState = serde_json::from_str(&saved).unwrap();
    assert!(state.widgets.is_empty());
    assert!(engine.load(&store).unwrap());
    assert!(engine.widgets.is_empty());
}

#[test]
fn test_load_advances_identifier_counter() {
    let mut store = MemoryStore::new();
    store
        .set(
            DEFAULT_STORAGE_KEY,
            r#"{"version":1,"widgets":[
                {"id":"widget-4","kind":"dice","position":{"x":0,"y":0},"size":{"width":300,"height":250},"zOrder":11,"payload":{}},
                {"id":"widget-9","kind":"clock","position":{"x":0,"y":0},"size":{"width":350,"height":150},"zOrder":12,"payload":{}},
                {"id":"custom","kind":"text","position":{"x":0,"y":0},"size":{"width":500,"height":300},"zOrder":13,"payload":{}}
            ],"background":{"kind":"image","value":"x.jpg"}}"#,
        )
        .unwrap();

    let mut engine = board();
    assert!(engine.load(&store).unwrap());
    let loaded: Vec<WidgetId> = engine.widgets.widgets().iter().map(|w| w.id.clone()).collect();

    for _ in 0..5 {
        let id = add(&mut engine, WidgetKind::Dice);
        assert!(!loaded.contains(&id));
    }
    let created = add(&mut engine, WidgetKind::Dice);
    assert_eq!(created.as_str(), "widget-15");
    assert_strictly_top(&engine, &created);
}

#[test]
fn test_load_extreme_identifiers_and_z() {
    let mut store = MemoryStore::new();
    store
        .set(
            DEFAULT_STORAGE_KEY,
            r#"{"version":1,"widgets":[
                {"id":"widget-1","kind":"dice","position":{"x":0,"y":0},"size":{"width":300,"height":250},"zOrder":9223372036854775807,"payload":{}},
                {"id":"widget-18446744073709551615","kind":"clock","position":{"x":0,"y":0},"size":{"width":350,"height":150},"zOrder":11,"payload":{}}
            ]}"#,
        )
        .unwrap();

    let mut engine = board();
    assert!(engine.load(&store).unwrap());
    let loaded: Vec<WidgetId> = engine.widgets.widgets().iter().map(|w| w.id.clone()).collect();
    assert_strictly_top(&engine, &loaded[0]);

    for _ in 0..3 {
        let id = add(&mut engine, WidgetKind::Dice);
        assert!(!loaded.contains(&id));
        assert_eq!(engine.widgets.widgets().iter().filter(|w| w.id == id).count(), 1);
        assert_strictly_top(&engine, &id);
    }

    engine.focus_widget(&loaded[1]);
    assert_strictly_top(&engine, &loaded[1]);
}

#[test]
fn test_legacy_record_loads() {
    let mut store = MemoryStore::new();
    store
        .set(
            DEFAULT_STORAGE_KEY,
            r##"{"widgets":[
                {"id":"widget-2","type":"traffic","position":{"x":40,"y":60},"zIndex":14,"data":{"active":"red"}},
                {"id":"widget-3","type":"score","position":{"x":80,"y":90},"width":120,"height":400,"zIndex":15,"data":{}}
            ],"background":{"type":"color","value":"#334155"}}"##,
        )
        .unwrap();

    let mut engine = board();
    assert!(engine.load(&store).unwrap());

    let traffic = engine.widgets.get(&WidgetId::from("widget-2")).unwrap();
    assert_eq!(traffic.kind, WidgetKind::TrafficLight);
    assert_eq!(traffic.size, Size::new(200.0, 450.0));
    assert_eq!(traffic.payload.get("active").unwrap(), "red");

    let score = engine.widgets.get(&WidgetId::from("widget-3")).unwrap();
    assert_eq!(score.size, Size::new(200.0, 400.0));
    assert_eq!(score.z_order, 15);
    assert_eq!(engine.background().kind, BackgroundKind::Color);
    assert_eq!(engine.snapshot().version, DashboardState::CURRENT_VERSION);
}

#[test]
fn test_corrupt_record_keeps_board() {
    let mut store = MemoryStore::new();
    store.set(DEFAULT_STORAGE_KEY, "{\"widgets\": [ {").unwrap();

    let mut engine = board();
    let id = add(&mut engine, WidgetKind::Clock);
    let err = engine.load(&store).unwrap_err();
    assert!(matches!(err, BoardError::LoadFailed(_)));
    assert_eq!(err.notification(), "Failed to load saved state.");
    assert!(engine.widgets.get(&id).is_some());
}

// =============================================================================
// Background generation
// =============================================================================

struct QuotaProvider {
    calls: usize,
}

impl ImageProvider for QuotaProvider {
    fn generate(&mut self, _credential: &str, _tier: &ImageTier, _prompt: &str) -> Result<String, ProviderError> {
        self.calls += 1;
        Err(ProviderError::classify("429 RESOURCE_EXHAUSTED"))
    }
}

struct SecondTierProvider;

impl ImageProvider for SecondTierProvider {
    fn generate(&mut self, _credential: &str, tier: &ImageTier, _prompt: &str) -> Result<String, ProviderError> {
        if tier.model.contains("flash") {
            Ok(format!("data:image/png;base64,{}", tier.model))
        } else {
            Err(ProviderError::NoImage)
        }
    }
}

#[test]
fn test_generation_quota_exhausted() {
    let mut engine = board();
    let mut provider = QuotaProvider { calls: 0 };

    let err = engine.generate_background(&mut provider, Some("key"), "rainforest").unwrap_err();
    assert!(matches!(err, BoardError::ProviderExhausted { quota_exceeded: true }));
    assert_eq!(provider.calls, 3);
    assert_eq!(engine.background(), &BackgroundSettings::default());
}

#[test]
fn test_generation_fallback_applies_background() {
    let mut engine = board();
    engine.generate_background(&mut SecondTierProvider, Some("key"), "rainforest").unwrap();

    let bg = engine.background();
    assert_eq!(bg.kind, BackgroundKind::Ai);
    assert!(bg.value.starts_with("data:image/png;base64,"));
    assert_eq!(bg.prompt.as_deref(), Some("rainforest"));
}

#[test]
fn test_generation_without_credential() {
    let mut engine = board();
    let mut provider = QuotaProvider { calls: 0 };
    let err = engine.generate_background(&mut provider, None, "rainforest").unwrap_err();
    assert!(matches!(err, BoardError::MissingCredential));
    assert_eq!(provider.calls, 0);
}
