//! Payload-backed content models and the union over all kinds

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::warn;
use classboard_desktop::{Payload, WidgetInstance, WidgetKind};
use crate::{
    Announcement, CalendarView, Countdown, DiceTray, DrawSettings, EmbedLink, GroupMaker, LiveClock,
    NamePicker, Scoreboard, Stopwatch, TrafficLight,
};

/// A widget's content state, stored in its payload
pub trait ContentModel: Serialize + DeserializeOwned + Default {
    /// Kind whose payload this model reads
    const KIND: WidgetKind;

    /// Read from a payload. Missing keys take their defaults; a payload
    /// that cannot be read at all yields the default model.
    fn from_payload(payload: &Payload) -> Self {
        let value = Value::Object(payload.as_map().clone());
        serde_json::from_value(value).unwrap_or_else(|err| {
            let kind = Self::KIND;
            warn!(kind = kind.id(), error = %err, "unreadable widget payload, using defaults");
            Self::default()
        })
    }

    /// Full payload for this model
    fn to_payload(&self) -> Payload {
        serde_json::to_value(self)
            .ok()
            .and_then(Payload::from_value)
            .unwrap_or_default()
    }

    /// Partial payload holding only `keys`
    fn patch(&self, keys: &[&str]) -> Payload {
        let full = self.to_payload();
        let mut patch = Payload::new();
        for key in keys {
            if let Some(value) = full.get(key) {
                patch.insert(key, value.clone());
            }
        }
        patch
    }
}

/// Content of any widget, keyed by its kind
#[derive(Clone, Debug, PartialEq)]
pub enum WidgetContent {
    Announcement(Announcement),
    Embed(EmbedLink),
    Countdown(Countdown),
    Stopwatch(Stopwatch),
    Scoreboard(Scoreboard),
    Draw(DrawSettings),
    Picker(NamePicker),
    Groups(GroupMaker),
    Dice(DiceTray),
    Clock(LiveClock),
    Calendar(CalendarView),
    Traffic(TrafficLight),
    /// Edits the board background; keeps nothing in its payload
    BackgroundSettings,
    /// Kind without a content model; the payload is kept as-is
    Unknown(String, Payload),
}

impl WidgetContent {
    /// Read the content for `kind` from `payload`
    pub fn from_payload(kind: &WidgetKind, payload: &Payload) -> Self {
        match kind {
            WidgetKind::Text => WidgetContent::Announcement(Announcement::from_payload(payload)),
            WidgetKind::Embed => WidgetContent::Embed(EmbedLink::from_payload(payload)),
            WidgetKind::Timer => WidgetContent::Countdown(Countdown::from_payload(payload)),
            WidgetKind::Stopwatch => WidgetContent::Stopwatch(Stopwatch::from_payload(payload)),
            WidgetKind::Score => WidgetContent::Scoreboard(Scoreboard::from_payload(payload)),
            WidgetKind::Draw => WidgetContent::Draw(DrawSettings::from_payload(payload)),
            WidgetKind::RandomPicker => WidgetContent::Picker(NamePicker::from_payload(payload)),
            WidgetKind::GroupMaker => WidgetContent::Groups(GroupMaker::from_payload(payload)),
            WidgetKind::Dice => WidgetContent::Dice(DiceTray::from_payload(payload)),
            WidgetKind::Clock => WidgetContent::Clock(LiveClock::from_payload(payload)),
            WidgetKind::Calendar => WidgetContent::Calendar(CalendarView::from_payload(payload)),
            WidgetKind::TrafficLight => WidgetContent::Traffic(TrafficLight::from_payload(payload)),
            WidgetKind::BackgroundSettings => WidgetContent::BackgroundSettings,
            WidgetKind::Other(id) => WidgetContent::Unknown(id.clone(), payload.clone()),
        }
    }

    /// Read the content of a placed widget
    pub fn from_instance(widget: &WidgetInstance) -> Self {
        Self::from_payload(&widget.kind, &widget.payload)
    }

    /// Kind this content belongs to
    pub fn kind(&self) -> WidgetKind {
        match self {
            WidgetContent::Announcement(_) => Announcement::KIND,
            WidgetContent::Embed(_) => EmbedLink::KIND,
            WidgetContent::Countdown(_) => Countdown::KIND,
            WidgetContent::Stopwatch(_) => Stopwatch::KIND,
            WidgetContent::Scoreboard(_) => Scoreboard::KIND,
            WidgetContent::Draw(_) => DrawSettings::KIND,
            WidgetContent::Picker(_) => NamePicker::KIND,
            WidgetContent::Groups(_) => GroupMaker::KIND,
            WidgetContent::Dice(_) => DiceTray::KIND,
            WidgetContent::Clock(_) => LiveClock::KIND,
            WidgetContent::Calendar(_) => CalendarView::KIND,
            WidgetContent::Traffic(_) => TrafficLight::KIND,
            WidgetContent::BackgroundSettings => WidgetKind::BackgroundSettings,
            WidgetContent::Unknown(id, _) => WidgetKind::Other(id.clone()),
        }
    }

    /// Full payload for this content
    pub fn to_payload(&self) -> Payload {
        match self {
            WidgetContent::Announcement(m) => m.to_payload(),
            WidgetContent::Embed(m) => m.to_payload(),
            WidgetContent::Countdown(m) => m.to_payload(),
            WidgetContent::Stopwatch(m) => m.to_payload(),
            WidgetContent::Scoreboard(m) => m.to_payload(),
            WidgetContent::Draw(m) => m.to_payload(),
            WidgetContent::Picker(m) => m.to_payload(),
            WidgetContent::Groups(m) => m.to_payload(),
            WidgetContent::Dice(m) => m.to_payload(),
            WidgetContent::Clock(m) => m.to_payload(),
            WidgetContent::Calendar(m) => m.to_payload(),
            WidgetContent::Traffic(m) => m.to_payload(),
            WidgetContent::BackgroundSettings => Payload::new(),
            WidgetContent::Unknown(_, payload) => payload.clone(),
        }
    }

    /// Tick interval in milliseconds for content that runs periodically
    pub fn tick_interval_ms(&self) -> Option<u32> {
        match self {
            WidgetContent::Countdown(_) => Some(Countdown::TICK_MS),
            WidgetContent::Stopwatch(_) => Some(Stopwatch::TICK_MS),
            WidgetContent::Clock(_) => Some(LiveClock::TICK_MS),
            _ => None,
        }
    }
}
