//! Widget kinds and the registry tables keyed by them

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use crate::math::Size;

/// Kind of content a widget hosts
///
/// Serialized as a short string id. Ids the registry does not know decode
/// as [`WidgetKind::Other`] and are written back unchanged.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Text,
    Embed,
    Timer,
    Stopwatch,
    Score,
    Draw,
    RandomPicker,
    GroupMaker,
    Dice,
    Clock,
    Calendar,
    TrafficLight,
    BackgroundSettings,
    Other(String),
}

static ALL_KINDS: [WidgetKind; 13] = [
    WidgetKind::BackgroundSettings,
    WidgetKind::Text,
    WidgetKind::Embed,
    WidgetKind::TrafficLight,
    WidgetKind::Timer,
    WidgetKind::Stopwatch,
    WidgetKind::Score,
    WidgetKind::Draw,
    WidgetKind::RandomPicker,
    WidgetKind::GroupMaker,
    WidgetKind::Dice,
    WidgetKind::Clock,
    WidgetKind::Calendar,
];

impl WidgetKind {
    /// Size used when a kind has no entry in the table
    pub const FALLBACK_SIZE: Size = Size::new(300.0, 300.0);

    /// Every known kind, in toolbar order
    pub fn all() -> &'static [WidgetKind] {
        &ALL_KINDS
    }

    /// Parse from string id. Never fails; unknown ids become `Other`.
    pub fn from_id(id: &str) -> Self {
        match id.to_lowercase().as_str() {
            "text" => WidgetKind::Text,
            "embed" => WidgetKind::Embed,
            "timer" => WidgetKind::Timer,
            "stopwatch" => WidgetKind::Stopwatch,
            "score" => WidgetKind::Score,
            "draw" => WidgetKind::Draw,
            "random" | "random-picker" => WidgetKind::RandomPicker,
            "group" | "group-maker" => WidgetKind::GroupMaker,
            "dice" => WidgetKind::Dice,
            "clock" => WidgetKind::Clock,
            "calendar" => WidgetKind::Calendar,
            "traffic" | "traffic-light" => WidgetKind::TrafficLight,
            "background" | "background-settings" => WidgetKind::BackgroundSettings,
            _ => WidgetKind::Other(id.to_string()),
        }
    }

    /// Get the string id for this kind
    pub fn id(&self) -> &str {
        match self {
            WidgetKind::Text => "text",
            WidgetKind::Embed => "embed",
            WidgetKind::Timer => "timer",
            WidgetKind::Stopwatch => "stopwatch",
            WidgetKind::Score => "score",
            WidgetKind::Draw => "draw",
            WidgetKind::RandomPicker => "random",
            WidgetKind::GroupMaker => "group",
            WidgetKind::Dice => "dice",
            WidgetKind::Clock => "clock",
            WidgetKind::Calendar => "calendar",
            WidgetKind::TrafficLight => "traffic",
            WidgetKind::BackgroundSettings => "background",
            WidgetKind::Other(id) => id,
        }
    }

    /// Size a freshly created widget of this kind gets
    pub fn default_size(&self) -> Size {
        match self {
            WidgetKind::BackgroundSettings => Size::new(350.0, 500.0),
            WidgetKind::Draw => Size::new(600.0, 450.0),
            WidgetKind::Text => Size::new(500.0, 300.0),
            WidgetKind::Embed => Size::new(500.0, 400.0),
            WidgetKind::Calendar => Size::new(600.0, 500.0),
            WidgetKind::Score => Size::new(350.0, 200.0),
            WidgetKind::Timer => Size::new(300.0, 250.0),
            WidgetKind::Stopwatch => Size::new(350.0, 200.0),
            WidgetKind::TrafficLight => Size::new(200.0, 450.0),
            WidgetKind::RandomPicker => Size::new(300.0, 400.0),
            WidgetKind::GroupMaker => Size::new(400.0, 500.0),
            WidgetKind::Dice => Size::new(300.0, 250.0),
            WidgetKind::Clock => Size::new(350.0, 150.0),
            WidgetKind::Other(_) => Self::FALLBACK_SIZE,
        }
    }

    /// Header title shown for widgets of this kind
    pub fn title(&self) -> &'static str {
        match self {
            WidgetKind::Text => "Announcement",
            WidgetKind::Embed => "Embed Link",
            WidgetKind::TrafficLight => "Traffic Light",
            WidgetKind::Timer => "Timer",
            WidgetKind::Stopwatch => "Stopwatch",
            WidgetKind::Score => "Scoreboard",
            WidgetKind::Draw => "Drawing Board",
            WidgetKind::RandomPicker => "Name Picker",
            WidgetKind::GroupMaker => "Group Maker",
            WidgetKind::Dice => "Dice Roll",
            WidgetKind::Clock => "Clock",
            WidgetKind::Calendar => "Calendar",
            WidgetKind::BackgroundSettings => "Background Settings",
            WidgetKind::Other(_) => "Widget",
        }
    }

    /// At most one widget of a singleton kind may exist at a time
    #[inline]
    pub fn is_singleton(&self) -> bool {
        matches!(self, WidgetKind::BackgroundSettings)
    }
}

impl Serialize for WidgetKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.id())
    }
}

impl<'de> Deserialize<'de> for WidgetKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        Ok(WidgetKind::from_id(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_kinds_roundtrip_through_id() {
        for kind in WidgetKind::all() {
            assert_eq!(&WidgetKind::from_id(kind.id()), kind);
        }
        assert_eq!(WidgetKind::all().len(), 13);
    }

    #[test]
    fn test_long_names_are_aliases() {
        assert_eq!(WidgetKind::from_id("random-picker"), WidgetKind::RandomPicker);
        assert_eq!(WidgetKind::from_id("group-maker"), WidgetKind::GroupMaker);
        assert_eq!(WidgetKind::from_id("traffic-light"), WidgetKind::TrafficLight);
        assert_eq!(WidgetKind::from_id("background-settings"), WidgetKind::BackgroundSettings);
        assert_eq!(WidgetKind::from_id("DICE"), WidgetKind::Dice);
    }

    #[test]
    fn test_unknown_kind_falls_back() {
        let kind = WidgetKind::from_id("poll");
        assert_eq!(kind, WidgetKind::Other("poll".to_string()));
        assert_eq!(kind.default_size(), Size::new(300.0, 300.0));
        assert_eq!(kind.title(), "Widget");
        assert_eq!(kind.id(), "poll");
    }

    #[test]
    fn test_default_sizes() {
        assert_eq!(WidgetKind::Dice.default_size(), Size::new(300.0, 250.0));
        assert_eq!(WidgetKind::TrafficLight.default_size(), Size::new(200.0, 450.0));
        assert_eq!(WidgetKind::BackgroundSettings.default_size(), Size::new(350.0, 500.0));
    }

    #[test]
    fn test_titles() {
        assert_eq!(WidgetKind::RandomPicker.title(), "Name Picker");
        assert_eq!(WidgetKind::Text.title(), "Announcement");
    }

    #[test]
    fn test_serde_uses_short_ids() {
        let json = serde_json::to_string(&WidgetKind::GroupMaker).unwrap();
        assert_eq!(json, "\"group\"");
        let kind: WidgetKind = serde_json::from_str("\"traffic-light\"").unwrap();
        assert_eq!(kind, WidgetKind::TrafficLight);
        let other: WidgetKind = serde_json::from_str("\"poll\"").unwrap();
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"poll\"");
    }

    #[test]
    fn test_only_background_is_singleton() {
        for kind in WidgetKind::all() {
            assert_eq!(kind.is_singleton(), *kind == WidgetKind::BackgroundSettings);
        }
    }
}
