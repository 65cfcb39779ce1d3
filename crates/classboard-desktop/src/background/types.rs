use serde::{Deserialize, Serialize};

/// Photo shown on a fresh board
pub const DEFAULT_BACKGROUND_URL: &str =
    "https://images.unsplash.com/photo-1509062522246-3755977927d7?q=80&w=2000&auto=format&fit=crop";

/// Image presets offered by the background settings widget
pub const PRESET_BACKGROUNDS: &[&str] = &[
    "https://images.unsplash.com/photo-1509062522246-3755977927d7?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1501504905252-473c47e087f8?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1472289065668-ce650ac443d2?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1451187580459-43490279c0fa?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1497366216548-37526070297c?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1519389950473-47ba0277781c?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1506744038136-46273834b3fb?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1485322551133-3a4c27a9d925?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1507842217121-ad0773cf4a0f?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1588072432836-e10032774350?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1497633762265-9d179a990aa6?auto=format&fit=crop&w=1000&q=80",
    "https://images.unsplash.com/photo-1509228468518-180dd4864904?auto=format&fit=crop&w=1000&q=80",
];

/// Where the background value comes from
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    /// Preset or uploaded image (URL or data URI)
    #[default]
    Image,
    /// Flat CSS colour
    Color,
    /// Image produced by the generation chain
    Ai,
}

impl BackgroundKind {
    /// Get the string ID for this kind
    pub fn id(&self) -> &'static str {
        match self {
            BackgroundKind::Image => "image",
            BackgroundKind::Color => "color",
            BackgroundKind::Ai => "ai",
        }
    }

    /// True when `value` is painted as a background image
    #[inline]
    pub fn is_image(&self) -> bool {
        matches!(self, BackgroundKind::Image | BackgroundKind::Ai)
    }
}

/// Board-wide background. Replaced wholesale, never merged.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackgroundSettings {
    #[serde(alias = "type")]
    pub kind: BackgroundKind,
    /// URL, data URI or colour string
    pub value: String,
    /// Text the image was generated from
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
}

impl Default for BackgroundSettings {
    fn default() -> Self {
        Self::image(DEFAULT_BACKGROUND_URL)
    }
}

impl BackgroundSettings {
    pub fn image(url: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Image,
            value: url.into(),
            prompt: None,
        }
    }

    pub fn color(color: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Color,
            value: color.into(),
            prompt: None,
        }
    }

    /// Background produced from `prompt`
    pub fn generated(prompt: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            kind: BackgroundKind::Ai,
            value: image.into(),
            prompt: Some(prompt.into()),
        }
    }

    /// Preset by index
    pub fn preset(index: usize) -> Option<Self> {
        PRESET_BACKGROUNDS.get(index).map(|url| Self::image(*url))
    }
}
