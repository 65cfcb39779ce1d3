//! Announcement text

use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Announcement {
    pub text: String,
}

impl ContentModel for Announcement {
    const KIND: WidgetKind = WidgetKind::Text;
}

impl Announcement {
    pub fn set_text(&mut self, text: impl Into<String>) -> Payload {
        self.text = text.into();
        self.patch(&["text"])
    }
}
