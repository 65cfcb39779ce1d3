//! Embedded web page

use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

const YOUTUBE_EMBED: &str = "https://www.youtube.com/embed/";

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbedLink {
    pub url: String,
}

impl ContentModel for EmbedLink {
    const KIND: WidgetKind = WidgetKind::Embed;
}

impl EmbedLink {
    /// Load `input`, rewriting YouTube links to their embeddable form
    pub fn load(&mut self, input: &str) -> Payload {
        self.url = embed_url(input.trim());
        self.patch(&["url"])
    }

    /// True once a page has been loaded
    pub fn is_active(&self) -> bool {
        !self.url.is_empty()
    }
}

/// Rewrite `youtube.com/watch?v=` and `youtu.be/` links to embed URLs;
/// anything else is returned unchanged
pub fn embed_url(input: &str) -> String {
    let video_id = if input.contains("youtube.com/watch?v=") {
        input
            .split_once("v=")
            .map(|(_, rest)| rest.split('&').next().unwrap_or_default())
    } else if let Some((_, rest)) = input.split_once("youtu.be/") {
        Some(rest.split('?').next().unwrap_or_default())
    } else {
        None
    };

    match video_id {
        Some(id) if !id.is_empty() => format!("{}{}", YOUTUBE_EMBED, id),
        _ => input.to_string(),
    }
}
