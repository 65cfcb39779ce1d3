//! Random name picker

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

/// Newline-separated list of names to draw from
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamePicker {
    pub names: String,
}

impl ContentModel for NamePicker {
    const KIND: WidgetKind = WidgetKind::RandomPicker;
}

impl NamePicker {
    /// Frames shown before the pick settles
    pub const FRAMES: u32 = 20;
    pub const FRAME_MS: u32 = 100;

    pub fn set_names(&mut self, names: impl Into<String>) -> Payload {
        self.names = names.into();
        self.patch(&["names"])
    }

    /// Non-blank lines
    pub fn candidates(&self) -> Vec<String> {
        parse_names(&self.names)
    }

    /// Begin a pick; `None` when there is nobody to pick
    pub fn start(&self) -> Option<PickRound> {
        let candidates = self.candidates();
        if candidates.is_empty() {
            return None;
        }
        Some(PickRound {
            candidates,
            remaining: Self::FRAMES,
            current: None,
        })
    }
}

/// One animated pick: a name is shown per frame and the last one stands
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PickRound {
    candidates: Vec<String>,
    remaining: u32,
    current: Option<String>,
}

impl PickRound {
    /// Show the next frame. Returns false once the pick has settled.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.current = self.candidates.choose(rng).cloned();
        self.remaining -= 1;
        true
    }

    /// Run every remaining frame
    pub fn finish<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&str> {
        while self.step(rng) {}
        self.current()
    }

    /// Name currently shown
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.remaining > 0
    }
}

/// Split a name list into non-blank lines
pub(crate) fn parse_names(names: &str) -> Vec<String> {
    names
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect()
}
