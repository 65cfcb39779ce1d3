//! Dice roller

use rand::Rng;
use serde::{Deserialize, Serialize};
use classboard_desktop::{Payload, WidgetKind};
use crate::ContentModel;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiceTray {
    /// Face values of the last roll
    pub val: Vec<u8>,
}

impl Default for DiceTray {
    fn default() -> Self {
        Self { val: vec![1] }
    }
}

impl ContentModel for DiceTray {
    const KIND: WidgetKind = WidgetKind::Dice;
}

impl DiceTray {
    pub const MAX_DICE: usize = 3;
    /// How long the dice tumble before the result is shown
    pub const SETTLE_MS: u32 = 500;

    /// Roll `count` dice (clamped to 1..=3)
    pub fn roll<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Payload {
        let count = count.clamp(1, Self::MAX_DICE);
        self.val = (0..count).map(|_| rng.gen_range(1..=6)).collect();
        self.patch(&["val"])
    }

    pub fn total(&self) -> u32 {
        self.val.iter().map(|&v| u32::from(v)).sum()
    }
}
