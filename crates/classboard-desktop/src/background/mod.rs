//! Board background module
//!
//! The single, board-wide background record and the tiered image
//! generation used to produce AI backgrounds.

mod types;
mod generate;

pub use types::{BackgroundKind, BackgroundSettings, DEFAULT_BACKGROUND_URL, PRESET_BACKGROUNDS};
pub use generate::{BackgroundGenerator, ImageProvider, ImageTier, ProviderError, DEFAULT_TIERS};
