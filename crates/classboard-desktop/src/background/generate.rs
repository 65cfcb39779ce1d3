//! Tiered background image generation
//!
//! The remote image service is reached only through [`ImageProvider`].
//! [`BackgroundGenerator`] walks the tiers from best to cheapest and stops
//! at the first image.

use tracing::{info, warn};
use crate::error::BoardError;
use super::BackgroundSettings;

/// One model attempt in the fallback chain
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ImageTier {
    /// Model identifier passed to the provider
    pub model: &'static str,
    /// Appended to the user's prompt
    pub prompt_suffix: &'static str,
    /// Requested aspect ratio
    pub aspect_ratio: &'static str,
}

impl ImageTier {
    /// Full prompt sent for this tier
    pub fn compose(&self, prompt: &str) -> String {
        format!("{}{}", prompt.trim(), self.prompt_suffix)
    }
}

/// Tiers tried in order, highest quality first
pub const DEFAULT_TIERS: [ImageTier; 3] = [
    ImageTier {
        model: "gemini-3-pro-image-preview",
        prompt_suffix: ", high quality, 4k, suitable for a classroom background, subtle wallpaper style",
        aspect_ratio: "16:9",
    },
    ImageTier {
        model: "gemini-2.5-flash-image",
        prompt_suffix: ", suitable for a classroom background, wallpaper style",
        aspect_ratio: "16:9",
    },
    ImageTier {
        model: "imagen-3.0-generate-001",
        prompt_suffix: ", suitable for a classroom background, wallpaper style",
        aspect_ratio: "16:9",
    },
];

/// Failure of a single tier
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ProviderError {
    /// The provider reported an exhausted quota
    #[error("generation quota exceeded")]
    Quota,
    /// The call succeeded but carried no image
    #[error("no image data returned")]
    NoImage,
    /// Any other failure
    #[error("generation failed: {0}")]
    Failed(String),
}

impl ProviderError {
    /// Classify a provider message, recognising quota markers
    pub fn classify(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.contains("429") || message.contains("RESOURCE_EXHAUSTED") {
            ProviderError::Quota
        } else {
            ProviderError::Failed(message)
        }
    }

    #[inline]
    pub fn is_quota(&self) -> bool {
        matches!(self, ProviderError::Quota)
    }
}

/// Remote image generation service
pub trait ImageProvider {
    /// Generate an image for `prompt` with the given tier, returning an
    /// image reference (normally a data URI).
    fn generate(&mut self, credential: &str, tier: &ImageTier, prompt: &str) -> Result<String, ProviderError>;
}

/// Runs a prompt through the tier chain
pub struct BackgroundGenerator {
    tiers: Vec<ImageTier>,
}

impl Default for BackgroundGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TIERS.to_vec())
    }
}

impl BackgroundGenerator {
    pub fn new(tiers: Vec<ImageTier>) -> Self {
        Self { tiers }
    }

    #[inline]
    pub fn tiers(&self) -> &[ImageTier] {
        &self.tiers
    }

    /// Generate a background for `prompt`.
    ///
    /// Fails with `MissingCredential` before calling the provider when no
    /// usable key is configured, and with `ProviderExhausted` when every
    /// tier fails.
    pub fn generate<P: ImageProvider + ?Sized>(
        &self,
        provider: &mut P,
        credential: Option<&str>,
        prompt: &str,
    ) -> Result<BackgroundSettings, BoardError> {
        let credential = match credential.map(str::trim) {
            Some(key) if !key.is_empty() => key,
            _ => return Err(BoardError::MissingCredential),
        };

        let mut quota_exceeded = false;
        for tier in &self.tiers {
            match provider.generate(credential, tier, &tier.compose(prompt)) {
                Ok(image) if !image.is_empty() => {
                    info!(model = tier.model, "background generated");
                    return Ok(BackgroundSettings::generated(prompt, image));
                }
                Ok(_) => {
                    warn!(model = tier.model, "tier returned an empty image, falling back");
                }
                Err(err) => {
                    warn!(model = tier.model, error = %err, "tier failed, falling back");
                    quota_exceeded |= err.is_quota();
                }
            }
        }

        Err(BoardError::ProviderExhausted { quota_exceeded })
    }
}
