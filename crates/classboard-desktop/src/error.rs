//! Error types for board operations
//!
//! Every variant is recoverable: the action that raised it is aborted and
//! the board keeps its in-memory state.

/// Errors surfaced to the user after a save, load or generate action.
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    /// A saved record exists but could not be decoded.
    #[error("failed to load saved state: {0}")]
    LoadFailed(String),

    /// The backing store could not be opened.
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
    /// The backing store rejected a read.
    #[error("storage read failed: {0}")]
    StorageRead(String),
    /// The backing store rejected a write.
    #[error("storage write failed: {0}")]
    StorageWrite(String),

    /// Encoding the dashboard failed.
    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Background generation was requested without an access key.
    #[error("missing credential for background generation")]
    MissingCredential,

    /// Every image-generation tier failed.
    #[error("all image generation tiers failed (quota exceeded: {quota_exceeded})")]
    ProviderExhausted { quota_exceeded: bool },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl BoardError {
    /// Short message suitable for a transient notification
    pub fn notification(&self) -> &'static str {
        match self {
            BoardError::LoadFailed(_) | BoardError::StorageRead(_) => "Failed to load saved state.",
            BoardError::StorageWrite(_) | BoardError::Serialize(_) => "Failed to save screen.",
            BoardError::StorageUnavailable(_) => "Browser storage is unavailable.",
            BoardError::MissingCredential => "API Key is missing. Please select a key.",
            BoardError::ProviderExhausted { quota_exceeded: true } => {
                "Daily generation quota exceeded for all models. Please try again later."
            }
            BoardError::ProviderExhausted { quota_exceeded: false } => {
                "Failed to generate background. Please try again."
            }
            BoardError::InvalidConfig(_) => "Invalid board configuration.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_detail() {
        let err = BoardError::LoadFailed("expected value at line 1".to_string());
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn test_quota_notification_differs() {
        let quota = BoardError::ProviderExhausted { quota_exceeded: true };
        let other = BoardError::ProviderExhausted { quota_exceeded: false };
        assert!(quota.notification().contains("quota"));
        assert_ne!(quota.notification(), other.notification());
    }

    #[test]
    fn test_storage_notifications_follow_operation() {
        let read = BoardError::StorageRead("SecurityError".to_string());
        let write = BoardError::StorageWrite("QuotaExceededError".to_string());
        assert_eq!(read.notification(), "Failed to load saved state.");
        assert_eq!(write.notification(), "Failed to save screen.");
        assert_ne!(BoardError::StorageUnavailable("no window".to_string()).notification(), write.notification());
    }

    #[test]
    fn test_from_serde_error() {
        let json_err = serde_json::from_str::<u32>("x").unwrap_err();
        let err: BoardError = json_err.into();
        assert!(matches!(err, BoardError::Serialize(_)));
    }
}
