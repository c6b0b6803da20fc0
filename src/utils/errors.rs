use thiserror::Error;

/// Errors surfaced by the feed and the interactive session
#[derive(Debug, Error)]
pub enum FeedError {
    /// The transaction source could not deliver a batch. Retryable.
    #[error("Fetch failed: {0}")]
    FetchFailed(String),
    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },
    #[error("Transaction not found: {0}")]
    UnknownTransaction(String),
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
    #[error("Failed to serialize sections: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl FeedError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, FeedError::FetchFailed(_))
    }
}

/// Turn an error into the message shown to the user
///
/// Strips the variant prefix so that:
/// "Transaction not found: 42"
///
/// is shown as:
/// "❌ Transaction not found: 42"
///
/// and retryable fetch failures get a hint instead of the raw cause.
pub fn user_message(error: &FeedError) -> String {
    match error {
        FeedError::FetchFailed(_) => {
            "⚠️ **Network Error**: Could not load more transactions. Scroll again to retry.".to_string()
        }
        FeedError::InvalidCommand(detail) => format!("❌ {}", detail),
        other => format!("❌ {}", other),
    }
}
