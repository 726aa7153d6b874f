//! Error types for the application

use thiserror::Error;

/// Result type alias using our CommunityError
pub type Result<T> = std::result::Result<T, CommunityError>;

/// Main error type for community data resolution
#[derive(Error, Debug)]
pub enum CommunityError {
    /// A required key is absent from a loosely-typed mapping
    #[error("Missing key '{key}' in {field}")]
    MissingKey { field: &'static str, key: &'static str },

    /// A key is present but its value has the wrong shape
    #[error("Invalid value for {field}: expected {expected}")]
    InvalidValue {
        field: &'static str,
        expected: &'static str,
    },

    /// JSON serialization/deserialization errors
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl CommunityError {
    pub(crate) fn missing_key(field: &'static str, key: &'static str) -> Self {
        CommunityError::MissingKey { field, key }
    }

    pub(crate) fn invalid_value(field: &'static str, expected: &'static str) -> Self {
        CommunityError::InvalidValue { field, expected }
    }

    /// Returns true if this error reports an absent required key
    pub fn is_missing_key(&self) -> bool {
        matches!(self, CommunityError::MissingKey { .. })
    }
}
