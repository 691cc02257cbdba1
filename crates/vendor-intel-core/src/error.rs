use thiserror::Error;

#[derive(Debug, Error)]
pub enum VendorIntelError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Insufficient data: {0}")]
    InsufficientData(String),

    #[error("Unknown lookup key: {table} has no entry for '{key}'")]
    UnknownKey { table: String, key: String },

    #[error("Date error: {0}")]
    DateError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for VendorIntelError {
    fn from(e: serde_json::Error) -> Self {
        VendorIntelError::SerializationError(e.to_string())
    }
}

impl From<chrono::ParseError> for VendorIntelError {
    fn from(e: chrono::ParseError) -> Self {
        VendorIntelError::DateError(e.to_string())
    }
}
