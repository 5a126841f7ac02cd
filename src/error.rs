//! Vegvisir error types

/// Vegvisir error types
#[derive(Debug, thiserror::Error)]
pub enum VegvisirError {
    /// Connection-level failure (dial, TLS, unexpected transport close).
    #[error("transport error: {0}")]
    Transport(String),

    /// A streaming send/receive failed mid-session with something other
    /// than clean end-of-input.
    #[error("stream error: {0}")]
    Stream(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("configuration error: {0}")]
    Configuration(String),
}

/// Result type alias for Vegvisir operations
pub type Result<T> = std::result::Result<T, VegvisirError>;
