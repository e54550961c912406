/*
[INPUT]:  Error sources (transport, body read, serialization, exchange envelope, parameters)
[OUTPUT]: Structured error types distinguishing exchange rejections from transport failures
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

use crate::http::envelope::ApiError;

/// Main error type for the Gemini adapter
#[derive(Error, Debug)]
pub enum GeminiError {
    /// Connection, DNS or TLS failure before a response arrived
    #[error("HTTP transport failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response arrived but its body could not be read
    #[error("Failed to read response body: {0}")]
    Body(#[source] reqwest::Error),

    /// The parameter set could not be serialized for signing
    #[error("Failed to encode request payload: {0}")]
    Encoding(#[source] serde_json::Error),

    /// The exchange rejected the request with an error envelope
    #[error("API error {0}")]
    Api(#[from] ApiError),

    /// A GET parameter was not a plain string
    #[error("Invalid query parameter '{key}': only string values can be sent as query parameters")]
    InvalidParameter { key: String },

    /// A private endpoint was called on a client built without credentials
    #[error("Private endpoint {path} requires API credentials")]
    MissingCredentials { path: String },

    /// The success payload did not match the endpoint's response shape
    #[error("Failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl GeminiError {
    /// Check if the exchange itself rejected the request
    pub fn is_api_error(&self) -> bool {
        matches!(self, GeminiError::Api(_))
    }

    /// Reason code reported by the exchange, if this is an API error
    pub fn api_reason(&self) -> Option<&str> {
        match self {
            GeminiError::Api(err) => Some(err.reason.as_str()),
            _ => None,
        }
    }

    /// Check if the failure happened below the exchange (network or body read)
    pub fn is_transport_error(&self) -> bool {
        matches!(self, GeminiError::Transport(_) | GeminiError::Body(_))
    }

    /// Check if the error is a caller contract violation rather than a runtime condition
    pub fn is_contract_violation(&self) -> bool {
        matches!(
            self,
            GeminiError::InvalidParameter { .. }
                | GeminiError::MissingCredentials { .. }
                | GeminiError::Encoding(_)
        )
    }
}

/// Result type alias for Gemini operations
pub type Result<T> = std::result::Result<T, GeminiError>;
