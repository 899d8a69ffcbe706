// API Error Types
//
// Every failure leaving the transport layer is one of these; raw reqwest
// errors and raw envelopes never escape to callers.

use thiserror::Error;

/// Display text for payloads that fail typed decode. Decode diagnostics are
/// logged, never shown to users verbatim.
pub const VALIDATION_FAILED: &str = "API response validation failed";

/// Message used when a `success: false` envelope carries no text of its own.
pub const ENVELOPE_FALLBACK: &str = "Unknown error occurred";

/// Message used when a failure carries no usable message at all.
pub const UNKNOWN_FALLBACK: &str = "An unknown error occurred";

/// API Error
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The HTTP call failed or returned a non-2xx status
    #[error("{message}")]
    Transport {
        message: String,
        status: Option<u16>,
    },

    /// The call succeeded but the envelope reported `success: false`
    #[error("{message}")]
    Envelope {
        message: String,
        status: Option<u16>,
    },

    /// The payload did not match its expected shape
    #[error("API response validation failed")]
    Validation { status: Option<u16> },

    /// Anything else
    #[error("{message}")]
    Unknown { message: String },
}

impl ApiError {
    /// Build an error from a message alone
    pub fn unknown(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            return ApiError::Unknown {
                message: UNKNOWN_FALLBACK.to_string(),
            };
        }
        ApiError::Unknown { message }
    }

    /// Human-readable message; never empty
    pub fn message(&self) -> &str {
        match self {
            ApiError::Transport { message, .. } => message,
            ApiError::Envelope { message, .. } => message,
            ApiError::Validation { .. } => VALIDATION_FAILED,
            ApiError::Unknown { message } => message,
        }
    }

    /// HTTP status, when one was observed. Advisory only.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Transport { status, .. } => *status,
            ApiError::Envelope { status, .. } => *status,
            ApiError::Validation { status } => *status,
            ApiError::Unknown { .. } => None,
        }
    }

    /// Stable error code for host applications
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "API_TRANSPORT_FAILED",
            ApiError::Envelope { .. } => "API_ENVELOPE_FAILED",
            ApiError::Validation { .. } => "API_VALIDATION_FAILED",
            ApiError::Unknown { .. } => "API_UNKNOWN",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            return ApiError::Transport {
                message: err.to_string(),
                status: Some(status.as_u16()),
            };
        }
        if err.is_timeout() || err.is_connect() {
            return ApiError::Transport {
                message: err.to_string(),
                status: None,
            };
        }
        ApiError::unknown(err.to_string())
    }
}

impl From<ApiError> for String {
    fn from(err: ApiError) -> Self {
        err.to_string()
    }
}

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;
