use thiserror::Error;

/// Result type alias for PortScope operations
pub type Result<T> = std::result::Result<T, PortscopeError>;

/// Errors that can occur when using the PortScope API
#[derive(Error, Debug)]
pub enum PortscopeError {
    /// The API rejected the request. The message comes from the service and
    /// is shown to users unchanged.
    #[error("{message}")]
    Api {
        /// HTTP status code
        code: u16,
        /// Error message reported by the API
        message: String,
    },

    /// HTTP transport failed before a response arrived
    #[error("HTTP request failed: {0}")]
    Http(String),

    /// JSON parsing/serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Query text rejected before any request was made
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// More results requested than a single call may return
    #[error("too many results requested, the maximum is {max}")]
    LimitExceeded {
        /// Limit the caller asked for
        requested: u32,
        /// Largest allowed limit
        max: u32,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl PortscopeError {
    /// Returns true if the API turned the request away for authentication
    /// reasons
    #[must_use]
    pub const fn is_auth_error(&self) -> bool {
        matches!(self, Self::Api { code: 401, .. })
    }

    /// Returns true if the API turned the request away for credit or rate
    /// reasons
    #[must_use]
    pub const fn is_quota_error(&self) -> bool {
        matches!(self, Self::Api { code: 402 | 429, .. })
    }

    /// Returns the HTTP status code if this error came from an API response
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api { code, .. } => Some(*code),
            _ => None,
        }
    }
}
