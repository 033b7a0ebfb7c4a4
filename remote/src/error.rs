//! Remote layer errors.

/// Errors raised by the remote access layer.
///
/// The variants mirror the failure taxonomy the controllers classify on:
/// `Server` and `Unauthorized` carry a message already normalized for
/// display, `Network` wraps transport failures (connection refused,
/// timeout), everything else ends up classified as unknown.
#[derive(Debug, thiserror::Error)]
pub enum RemoteError {
    /// The server rejected the request and reported why.
    /// The message is shown to the user verbatim.
    #[error("Server error: {message}")]
    Server { message: String },

    /// The stored credential is missing, expired, or invalid (401/403).
    #[error("Unauthorized: {message}")]
    Unauthorized { message: String },

    /// Transport failure: connection error, TLS failure, or timeout.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body could not be decoded as the expected envelope.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A successful envelope arrived without the data payload it promised.
    #[error("Response envelope carried no data")]
    EmptyEnvelope,

    /// The configured base URL cannot be joined with an endpoint path.
    #[error("Invalid endpoint URL: {0}")]
    Endpoint(#[from] url::ParseError),
}

impl RemoteError {
    /// Build a `Server` error from an envelope-level `error` field.
    pub fn server(message: impl Into<String>) -> Self {
        RemoteError::Server {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        RemoteError::Unauthorized {
            message: message.into(),
        }
    }
}
