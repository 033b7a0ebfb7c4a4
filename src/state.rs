//! The request-state model driving every screen.
//!
//! Each screen-level controller owns one or more [`RequestState`] values
//! and publishes transitions through a
//! [`StateCell`](crate::container::StateCell). The presentation layer
//! matches exhaustively on the variant to choose between a spinner, an
//! inline refresh indicator, content, or an error view with a retry
//! affordance.
//!
//! # Transitions
//!
//! ```text
//! Idle ──load──> Loading{refreshing:false} ──> Success(data)
//!                                          └─> Failure(error)
//! Success ──load(refresh)──> Loading{refreshing:true} ──> Success | Failure
//! Failure ──retry──> Loading{refreshing:false} ──> Success | Failure
//! ```
//!
//! `Loading { refreshing: true }` only ever follows a `Success`: a refresh
//! implies there was something on screen to refresh, and the presentation
//! layer keeps the old content visible behind the indicator. A `Failure`
//! clears content; there is no stale-data variant.

use std::fmt;

use remote::RemoteError;

/// Coarse error category attached to every [`RequestState::Failure`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connection failures and timeouts.
    Network,
    /// The server rejected the request and said why.
    Server,
    /// Expired or invalid credential; the presentation layer redirects to
    /// login on this one.
    Unauthorized,
    /// Anything else.
    Unknown,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            ErrorKind::Network => "network",
            ErrorKind::Server => "server",
            ErrorKind::Unauthorized => "unauthorized",
            ErrorKind::Unknown => "unknown",
        };
        write!(f, "{kind}")
    }
}

/// What the user sees when a request fails: a displayable message plus a
/// machine-usable classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub message: String,
    pub kind: ErrorKind,
}

impl ErrorInfo {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            kind,
        }
    }
}

/// Fallback message for failures with no displayable cause.
const GENERIC_FAILURE: &str = "Something went wrong";

impl From<RemoteError> for ErrorInfo {
    fn from(err: RemoteError) -> Self {
        match err {
            RemoteError::Server { message } => ErrorInfo::new(ErrorKind::Server, message),
            RemoteError::Unauthorized { message } => {
                ErrorInfo::new(ErrorKind::Unauthorized, message)
            }
            RemoteError::Network(source) => {
                ErrorInfo::new(ErrorKind::Network, source.to_string())
            }
            other => {
                tracing::warn!("unclassified remote failure: {other}");
                ErrorInfo::new(ErrorKind::Unknown, GENERIC_FAILURE)
            }
        }
    }
}

/// One request/response cycle as a typed, observable value.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestState<T> {
    /// No request issued yet.
    Idle,
    /// Request in flight. `refreshing` distinguishes an update over
    /// existing content from a first load.
    Loading { refreshing: bool },
    /// Last request completed; `data` may be an empty collection.
    Success(T),
    /// Last request failed. Previous content is gone.
    Failure(ErrorInfo),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Loading { .. })
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RequestState::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, RequestState::Failure(_))
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            RequestState::Success(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            RequestState::Failure(err) => Some(err),
            _ => None,
        }
    }
}
