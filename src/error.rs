//! Unified SDK error types.

use thiserror::Error;

/// Top-level error for every OGMT operation.
///
/// Variants follow the order in which a call can fail: local preconditions
/// first, then the transport, then the remote application itself.
#[derive(Error, Debug)]
pub enum EdanError {
    /// Required local state is missing (no object group id, no page id, ...).
    /// Detected before any network call.
    #[error("{0}")]
    MissingState(String),

    /// An argument was rejected before any network call.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The connection reported a failure.
    #[error("{context}")]
    Transport {
        errors: Vec<String>,
        context: String,
    },

    /// The response carried an `error` key.
    #[error("{0}")]
    Remote(String),

    /// The response was successful but an expected key was absent.
    #[error("{0}")]
    MalformedResponse(String),
}

impl EdanError {
    pub(crate) fn transport(err: TransportError, context: impl Into<String>) -> Self {
        Self::Transport {
            errors: err.errors,
            context: context.into(),
        }
    }

    /// Ordered error messages: collaborator errors first, then local context.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::Transport { errors, context } => {
                let mut out = errors.clone();
                out.push(context.clone());
                out
            }
            other => vec![other.to_string()],
        }
    }

    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::MissingState(_) | Self::InvalidInput(_))
    }
}

/// Failure reported by an [`EdanConnection`](crate::connection::EdanConnection).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{}", errors.join("; "))]
pub struct TransportError {
    pub errors: Vec<String>,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            errors: vec![message.into()],
        }
    }
}

/// HTTP-layer errors raised by the reqwest transport.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Could not encode parameters: {0}")]
    Encode(#[from] serde_urlencoded::ser::Error),
}

impl From<HttpError> for TransportError {
    fn from(err: HttpError) -> Self {
        TransportError::new(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_messages_keep_collaborator_errors_first() {
        let err = EdanError::transport(
            TransportError {
                errors: vec!["HTTP 500".to_string(), "timeout".to_string()],
            },
            "Could not load object group.",
        );
        assert_eq!(
            err.messages(),
            vec!["HTTP 500", "timeout", "Could not load object group."]
        );
    }

    #[test]
    fn test_single_message_variants() {
        let err = EdanError::Remote("bad id".to_string());
        assert_eq!(err.messages(), vec!["bad id"]);
        assert!(!err.is_precondition());
        assert!(EdanError::MissingState("x".into()).is_precondition());
    }

    #[test]
    fn test_http_error_into_transport_error() {
        let err: TransportError = HttpError::NotFound("nope".to_string()).into();
        assert_eq!(err.errors, vec!["Not found: nope"]);
    }
}
