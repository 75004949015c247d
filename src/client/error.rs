use crate::client::http::BoxError;
use crate::domain::ValidationError;

#[derive(Debug, thiserror::Error)]
/// Errors returned by [`WittyFlowClient`](crate::WittyFlowClient).
///
/// Branch on the variant, not on the message text:
/// - [`Configuration`](Self::Configuration) and [`Validation`](Self::Validation) are raised
///   before any network activity,
/// - [`Remote`](Self::Remote) means Wittyflow answered with a non-2xx status,
/// - [`Network`](Self::Network) means no response arrived,
/// - [`Local`](Self::Local) means the request could not be built or the reply was unreadable.
pub enum WittyFlowError {
    /// Missing or blank credentials at construction time.
    #[error("configuration error: {0}")]
    Configuration(#[source] ValidationError),

    /// One of the caller-supplied values was rejected.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Non-successful HTTP status code returned by Wittyflow.
    #[error("API error: HTTP {status}")]
    Remote { status: u16, body: Option<String> },

    /// The request was dispatched but no response arrived.
    #[error("network error: no response received from the Wittyflow API")]
    Network(#[source] BoxError),

    /// The request could not be constructed or dispatched, or the reply could not be decoded.
    #[error("local error: {0}")]
    Local(#[source] BoxError),
}

impl WittyFlowError {
    /// The `message` field of a JSON error body, when Wittyflow sent one.
    pub fn remote_message(&self) -> Option<String> {
        match self {
            Self::Remote {
                body: Some(body), ..
            } => crate::transport::decode_error_message(body),
            _ => None,
        }
    }

    /// HTTP status of a [`Remote`](Self::Remote) error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Remote { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether repeating the same call may succeed. This crate never retries on its own.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Remote { status, .. } => (500..=599).contains(status),
            Self::Configuration(_) | Self::Validation(_) | Self::Local(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn display_distinguishes_kinds() {
        let err = WittyFlowError::Configuration(ValidationError::Empty { field: "app_id" });
        assert_eq!(
            err.to_string(),
            "configuration error: app_id must not be empty"
        );

        let err = WittyFlowError::Validation(ValidationError::Empty { field: "from" });
        assert_eq!(err.to_string(), "validation error: from must not be empty");

        let err = WittyFlowError::Remote {
            status: 401,
            body: None,
        };
        assert_eq!(err.to_string(), "API error: HTTP 401");

        let err = WittyFlowError::Network(Box::new(io::Error::new(
            io::ErrorKind::ConnectionRefused,
            "connection refused",
        )));
        assert_eq!(
            err.to_string(),
            "network error: no response received from the Wittyflow API"
        );
    }

    #[test]
    fn remote_message_reads_json_body() {
        let err = WittyFlowError::Remote {
            status: 400,
            body: Some(r#"{"message":"bad request"}"#.to_owned()),
        };
        assert_eq!(err.remote_message().as_deref(), Some("bad request"));
        assert_eq!(err.status(), Some(400));

        let err = WittyFlowError::Remote {
            status: 502,
            body: Some("Bad Gateway".to_owned()),
        };
        assert_eq!(err.remote_message(), None);
    }

    #[test]
    fn retryable_kinds() {
        assert!(
            WittyFlowError::Remote {
                status: 503,
                body: None
            }
            .is_retryable()
        );
        assert!(
            !WittyFlowError::Remote {
                status: 400,
                body: None
            }
            .is_retryable()
        );
        assert!(WittyFlowError::Network(Box::new(io::Error::other("reset"))).is_retryable());
        assert!(!WittyFlowError::Local(Box::new(io::Error::other("boom"))).is_retryable());
        assert!(
            !WittyFlowError::Validation(ValidationError::Empty { field: "to" }).is_retryable()
        );
    }
}
