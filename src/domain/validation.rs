use std::fmt;

use crate::domain::value::{MessageId, PhoneNumber};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    Empty {
        field: &'static str,
    },
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },
    InvalidPhoneNumber {
        input: String,
    },
    InvalidMessageId {
        input: String,
    },
    InvalidBaseUrl {
        input: String,
        reason: String,
    },
}

impl ValidationError {
    /// Name of the offending field, as sent over the wire.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Empty { field } | Self::TooLong { field, .. } => field,
            Self::InvalidPhoneNumber { .. } => PhoneNumber::FIELD,
            Self::InvalidMessageId { .. } => MessageId::FIELD,
            Self::InvalidBaseUrl { .. } => "base_url",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{field} must not be empty"),
            Self::TooLong { field, max, actual } => {
                write!(f, "{field} is too long: {actual} characters (max {max})")
            }
            Self::InvalidPhoneNumber { input } => write!(
                f,
                "invalid phone number: {input} (expected 10 digits like 0244123456)"
            ),
            Self::InvalidMessageId { input } => {
                write!(f, "invalid message id: {input:?} cannot be used as a path segment")
            }
            Self::InvalidBaseUrl { input, reason } => {
                write!(f, "invalid base URL {input:?}: {reason}")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::ValidationError;
    use crate::domain::value::{MessageId, PhoneNumber};

    #[test]
    fn display_messages_are_human_readable() {
        let err = ValidationError::Empty { field: "from" };
        assert_eq!(err.to_string(), "from must not be empty");

        let err = ValidationError::TooLong {
            field: "message",
            max: 180,
            actual: 181,
        };
        assert_eq!(
            err.to_string(),
            "message is too long: 181 characters (max 180)"
        );

        let err = ValidationError::InvalidPhoneNumber {
            input: "bad".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid phone number: bad (expected 10 digits like 0244123456)"
        );

        let err = ValidationError::InvalidMessageId {
            input: "..".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid message id: \"..\" cannot be used as a path segment"
        );

        let err = ValidationError::InvalidBaseUrl {
            input: "ftp://x".to_owned(),
            reason: "unsupported base URL scheme: ftp".to_owned(),
        };
        assert_eq!(
            err.to_string(),
            "invalid base URL \"ftp://x\": unsupported base URL scheme: ftp"
        );
    }

    #[test]
    fn field_names_the_offending_input() {
        assert_eq!(ValidationError::Empty { field: "from" }.field(), "from");
        assert_eq!(
            ValidationError::TooLong {
                field: "message",
                max: 1,
                actual: 2
            }
            .field(),
            "message"
        );
        assert_eq!(
            ValidationError::InvalidPhoneNumber {
                input: "x".to_owned()
            }
            .field(),
            PhoneNumber::FIELD
        );
        assert_eq!(
            ValidationError::InvalidMessageId {
                input: ".".to_owned()
            }
            .field(),
            MessageId::FIELD
        );
    }
}
