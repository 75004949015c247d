use serde::Deserialize;
use serde_json::{Map, Value};

use super::lenient::TransportCode;
use crate::domain::Envelope;

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("response code is not a number: {value}")]
    InvalidCode { value: String },
}

#[derive(Debug, Clone, Deserialize)]
struct EnvelopeJson {
    status: String,
    code: TransportCode,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    data: Value,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

pub fn decode_envelope(json: &str) -> Result<Envelope, TransportError> {
    let parsed: EnvelopeJson = serde_json::from_str(json)?;
    let code = parsed
        .code
        .into_i64()
        .map_err(|value| TransportError::InvalidCode { value })?;
    Ok(Envelope {
        status: parsed.status,
        code,
        message: parsed.message,
        data: parsed.data,
        extra: parsed.extra,
    })
}

/// `message` field of a JSON error body, if any.
pub fn decode_error_message(body: &str) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorJson {
        message: Option<String>,
    }

    serde_json::from_str::<ErrorJson>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
}
