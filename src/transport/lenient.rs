use serde::Deserialize;

/// Text-like value returned by Wittyflow as either JSON string or JSON number.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportText {
    String(String),
    Number(serde_json::Number),
}

impl TransportText {
    pub fn into_string(self) -> String {
        match self {
            Self::String(value) => value,
            Self::Number(value) => value.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportCount {
    Int(u32),
    String(String),
}

impl TransportCount {
    pub fn into_u32(self) -> Option<u32> {
        match self {
            Self::Int(value) => Some(value),
            Self::String(value) => value.trim().parse::<u32>().ok(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TransportCode {
    Int(i64),
    String(String),
}

impl TransportCode {
    pub fn into_i64(self) -> Result<i64, String> {
        match self {
            Self::Int(value) => Ok(value),
            Self::String(value) => value.trim().parse::<i64>().map_err(|_| value),
        }
    }
}
