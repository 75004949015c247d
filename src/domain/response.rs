use serde_json::{Map, Value};

/// Uniform wrapper returned by every Wittyflow endpoint.
///
/// `data` is kept exactly as received and any other top-level keys land in `extra`.
/// `code` is normalized to an integer even when sent as a numeric string. Use the
/// typed views ([`Envelope::sent_message`], [`Envelope::message_status`],
/// [`Envelope::balance`]) for field access.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    pub status: String,
    pub code: i64,
    /// `None` when the field is missing or `null`.
    pub message: Option<String>,
    pub data: Value,
    pub extra: Map<String, Value>,
}

impl Envelope {
    pub const SUCCESS: &'static str = "success";

    /// `true` when `status` is exactly `"success"`.
    pub fn is_success(&self) -> bool {
        self.status == Self::SUCCESS
    }

    /// Decode `data` as the result of `messages/send`.
    pub fn sent_message(&self) -> Result<SentMessage, serde_json::Error> {
        crate::transport::decode_sent_message(&self.data)
    }

    /// Decode `data` as the result of `messages/{id}/retrieve`.
    pub fn message_status(&self) -> Result<MessageStatus, serde_json::Error> {
        crate::transport::decode_message_status(&self.data)
    }

    /// Decode `data` as the result of `account/balance`.
    pub fn balance(&self) -> Result<Balance, serde_json::Error> {
        crate::transport::decode_balance(&self.data)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentMessage {
    pub message_id: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub date_created: Option<String>,
    pub direction: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub kind: Option<String>,
    pub message_segments: Option<u32>,
    pub cost: Option<String>,
    pub service_rate: Option<String>,
    pub callback_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageStatus {
    pub message_id: Option<String>,
    pub status: Option<String>,
    pub message: Option<String>,
    pub date: Option<String>,
    pub readable_date: Option<String>,
    pub direction: Option<String>,
    pub kind: Option<String>,
    pub sender: Option<String>,
    pub recipient: Option<String>,
    pub message_segments: Option<u32>,
    pub cost: Option<String>,
    pub rate: Option<String>,
    pub billing: Option<String>,
}

impl MessageStatus {
    /// `true` once delivery has either succeeded or definitively failed.
    pub fn is_final(&self) -> bool {
        self.status.as_deref().is_some_and(|status| {
            status.eq_ignore_ascii_case("delivered") || status.eq_ignore_ascii_case("failed")
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Balance {
    pub balance: Option<String>,
    pub currency: Option<String>,
}
