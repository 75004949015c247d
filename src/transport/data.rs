use serde::Deserialize;
use serde_json::Value;

use super::lenient::{TransportCount, TransportText};
use crate::domain::{Balance, MessageStatus, SentMessage};

#[derive(Debug, Clone, Deserialize)]
struct SentMessageJson {
    #[serde(default)]
    message_id: Option<TransportText>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    date_created: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default)]
    from: Option<String>,
    #[serde(default)]
    to: Option<TransportText>,
    #[serde(default, rename = "type")]
    kind: Option<TransportText>,
    #[serde(default)]
    message_segments: Option<TransportCount>,
    #[serde(default)]
    cost: Option<TransportText>,
    #[serde(default)]
    service_rate: Option<TransportText>,
    #[serde(default)]
    callback_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct MessageStatusJson {
    #[serde(default)]
    message_id: Option<TransportText>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    readable_date: Option<String>,
    #[serde(default)]
    direction: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<TransportText>,
    #[serde(default)]
    sender: Option<String>,
    #[serde(default)]
    recipient: Option<TransportText>,
    #[serde(default)]
    message_segments: Option<TransportCount>,
    #[serde(default)]
    cost: Option<TransportText>,
    #[serde(default)]
    rate: Option<TransportText>,
    #[serde(default)]
    billing: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
struct BalanceJson {
    #[serde(default)]
    balance: Option<TransportText>,
    #[serde(default)]
    currency: Option<String>,
}

fn text(value: Option<TransportText>) -> Option<String> {
    value.map(TransportText::into_string)
}

pub fn decode_sent_message(data: &Value) -> Result<SentMessage, serde_json::Error> {
    let parsed = SentMessageJson::deserialize(data)?;
    Ok(SentMessage {
        message_id: text(parsed.message_id),
        status: parsed.status,
        message: parsed.message,
        date_created: parsed.date_created,
        direction: parsed.direction,
        from: parsed.from,
        to: text(parsed.to),
        kind: text(parsed.kind),
        message_segments: parsed.message_segments.and_then(TransportCount::into_u32),
        cost: text(parsed.cost),
        service_rate: text(parsed.service_rate),
        callback_url: parsed.callback_url,
    })
}

pub fn decode_message_status(data: &Value) -> Result<MessageStatus, serde_json::Error> {
    let parsed = MessageStatusJson::deserialize(data)?;
    Ok(MessageStatus {
        message_id: text(parsed.message_id),
        status: parsed.status,
        message: parsed.message,
        date: parsed.date,
        readable_date: parsed.readable_date,
        direction: parsed.direction,
        kind: text(parsed.kind),
        sender: parsed.sender,
        recipient: text(parsed.recipient),
        message_segments: parsed.message_segments.and_then(TransportCount::into_u32),
        cost: text(parsed.cost),
        rate: text(parsed.rate),
        billing: parsed.billing,
    })
}

pub fn decode_balance(data: &Value) -> Result<Balance, serde_json::Error> {
    let parsed = BalanceJson::deserialize(data)?;
    Ok(Balance {
        balance: text(parsed.balance),
        currency: parsed.currency,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn decode_sent_message_maps_payload() {
        let data = json!({
            "status": "pending",
            "message_id": "5f3f9a1e",
            "message": "Hello!",
            "date_created": "2020-08-24 09:42:05",
            "direction": "outbound-api",
            "from": "MyApp",
            "to": "233244123456",
            "type": "1",
            "message_segments": 1,
            "cost": "0.035",
            "service_rate": 0.035,
            "callback_url": null
        });

        let parsed = decode_sent_message(&data).unwrap();
        assert_eq!(parsed.message_id.as_deref(), Some("5f3f9a1e"));
        assert_eq!(parsed.to.as_deref(), Some("233244123456"));
        assert_eq!(parsed.kind.as_deref(), Some("1"));
        assert_eq!(parsed.message_segments, Some(1));
        assert_eq!(parsed.cost.as_deref(), Some("0.035"));
        assert_eq!(parsed.service_rate.as_deref(), Some("0.035"));
        assert_eq!(parsed.callback_url, None);
    }

    #[test]
    fn decode_message_status_maps_payload() {
        let data = json!({
            "message_id": "5f3f9a1e",
            "status": "delivered",
            "readable_date": "Aug 24, 2020 9:42 AM",
            "sender": "MyApp",
            "recipient": 233244123456u64,
            "billing": "charged",
            "rate": "0.035"
        });

        let parsed = decode_message_status(&data).unwrap();
        assert_eq!(parsed.status.as_deref(), Some("delivered"));
        assert_eq!(parsed.recipient.as_deref(), Some("233244123456"));
        assert_eq!(parsed.billing.as_deref(), Some("charged"));
        assert_eq!(parsed.readable_date.as_deref(), Some("Aug 24, 2020 9:42 AM"));
        assert!(parsed.is_final());
    }

    #[test]
    fn decode_balance_requires_an_object() {
        assert!(decode_balance(&Value::Null).is_err());
        assert_eq!(decode_balance(&json!({})).unwrap(), Balance::default());
    }
}
