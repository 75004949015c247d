//! Domain layer: strong types with validation and invariants (no I/O).

mod request;
mod response;
mod validation;
mod value;

pub use request::SendMessage;
pub use response::{Balance, Envelope, MessageStatus, SentMessage};
pub use validation::ValidationError;
pub use value::{
    AppId, AppSecret, Credentials, MessageId, MessageKind, MessageText, PhoneNumber, SenderId,
};

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn envelope(data: serde_json::Value) -> Envelope {
        Envelope {
            status: "success".to_owned(),
            code: 2000,
            message: Some("ok".to_owned()),
            data,
            extra: serde_json::Map::new(),
        }
    }

    #[test]
    fn send_message_keeps_validated_parts() {
        let request = SendMessage::flash(
            SenderId::new("Alert").unwrap(),
            PhoneNumber::new("0244123456").unwrap(),
            MessageText::new("hello").unwrap(),
        );
        assert_eq!(request.sender().as_str(), "Alert");
        assert_eq!(request.recipient().international(), "233244123456");
        assert_eq!(request.message().as_str(), "hello");
        assert_eq!(request.kind(), MessageKind::Flash);
    }

    #[test]
    fn envelope_success_flag_follows_status() {
        assert!(envelope(json!({})).is_success());

        let mut failed = envelope(json!({}));
        failed.status = "error".to_owned();
        assert!(!failed.is_success());

        let mut capitalized = envelope(json!({}));
        capitalized.status = "Success".to_owned();
        assert!(!capitalized.is_success());
    }

    #[test]
    fn typed_views_do_not_touch_data() {
        let data = json!({
            "message_id": "abc",
            "status": "pending",
            "cost": 0.035,
            "message_segments": "1",
            "vendor_extra": {"nested": true}
        });
        let env = envelope(data.clone());

        let sent = env.sent_message().unwrap();
        assert_eq!(sent.message_id.as_deref(), Some("abc"));
        assert_eq!(sent.cost.as_deref(), Some("0.035"));
        assert_eq!(sent.message_segments, Some(1));
        assert_eq!(env.data, data);
    }

    #[test]
    fn message_status_finality() {
        let mut status = MessageStatus::default();
        assert!(!status.is_final());

        status.status = Some("pending".to_owned());
        assert!(!status.is_final());

        status.status = Some("Delivered".to_owned());
        assert!(status.is_final());

        status.status = Some("failed".to_owned());
        assert!(status.is_final());
    }

    #[test]
    fn balance_view_reads_string_and_number() {
        let env = envelope(json!({"balance": 12.5, "currency": "GHS"}));
        let balance = env.balance().unwrap();
        assert_eq!(balance.balance.as_deref(), Some("12.5"));
        assert_eq!(balance.currency.as_deref(), Some("GHS"));

        let env = envelope(json!({"balance": "7.00", "currency": "GHS"}));
        assert_eq!(env.balance().unwrap().balance.as_deref(), Some("7.00"));
    }
}
