use serde::Serialize;
use serde_json::Value;

use crate::domain::{Credentials, SendMessage};

#[derive(Debug, Serialize)]
struct SendMessageJsonBody<'a> {
    from: &'a str,
    to: String,
    #[serde(rename = "type")]
    kind: &'static str,
    message: &'a str,
    app_id: &'a str,
    app_secret: &'a str,
}

pub fn encode_send_message_body(
    request: &SendMessage,
    credentials: &Credentials,
) -> Result<Value, serde_json::Error> {
    serde_json::to_value(SendMessageJsonBody {
        from: request.sender().as_str(),
        to: request.recipient().international(),
        kind: request.kind().as_wire(),
        message: request.message().as_str(),
        app_id: credentials.app_id().as_str(),
        app_secret: credentials.app_secret().as_str(),
    })
}
