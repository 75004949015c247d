//! Transport layer: URL building and wire-format details (serialization/deserialization).

mod data;
mod endpoint;
mod envelope;
mod lenient;
mod send_message;

pub use data::{decode_balance, decode_message_status, decode_sent_message};
pub use endpoint::{balance_url, message_status_url, parse_base_url, send_message_url};
pub use envelope::{decode_envelope, decode_error_message};
pub use send_message::encode_send_message_body;
