//! Typed Rust client for the Wittyflow SMS HTTP API.
//!
//! The crate is split into a domain layer of validated types, a transport layer
//! for URL and wire-format details, and a small client layer that issues one
//! request per call and normalizes failures into [`WittyFlowError`].
//!
//! ```rust,no_run
//! use wittyflow::WittyFlowClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), wittyflow::WittyFlowError> {
//!     let client = WittyFlowClient::new("app-id", "app-secret")?;
//!     let sent = client.send_sms("MyApp", "0244123456", "hello").await?;
//!     println!("sent: {}", sent.data);
//!
//!     let balance = client.get_balance().await?;
//!     println!("balance: {}", balance.data);
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{
    DEFAULT_BASE_URL, HttpResponse, HttpTransport, TransportFailure, WittyFlowClient,
    WittyFlowClientBuilder, WittyFlowError,
};
pub use domain::{
    AppId, AppSecret, Balance, Credentials, Envelope, MessageId, MessageKind, MessageStatus,
    MessageText, PhoneNumber, SendMessage, SenderId, SentMessage, ValidationError,
};
