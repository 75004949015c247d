//! Client layer: orchestrates transport calls and maps transport ↔ domain.

mod error;
mod http;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use url::Url;

use crate::domain::{
    AppId, AppSecret, Credentials, Envelope, MessageId, MessageKind, SendMessage,
    ValidationError,
};

pub use error::WittyFlowError;
pub use http::{BoxError, BoxFuture, HttpResponse, HttpTransport, TransportFailure};

use http::ReqwestTransport;

/// Production Wittyflow API root.
pub const DEFAULT_BASE_URL: &str = "https://api.wittyflow.com/v1";

enum Request {
    Get(Url),
    PostJson(Url, serde_json::Value),
}

impl Request {
    fn url(&self) -> &Url {
        match self {
            Self::Get(url) | Self::PostJson(url, _) => url,
        }
    }
}

#[derive(Clone)]
/// Builder for [`WittyFlowClient`].
///
/// Use this when you need to customize the base URL, timeout, user-agent, or the
/// HTTP transport itself. `timeout` and `user_agent` only apply to the built-in
/// `reqwest` transport.
pub struct WittyFlowClientBuilder {
    app_id: String,
    app_secret: String,
    base_url: String,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl WittyFlowClientBuilder {
    /// Create a builder with the default base URL and no timeout/user-agent override.
    pub fn new(app_id: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self {
            app_id: app_id.into(),
            app_secret: app_secret.into(),
            base_url: DEFAULT_BASE_URL.to_owned(),
            timeout: None,
            user_agent: None,
            transport: None,
        }
    }

    /// Override the API root (for example a sandbox or a local mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set an HTTP client timeout applied to the entire request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the HTTP `User-Agent` header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Send requests through a custom [`HttpTransport`] instead of `reqwest`.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Build a [`WittyFlowClient`].
    ///
    /// Fails with [`WittyFlowError::Configuration`] for blank credentials or an
    /// unusable base URL.
    pub fn build(self) -> Result<WittyFlowClient, WittyFlowError> {
        let credentials = Credentials::new(self.app_id, self.app_secret)
            .map_err(WittyFlowError::Configuration)?;

        let base_url = crate::transport::parse_base_url(&self.base_url).map_err(|err| {
            WittyFlowError::Configuration(ValidationError::InvalidBaseUrl {
                input: self.base_url.clone(),
                reason: err.to_string(),
            })
        })?;

        let http = match self.transport {
            Some(transport) => transport,
            None => {
                let mut builder = reqwest::Client::builder();
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                if let Some(user_agent) = self.user_agent {
                    builder = builder.user_agent(user_agent);
                }
                let client = builder
                    .build()
                    .map_err(|err| WittyFlowError::Local(Box::new(err)))?;
                Arc::new(ReqwestTransport { client })
            }
        };

        Ok(WittyFlowClient {
            credentials,
            base_url,
            http,
        })
    }
}

impl fmt::Debug for WittyFlowClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WittyFlowClientBuilder")
            .field("app_id", &self.app_id)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("user_agent", &self.user_agent)
            .field("custom_transport", &self.transport.is_some())
            .finish_non_exhaustive()
    }
}

#[derive(Clone)]
/// High-level Wittyflow SMS client.
///
/// Every operation is a single request/response round trip: credentials are attached,
/// non-2xx replies become [`WittyFlowError::Remote`], and successful replies are returned
/// as an [`Envelope`] whose `data` is untouched. Nothing is cached or retried.
///
/// The client is cheap to clone and safe to share between tasks. To put a deadline on a
/// single call, wrap its future in a timer (e.g. `tokio::time::timeout`); dropping the
/// future cancels the request.
pub struct WittyFlowClient {
    credentials: Credentials,
    base_url: Url,
    http: Arc<dyn HttpTransport>,
}

impl fmt::Debug for WittyFlowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WittyFlowClient")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl WittyFlowClient {
    /// Create a client using the default base URL.
    ///
    /// For more customization, use [`WittyFlowClient::builder`].
    pub fn new(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> Result<Self, WittyFlowError> {
        Self::builder(app_id, app_secret).build()
    }

    /// Start building a client with custom settings.
    pub fn builder(
        app_id: impl Into<String>,
        app_secret: impl Into<String>,
    ) -> WittyFlowClientBuilder {
        WittyFlowClientBuilder::new(app_id, app_secret)
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn app_id(&self) -> &AppId {
        self.credentials.app_id()
    }

    pub fn app_secret(&self) -> &AppSecret {
        self.credentials.app_secret()
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Send a validated message through `POST messages/send`.
    ///
    /// The recipient is sent in international form (`0244123456` → `233244123456`).
    pub async fn send_message(&self, request: SendMessage) -> Result<Envelope, WittyFlowError> {
        let url = crate::transport::send_message_url(&self.base_url);
        let body = crate::transport::encode_send_message_body(&request, &self.credentials)
            .map_err(|err| WittyFlowError::Local(Box::new(err)))?;
        self.execute("send_message", Request::PostJson(url, body)).await
    }

    /// Send a regular SMS.
    ///
    /// `from` is at most 14 characters, `to` is a local Ghana mobile number such as
    /// `0244123456`, `message` is at most 180 characters. Invalid input fails with
    /// [`WittyFlowError::Validation`] without touching the network.
    pub async fn send_sms(
        &self,
        from: &str,
        to: &str,
        message: &str,
    ) -> Result<Envelope, WittyFlowError> {
        let request = SendMessage::parse(from, to, message, MessageKind::Regular)?;
        self.send_message(request).await
    }

    /// Send a flash SMS, displayed immediately on the recipient's screen.
    ///
    /// Accepts the same inputs as [`WittyFlowClient::send_sms`].
    pub async fn send_flash_message(
        &self,
        from: &str,
        to: &str,
        message: &str,
    ) -> Result<Envelope, WittyFlowError> {
        let request = SendMessage::parse(from, to, message, MessageKind::Flash)?;
        self.send_message(request).await
    }

    /// Look up delivery status for a message id returned by a send call.
    ///
    /// Blank ids fail with [`WittyFlowError::Validation`].
    pub async fn get_status(&self, message_id: &str) -> Result<Envelope, WittyFlowError> {
        let id = MessageId::new(message_id)?;
        self.get_status_by_id(&id).await
    }

    /// Same as [`WittyFlowClient::get_status`] for an already validated id.
    pub async fn get_status_by_id(&self, id: &MessageId) -> Result<Envelope, WittyFlowError> {
        let url = crate::transport::message_status_url(&self.base_url, id, &self.credentials);
        self.execute("get_status", Request::Get(url)).await
    }

    /// Fetch the current account balance.
    pub async fn get_balance(&self) -> Result<Envelope, WittyFlowError> {
        let url = crate::transport::balance_url(&self.base_url, &self.credentials);
        self.execute("get_balance", Request::Get(url)).await
    }

    async fn execute(
        &self,
        operation: &'static str,
        request: Request,
    ) -> Result<Envelope, WittyFlowError> {
        // The query carries credentials, log the path only.
        let path = request.url().path().to_owned();
        tracing::debug!(operation, path = %path, "dispatching Wittyflow request");

        let outcome = match request {
            Request::Get(url) => self.http.get(url).await,
            Request::PostJson(url, body) => self.http.post_json(url, body).await,
        };

        let response = match outcome {
            Ok(response) => response,
            Err(TransportFailure::NoResponse(source)) => {
                tracing::warn!(
                    operation,
                    path = %path,
                    error = %source,
                    "no response from Wittyflow"
                );
                return Err(WittyFlowError::Network(source));
            }
            Err(TransportFailure::Local(source)) => {
                tracing::warn!(
                    operation,
                    path = %path,
                    error = %source,
                    "could not dispatch Wittyflow request"
                );
                return Err(WittyFlowError::Local(source));
            }
        };

        if !(200..=299).contains(&response.status) {
            tracing::warn!(
                operation,
                path = %path,
                status = response.status,
                "Wittyflow rejected request"
            );
            let body = if response.body.trim().is_empty() {
                None
            } else {
                Some(response.body)
            };
            return Err(WittyFlowError::Remote {
                status: response.status,
                body,
            });
        }

        let envelope = crate::transport::decode_envelope(&response.body)
            .map_err(|err| WittyFlowError::Local(Box::new(err)))?;

        tracing::debug!(
            operation,
            status = response.status,
            code = envelope.code,
            "Wittyflow request completed"
        );
        Ok(envelope)
    }
}
