//! HTTP seam: the [`HttpTransport`] trait and its `reqwest` implementation.

use std::error::Error as StdError;
use std::future::Future;
use std::pin::Pin;

use url::Url;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

pub type BoxError = Box<dyn StdError + Send + Sync>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Raw HTTP reply: status code and body text.
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

#[derive(Debug)]
/// Why a transport could not produce an [`HttpResponse`].
pub enum TransportFailure {
    /// The request was sent (or attempted) but no response arrived:
    /// connect failures, DNS errors, resets, timeouts.
    NoResponse(BoxError),
    /// The request could not be built or dispatched at all.
    Local(BoxError),
}

/// Minimal HTTP client used by [`WittyFlowClient`](crate::WittyFlowClient).
///
/// Implement this to route requests through a custom stack or a test double.
/// Non-2xx replies must be returned as `Ok` so the client can report them.
pub trait HttpTransport: Send + Sync {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;

    fn post_json<'a>(
        &'a self,
        url: Url,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>>;
}

#[derive(Debug, Clone)]
pub(crate) struct ReqwestTransport {
    pub(crate) client: reqwest::Client,
}

impl ReqwestTransport {
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<HttpResponse, TransportFailure> {
        let response = request.send().await.map_err(classify)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(classify)?;
        Ok(HttpResponse { status, body })
    }
}

impl HttpTransport for ReqwestTransport {
    fn get<'a>(&'a self, url: Url) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move { self.execute(self.client.get(url)).await })
    }

    fn post_json<'a>(
        &'a self,
        url: Url,
        body: serde_json::Value,
    ) -> BoxFuture<'a, Result<HttpResponse, TransportFailure>> {
        Box::pin(async move { self.execute(self.client.post(url).json(&body)).await })
    }
}

fn classify(err: reqwest::Error) -> TransportFailure {
    if err.is_builder() {
        TransportFailure::Local(Box::new(err))
    } else {
        TransportFailure::NoResponse(Box::new(err))
    }
}
