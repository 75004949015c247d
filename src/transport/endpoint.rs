use url::Url;

use crate::domain::{AppId, AppSecret, Credentials, MessageId};

#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("invalid base URL: {0}")]
    Invalid(#[from] url::ParseError),

    #[error("unsupported base URL scheme: {scheme}")]
    UnsupportedScheme { scheme: String },
}

pub fn parse_base_url(raw: &str) -> Result<Url, EndpointError> {
    let url = Url::parse(raw.trim())?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(EndpointError::UnsupportedScheme {
            scheme: other.to_owned(),
        }),
    }
}

fn with_segments<'a>(base: &Url, segments: impl IntoIterator<Item = &'a str>) -> Url {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    // http(s) URLs always have a path, so this cannot fail for a parsed base.
    if let Ok(mut path) = url.path_segments_mut() {
        path.pop_if_empty().extend(segments);
    }
    url
}

fn with_credentials(mut url: Url, credentials: &Credentials) -> Url {
    url.query_pairs_mut()
        .append_pair(AppId::FIELD, credentials.app_id().as_str())
        .append_pair(AppSecret::FIELD, credentials.app_secret().as_str());
    url
}

pub fn send_message_url(base: &Url) -> Url {
    with_segments(base, ["messages", "send"])
}

pub fn message_status_url(base: &Url, id: &MessageId, credentials: &Credentials) -> Url {
    let url = with_segments(base, ["messages", id.as_str(), "retrieve"]);
    with_credentials(url, credentials)
}

pub fn balance_url(base: &Url, credentials: &Credentials) -> Url {
    let url = with_segments(base, ["account", "balance"]);
    with_credentials(url, credentials)
}
