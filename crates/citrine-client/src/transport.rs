//! Moving JSON documents to and from the search service.

use std::time::Duration;

use reqwest::{
    blocking::Client,
    header::{CONTENT_TYPE, HeaderMap, HeaderValue},
};
use tracing::{debug, warn};

use citrine_config::ClientSettings;

use crate::error::TransportError;

/// Header carrying the API key.
const API_KEY_HEADER: &str = "X-API-Key";

/// Sends a JSON body to a path on the service and returns the response body.
///
/// Retries, pooling and authentication are the implementation's business.
pub trait Transport {
    /// Posts `body` to `path`, returning the raw response body.
    fn post_json(&self, path: &str, body: &str) -> Result<String, TransportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post_json(&self, path: &str, body: &str) -> Result<String, TransportError> {
        (**self).post_json(path, body)
    }
}

/// Blocking HTTP transport.
pub struct HttpTransport {
    /// Configured HTTP client.
    client: Client,
    /// Base URL without a trailing slash.
    host: String,
}

impl HttpTransport {
    /// Builds a transport from connection settings.
    pub fn new(settings: &ClientSettings) -> Result<Self, TransportError> {
        Self::with_timeout(
            &settings.host,
            settings.api_key.as_deref(),
            settings.timeout(),
        )
    }

    /// Builds a transport for `host`, sending `api_key` with every request.
    pub fn with_timeout(
        host: &str,
        api_key: Option<&str>,
        timeout: Duration,
    ) -> Result<Self, TransportError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        match api_key {
            Some(key) => {
                let mut value = HeaderValue::from_str(key)?;
                value.set_sensitive(true);
                headers.insert(API_KEY_HEADER, value);
            }
            None => warn!("no API key configured, sending anonymous requests"),
        }

        let client = Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()
            .map_err(TransportError::Build)?;

        Ok(Self {
            client,
            host: host.trim_end_matches('/').to_string(),
        })
    }

    /// The base URL requests are sent to.
    pub fn host(&self) -> &str {
        &self.host
    }
}

impl Transport for HttpTransport {
    fn post_json(&self, path: &str, body: &str) -> Result<String, TransportError> {
        let url = format!("{}{path}", self.host);
        debug!(%url, bytes = body.len(), "POST");

        let request_error = |source: reqwest::Error| TransportError::Request {
            url: url.clone(),
            source,
        };
        let response = self
            .client
            .post(&url)
            .body(body.to_owned())
            .send()
            .map_err(request_error)?;

        let status = response.status();
        let text = response.text().map_err(request_error)?;
        debug!(%url, status = status.as_u16(), bytes = text.len(), "response");

        if !status.is_success() {
            return Err(TransportError::Status {
                url,
                status: status.as_u16(),
                body: text,
            });
        }
        Ok(text)
    }
}
