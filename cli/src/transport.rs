//! # API Transport
//!
//! Executes [`ApiRequest`]s against the configured network with `reqwest`
//! over rustls. The core crate decides what a request looks like; this
//! module only turns it into bytes on the wire and turns the reply back
//! into JSON.

use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde_json::Value;

use aztec_privacy_core::client::{ApiCredentials, ApiRequest, ClientError, HttpMethod};

/// Upper bound on a single request, connect included.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// An HTTP client bound to one set of credentials.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    credentials: ApiCredentials,
    base: String,
}

impl ApiClient {
    pub fn new(credentials: ApiCredentials) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("aztec-privacy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(transport_error)?;
        let base = credentials.endpoint();

        Ok(Self {
            http,
            credentials,
            base,
        })
    }

    /// Build the wire request without sending it.
    pub fn build(&self, request: &ApiRequest) -> Result<reqwest::Request, ClientError> {
        let url = request.url(&self.base)?;

        let mut headers = HeaderMap::new();
        for (name, value) in self.credentials.auth_headers()? {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ClientError::Transport(e.to_string()))?;
            let value =
                HeaderValue::from_str(&value).map_err(|e| ClientError::Transport(e.to_string()))?;
            headers.insert(name, value);
        }

        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.http.request(method, url).headers(headers);
        if let Some(body) = request.effective_body() {
            builder = builder.json(body);
        }
        builder.build().map_err(transport_error)
    }

    /// Send `request` and decode the JSON reply.
    ///
    /// Any non-2xx status is [`ClientError::Http`] carrying the body text.
    pub async fn send(&self, request: &ApiRequest) -> Result<Value, ClientError> {
        let built = self.build(request)?;
        tracing::debug!(method = %built.method(), url = %built.url(), "sending request");

        let response = self.http.execute(built).await.map_err(transport_error)?;
        let status = response.status();
        let body = response.text().await.map_err(transport_error)?;
        tracing::debug!(status = status.as_u16(), bytes = body.len(), "response received");

        if !status.is_success() {
            return Err(ClientError::Http {
                status: status.as_u16(),
                body: body.trim().to_string(),
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::InvalidResponse(e.to_string()))
    }
}

fn transport_error(err: reqwest::Error) -> ClientError {
    ClientError::Transport(err.to_string())
}
