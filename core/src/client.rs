//! # REST Client Contract
//!
//! Everything about talking to the remote API except the talking. The host
//! owns HTTP, retries and credential storage; this module owns the parts
//! that have to be right regardless of transport:
//!
//! - which base URL a set of credentials points at,
//! - which headers identify the account,
//! - how a request's path, query and body are shaped,
//! - how the `{ success, data, error }` envelope is unwrapped,
//! - how a paginated listing is walked to the end.
//!
//! Every hex value in a request or response body follows the crate's wire
//! convention (`0x`-prefixed lowercase); this module forwards them verbatim.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use thiserror::Error;
use url::Url;

use crate::config::{
    HEADER_ACCOUNT, HEADER_KEY_TYPE, KEY_LENGTH, MAINNET_ENDPOINT, PAGE_SIZE, TESTNET_ENDPOINT,
};
use crate::crypto::hex::{decode_fixed, encode, FormatError};
pub use crate::types::{AccountType, Network};

/// Errors surfaced to the host when a request can't be built or a response
/// can't be understood.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    Format(#[from] FormatError),

    /// The API answered with `success: false`.
    #[error("API error [{code}]: {message}")]
    Api { code: String, message: String },

    /// `success: true` but no `data`.
    #[error("response envelope has no data")]
    MissingData,

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Non-2xx status from the server.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Raised by transports; never produced by this module.
    #[error("transport error: {0}")]
    Transport(String),
}

// ---------------------------------------------------------------------------
// Credentials
// ---------------------------------------------------------------------------

/// Connection settings for one account on one network.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiCredentials {
    pub network: Network,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc_endpoint: Option<String>,
    pub account_type: AccountType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub spending_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub viewing_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_address: Option<String>,
}

impl Default for ApiCredentials {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            rpc_endpoint: None,
            account_type: AccountType::Spending,
            spending_key: None,
            viewing_key: None,
            account_address: None,
        }
    }
}

impl fmt::Debug for ApiCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Keys are reported as present/absent only.
        f.debug_struct("ApiCredentials")
            .field("network", &self.network)
            .field("rpc_endpoint", &self.rpc_endpoint)
            .field("account_type", &self.account_type)
            .field("spending_key", &self.spending_key.as_ref().map(|_| "<redacted>"))
            .field("viewing_key", &self.viewing_key.as_ref().map(|_| "<redacted>"))
            .field("account_address", &self.account_address)
            .finish()
    }
}

impl ApiCredentials {
    /// Base URL for requests, without a trailing slash.
    ///
    /// A custom network without an endpoint falls back to the testnet URL.
    pub fn endpoint(&self) -> String {
        let endpoint = match (self.network, self.rpc_endpoint.as_deref()) {
            (Network::Custom, Some(custom)) if !custom.is_empty() => {
                custom.strip_suffix('/').unwrap_or(custom).to_string()
            }
            (Network::Mainnet, _) => MAINNET_ENDPOINT.to_string(),
            _ => TESTNET_ENDPOINT.to_string(),
        };
        tracing::debug!(network = %self.network, %endpoint, "resolved API endpoint");
        endpoint
    }

    /// Headers every request carries.
    ///
    /// The account address must be a 32-byte hex value; it is sent in
    /// canonical form.
    pub fn auth_headers(&self) -> Result<Vec<(&'static str, String)>, ClientError> {
        let mut headers = vec![("Content-Type", "application/json".to_string())];

        if let Some(address) = self.account_address.as_deref().filter(|a| !a.is_empty()) {
            let address: [u8; KEY_LENGTH] = decode_fixed(address)?;
            headers.push((HEADER_ACCOUNT, encode(address)));
        }

        let key = match self.account_type {
            AccountType::Spending => &self.spending_key,
            AccountType::Viewing => &self.viewing_key,
        };
        if key.as_deref().is_some_and(|k| !k.is_empty()) {
            headers.push((HEADER_KEY_TYPE, self.account_type.to_string()));
        }

        Ok(headers)
    }
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A transport-agnostic API request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
        }
    }

    /// Replace the query string with the non-empty entries of `params`.
    pub fn with_query(mut self, params: &Value) -> Self {
        self.query = build_query(params);
        self
    }

    /// Set or overwrite a single query parameter.
    pub fn set_query(&mut self, key: &str, value: impl ToString) {
        let value = value.to_string();
        match self.query.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.query.push((key.to_string(), value)),
        }
    }

    /// The body to send, if any. GET requests never carry one.
    pub fn effective_body(&self) -> Option<&Value> {
        match self.method {
            HttpMethod::Get => None,
            _ => self.body.as_ref(),
        }
    }

    /// Full URL against `base`, query string form-encoded.
    pub fn url(&self, base: &str) -> Result<Url, ClientError> {
        let mut url = Url::parse(&format!("{}{}", base.trim_end_matches('/'), self.path))?;
        if !self.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&self.query);
        }
        Ok(url)
    }
}

/// Turn a JSON object of parameters into query pairs.
///
/// Nulls and empty strings are dropped; scalars are stringified. Anything
/// that isn't an object yields no parameters.
pub fn build_query(params: &Value) -> Vec<(String, String)> {
    let Some(map) = params.as_object() else {
        return Vec::new();
    };
    map.iter()
        .filter_map(|(key, value)| {
            let rendered = match value {
                Value::Null => return None,
                Value::String(s) if s.is_empty() => return None,
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            Some((key.clone(), rendered))
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
struct ErrorBody {
    code: String,
    message: String,
}

#[derive(Debug, Clone, Deserialize)]
struct Envelope {
    #[serde(default)]
    success: bool,
    data: Option<Value>,
    error: Option<ErrorBody>,
}

/// Unwrap a `{ success, data, error }` envelope into its typed payload.
pub fn unwrap_envelope<T: DeserializeOwned>(response: Value) -> Result<T, ClientError> {
    let envelope: Envelope = serde_json::from_value(response)
        .map_err(|e| ClientError::InvalidResponse(e.to_string()))?;

    if !envelope.success {
        if let Some(error) = envelope.error {
            return Err(ClientError::Api {
                code: error.code,
                message: error.message,
            });
        }
    }

    let data = envelope.data.ok_or(ClientError::MissingData)?;
    serde_json::from_value(data).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// Walk a paginated listing from page 1 until `hasMore` is no longer true.
///
/// `fetch` performs one request and returns the decoded JSON body. Items
/// are read from the `property` array of each page; a page without that
/// array contributes nothing.
pub fn collect_all_items<F>(
    request: &ApiRequest,
    property: &str,
    mut fetch: F,
) -> Result<Vec<Value>, ClientError>
where
    F: FnMut(&ApiRequest) -> Result<Value, ClientError>,
{
    let mut items = Vec::new();
    let mut page: u32 = 1;

    loop {
        let mut paged = request.clone();
        paged.set_query("page", page);
        paged.set_query("pageSize", PAGE_SIZE);

        let response = fetch(&paged)?;
        if let Some(batch) = response.get(property).and_then(Value::as_array) {
            items.extend(batch.iter().cloned());
        }
        tracing::debug!(path = %request.path, page, total = items.len(), "collected page");

        if response.get("hasMore").and_then(Value::as_bool) != Some(true) {
            break;
        }
        page += 1;
    }

    Ok(items)
}
