//! Transport/session wrapper for the ZMF REST API
//!
//! Owns a single authenticated blocking HTTP client and funnels every verb
//! through one shared unwrap path: log the call, send it, translate a
//! non-2xx status into [`ZmfError::Transport`], then inspect the vendor
//! envelope and translate a failing `returnCode` into [`ZmfError::Rejected`].
//! On success only the inner `result` payload comes back, with "absent"
//! kept distinct from "empty" because callers branch on it.

use std::time::Duration;

use log::info;
use reqwest::Method;
use reqwest::blocking::Client;
use serde::Deserialize;
use url::Url;

use crate::error::ZmfError;
use crate::payload::Payload;

/// Fixed request timeout; the API gives no contractual value, this just
/// keeps a dead endpoint from hanging the invocation forever.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Rows of the envelope's `result` array: flat string/number-keyed objects
pub type ZmfResult = Vec<serde_json::Map<String, serde_json::Value>>;

/// Domain status embedded in the response body, independent of HTTP status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReturnCode {
    /// "00" - request succeeded
    Ok,
    /// "04" - informational, non-fatal condition
    Info,
    /// "08" - request rejected by the API
    Failure,
    /// Anything else the API might emit; treated as failure
    Unknown,
}

impl ReturnCode {
    /// Map the two-digit wire code onto the enum
    #[must_use]
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("00") => Self::Ok,
            Some("04") => Self::Info,
            Some("08") => Self::Failure,
            _ => Self::Unknown,
        }
    }

    /// OK and INFO both carry a usable result
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Ok | Self::Info)
    }
}

/// The vendor's response envelope, field names bit-exact
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ZmfResponse {
    /// Two-digit domain status code
    #[serde(rename = "returnCode")]
    pub return_code: Option<String>,
    /// Human-readable message, embeds vendor reason codes as substrings
    pub message: Option<String>,
    /// Vendor reason code
    #[serde(rename = "reasonCode")]
    pub reason_code: Option<String>,
    /// Result rows; absent on many non-query operations
    pub result: Option<ZmfResult>,
}

/// Raw outcome of a browse call, which may bypass the envelope entirely
#[derive(Debug, Clone)]
pub enum BrowseOutcome {
    /// The API returned the component source as an attachment body
    Attachment(String),
    /// The API returned a JSON envelope; already unwrapped
    Envelope(Option<ZmfResult>),
}

/// One authenticated session against a fixed base URL.
///
/// Holds the only HTTP client of the invocation; every operation is a
/// single synchronous request/response round trip with no retries.
#[derive(Debug)]
pub struct ZmfSession {
    client: Client,
    base_url: Url,
    user: String,
    password: String,
}

impl ZmfSession {
    /// Build a session from base URL and basic credentials
    pub fn new(url: &str, user: &str, password: &str) -> Result<Self, ZmfError> {
        let base_url = Url::parse(url)?;
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url,
            user: user.to_string(),
            password: password.to_string(),
        })
    }

    /// GET an endpoint, payload as query string, and unwrap the envelope
    pub fn result_get(&self, path: &str, payload: &Payload) -> Result<Option<ZmfResult>, ZmfError> {
        self.call(Method::GET, path, payload)
    }

    /// POST an endpoint and unwrap the envelope
    pub fn result_post(
        &self,
        path: &str,
        payload: &Payload,
    ) -> Result<Option<ZmfResult>, ZmfError> {
        self.call(Method::POST, path, payload)
    }

    /// PUT an endpoint and unwrap the envelope
    pub fn result_put(&self, path: &str, payload: &Payload) -> Result<Option<ZmfResult>, ZmfError> {
        self.call(Method::PUT, path, payload)
    }

    /// DELETE an endpoint and unwrap the envelope
    pub fn result_delete(
        &self,
        path: &str,
        payload: &Payload,
    ) -> Result<Option<ZmfResult>, ZmfError> {
        self.call(Method::DELETE, path, payload)
    }

    /// GET an endpoint that may answer with a raw attachment instead of an
    /// envelope; browse is the only endpoint that does this
    pub fn raw_get(&self, path: &str, payload: &Payload) -> Result<BrowseOutcome, ZmfError> {
        let response = self.send(Method::GET, path, payload)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ZmfError::Transport {
                status: status.as_u16(),
            });
        }

        let is_json = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.contains("application/json"));
        let is_attachment = response
            .headers()
            .get(reqwest::header::CONTENT_DISPOSITION)
            .is_some();

        if is_attachment || !is_json {
            let body = response.text()?;
            return Ok(BrowseOutcome::Attachment(body));
        }

        let envelope: ZmfResponse = serde_json::from_str(&response.text()?)?;
        Ok(BrowseOutcome::Envelope(Self::unwrap_envelope(envelope)?))
    }

    fn send(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> Result<reqwest::blocking::Response, ZmfError> {
        let url = self.base_url.join(path)?;
        info!("{method} {url}");
        info!("payload: {:?}", payload.fields());

        let request = self
            .client
            .request(method.clone(), url)
            .basic_auth(&self.user, Some(&self.password));
        // GET carries the fields in the query string; a GET body is not
        // reliably transported
        let request = if method == Method::GET {
            request.query(payload.fields())
        } else {
            request.form(payload.fields())
        };
        Ok(request.send()?)
    }

    /// The shared unwrap path behind every `result_*` verb
    fn call(
        &self,
        method: Method,
        path: &str,
        payload: &Payload,
    ) -> Result<Option<ZmfResult>, ZmfError> {
        let response = self.send(method, path, payload)?;
        let status = response.status();
        if !status.is_success() {
            return Err(ZmfError::Transport {
                status: status.as_u16(),
            });
        }
        let envelope: ZmfResponse = serde_json::from_str(&response.text()?)?;
        Self::unwrap_envelope(envelope)
    }

    fn unwrap_envelope(envelope: ZmfResponse) -> Result<Option<ZmfResult>, ZmfError> {
        info!(
            "returnCode: {:?} message: {:?} reasonCode: {:?}",
            envelope.return_code, envelope.message, envelope.reason_code
        );
        let code = ReturnCode::from_code(envelope.return_code.as_deref());
        if code.is_success() {
            Ok(envelope.result)
        } else {
            Err(ZmfError::Rejected {
                message: envelope.message.unwrap_or_default(),
            })
        }
    }
}
