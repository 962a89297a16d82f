//! Error types for the ZMF client
//!
//! Three failure kinds are contractual and must never be conflated: the HTTP
//! layer rejecting a request ([`ZmfError::Transport`]), the vendor API
//! rejecting it inside a successful HTTP exchange ([`ZmfError::Rejected`]),
//! and a config document that cannot be read ([`ZmfError::Config`]). Callers
//! match on the variant to decide the process exit code.

use thiserror::Error;

/// Errors surfaced by the session wrapper, helpers and operations
#[derive(Debug, Error)]
pub enum ZmfError {
    /// HTTP layer returned a status outside the success range
    #[error("HTTP request failed with status {status}")]
    Transport {
        /// Numeric HTTP status code
        status: u16,
    },

    /// HTTP succeeded but the vendor envelope signals failure; carries the
    /// vendor message verbatim (it embeds reason codes like `CMN6504I` that
    /// callers match on)
    #[error("ZMF request rejected: {message}")]
    Rejected {
        /// Vendor message text, unmodified
        message: String,
    },

    /// Structured config document could not be opened or parsed
    #[error("cannot read config {path}: {reason}")]
    Config {
        /// File path as given on the command line (may be `-` for stdin)
        path: String,
        /// Underlying open/parse failure
        reason: String,
    },

    /// Connection-level failure with no HTTP status (refused, timeout, TLS)
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),

    /// Base URL or relative endpoint path failed to resolve
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Response body was not a parseable JSON envelope
    #[error("malformed response body: {0}")]
    Body(#[from] serde_json::Error),
}

impl ZmfError {
    /// Whether this error is a domain-level rejection by the vendor API
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}
