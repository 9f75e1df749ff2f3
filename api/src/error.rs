//! Error taxonomy for API calls.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures, 401s, other non-2xx statuses and undecodable bodies are
//! distinct variants so callers can tell "my session is gone" (already handled
//! globally by the response interceptor) from a failure they must surface.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by every call that goes through [`crate::http::HttpClient`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered 401; the token has already been cleared.
    #[error("unauthorized")]
    Unauthorized { message: Option<String> },
    /// Any other non-2xx response.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    /// The response body did not match the expected envelope.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// Rejected client-side before any network call.
    #[error("{0}")]
    Validation(&'static str),
}

impl ApiError {
    /// Server-provided `{error:{message}}` text, when the response carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Unauthorized { message } | Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }
}
