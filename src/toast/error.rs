//! Toast API errors

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ToastError {
    /// The credential exchange was rejected.
    #[error("authentication rejected with status {0}")]
    Auth(StatusCode),
    #[error("{endpoint} returned status {status}")]
    Upstream {
        endpoint: String,
        status: StatusCode,
    },
    /// The login succeeded but its `expiresIn` cannot be turned into an expiry.
    #[error("login returned an unusable token lifetime of {0} seconds")]
    TokenLifetime(i64),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ToastError {
    /// Upstream HTTP status, when the failure carried one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Auth(status) | Self::Upstream { status, .. } => Some(*status),
            Self::Http(e) => e.status(),
            Self::TokenLifetime(_) | Self::Decode { .. } => None,
        }
    }
}
