//! Access-token cache
//!
//! Toast machine-client tokens are valid for `expiresIn` seconds. The cache
//! hands out the current token until shortly before that point, then logs in
//! again. The slot lock is held across the login call, so concurrent callers
//! that find the token expired wait for a single refresh instead of each
//! issuing their own.

use std::future::Future;
use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::ToastError;
use crate::clock::Clock;
use crate::config::defaults::TOKEN_EXPIRY_MARGIN_SECS;

/// Body of `POST /authentication/v1/authentication/login`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub user_access_type: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: AccessToken,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessToken {
    pub access_token: String,
    /// Lifetime in seconds
    pub expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    value: String,
    expires_at: DateTime<Utc>,
}

/// Process-wide bearer token with expiry-based invalidation.
pub struct TokenCache {
    clock: Arc<dyn Clock>,
    margin: Duration,
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            margin: Duration::seconds(TOKEN_EXPIRY_MARGIN_SECS),
            slot: Mutex::new(None),
        }
    }

    /// Return the cached token, logging in first if it is missing or expired.
    pub async fn get_or_refresh<F, Fut>(&self, login: F) -> Result<String, ToastError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<AccessToken, ToastError>>,
    {
        let mut slot = self.slot.lock().await;
        if let Some(cached) = slot.as_ref() {
            if self.clock.now() < cached.expires_at {
                return Ok(cached.value.clone());
            }
            debug!(expired_at = %cached.expires_at, "Access token expired");
        }

        let token = login().await?;
        let expires_at = self.expiry_for(token.expires_in)?;
        info!(expires_at = %expires_at, "Obtained Toast access token");

        *slot = Some(CachedToken {
            value: token.access_token.clone(),
            expires_at,
        });
        Ok(token.access_token)
    }

    /// `now + expires_in - margin`, rejecting lifetimes chrono cannot represent.
    fn expiry_for(&self, expires_in: i64) -> Result<DateTime<Utc>, ToastError> {
        if expires_in <= 0 {
            return Err(ToastError::TokenLifetime(expires_in));
        }
        Duration::try_seconds(expires_in)
            .and_then(|lifetime| self.clock.now().checked_add_signed(lifetime))
            .and_then(|expiry| expiry.checked_sub_signed(self.margin))
            .ok_or(ToastError::TokenLifetime(expires_in))
    }

    /// Drop the cached token so the next call logs in again.
    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }

    /// When the cached token stops being handed out, if one is cached.
    pub async fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.slot.lock().await.as_ref().map(|c| c.expires_at)
    }
}
