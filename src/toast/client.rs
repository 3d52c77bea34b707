//! Toast Client - HTTP client for the Toast REST API
//!
//! Handles the client-credentials login, order listing, order detail and
//! menu-group lookups. Every authenticated call carries the bearer token and
//! the restaurant external ID header.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use super::auth::{AccessToken, LoginRequest, LoginResponse, TokenCache};
use super::{timestamp, ToastError};
use crate::clock::Clock;
use crate::config::defaults::{RESTAURANT_HEADER, USER_ACCESS_TYPE};
use crate::config::ToastConfig;
use crate::pipeline::OrderSource;
use crate::types::{MenuGroup, Order};

const LOGIN_PATH: &str = "/authentication/v1/authentication/login";
const ORDERS_PATH: &str = "/orders/v2/orders";
const MENU_GROUPS_PATH: &str = "/config/v2/menuGroups";

/// HTTP client for one Toast restaurant location
pub struct ToastClient {
    http: reqwest::Client,
    config: ToastConfig,
    tokens: TokenCache,
}

impl ToastClient {
    /// Create a new client. Fails only if the TLS backend cannot initialise.
    pub fn new(config: ToastConfig, clock: Arc<dyn Clock>) -> Result<Self, ToastError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            http,
            config: ToastConfig {
                base_url: config.base_url.trim_end_matches('/').to_string(),
                ..config
            },
            tokens: TokenCache::new(clock),
        })
    }

    /// Exchange the client credentials for a fresh access token.
    async fn login(&self) -> Result<AccessToken, ToastError> {
        let body = LoginRequest {
            client_id: &self.config.client_id,
            client_secret: &self.config.client_secret,
            user_access_type: USER_ACCESS_TYPE,
        };

        let resp = self
            .http
            .post(format!("{}{}", self.config.base_url, LOGIN_PATH))
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ToastError::Auth(status));
        }

        let bytes = resp.bytes().await?;
        let login: LoginResponse = serde_json::from_slice(&bytes)
            .map_err(|source| ToastError::Decode { what: "login response", source })?;
        Ok(login.token)
    }

    /// Current bearer token, logging in if the cached one has expired.
    pub async fn access_token(&self) -> Result<String, ToastError> {
        self.tokens.get_or_refresh(|| self.login()).await
    }

    /// Authenticated GET returning decoded JSON.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        what: &'static str,
    ) -> Result<T, ToastError> {
        let token = self.access_token().await?;

        let resp = self
            .http
            .get(format!("{}{}", self.config.base_url, path))
            .bearer_auth(token)
            .header(RESTAURANT_HEADER, &self.config.location_id)
            .query(query)
            .send()
            .await?;

        let status = resp.status();
        if status == StatusCode::UNAUTHORIZED {
            // Token rejected before its expiry; the next call logs in again
            warn!(endpoint = path, "Access token rejected, dropping cached token");
            self.tokens.invalidate().await;
        }
        if !status.is_success() {
            return Err(ToastError::Upstream {
                endpoint: path.to_string(),
                status,
            });
        }

        let bytes = resp.bytes().await?;
        serde_json::from_slice(&bytes).map_err(|source| ToastError::Decode { what, source })
    }

    /// GUIDs of orders created between `start` and `end`.
    pub async fn list_order_ids(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<String>, ToastError> {
        let query = [
            ("startDate", timestamp::format(start)),
            ("endDate", timestamp::format(end)),
            ("pageSize", self.config.page_size.to_string()),
        ];
        debug!(start = %query[0].1, end = %query[1].1, "Listing Toast orders");
        self.get_json(ORDERS_PATH, &query, "order list").await
    }

    /// Full order record for one GUID.
    pub async fn fetch_order(&self, id: &str) -> Result<Order, ToastError> {
        self.get_json(&format!("{ORDERS_PATH}/{id}"), &[], "order").await
    }

    /// All menu groups configured for the location.
    pub async fn list_menu_groups(&self) -> Result<Vec<MenuGroup>, ToastError> {
        self.get_json(MENU_GROUPS_PATH, &[], "menu groups").await
    }

    /// Get base URL for logging
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }
}

#[async_trait]
impl OrderSource for ToastClient {
    async fn order_ids(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<String>, ToastError> {
        self.list_order_ids(start, end).await
    }

    async fn order(&self, id: &str) -> Result<Order, ToastError> {
        self.fetch_order(id).await
    }

    fn source_name(&self) -> &str {
        "Toast"
    }
}
