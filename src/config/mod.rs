//! Service configuration - environment variables, CLI overrides, defaults
//!
//! ## Variables
//!
//! | Variable                        | Required | Default                 |
//! |---------------------------------|----------|-------------------------|
//! | `TOAST_CLIENT_ID`               | Yes      |                         |
//! | `TOAST_CLIENT_SECRET`           | Yes      |                         |
//! | `TOAST_LOCATION_ID`             | Yes      |                         |
//! | `TOAST_API_HOSTNAME`            | Yes      |                         |
//! | `ORDER_BOARD_ADDR`              | No       | `0.0.0.0:3000`          |
//! | `ORDER_BOARD_STATIC_DIR`        | No       | `.`                     |
//! | `ORDER_BOARD_MENU_GROUPS`       | No       | built-in allow-list     |
//! | `ORDER_BOARD_LOOKBACK_MINUTES`  | No       | `60` (at most 10080)    |
//! | `ORDER_BOARD_PAGE_SIZE`         | No       | `50`                    |
//! | `ORDER_BOARD_HTTP_TIMEOUT_SECS` | No       | `30`                    |
//!
//! Missing required variables are reported together so an operator can fix
//! the environment in one pass.

pub mod defaults;

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::menu_groups::MenuGroupAllowList;

pub const ENV_CLIENT_ID: &str = "TOAST_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "TOAST_CLIENT_SECRET";
pub const ENV_LOCATION_ID: &str = "TOAST_LOCATION_ID";
pub const ENV_API_HOSTNAME: &str = "TOAST_API_HOSTNAME";
pub const ENV_SERVER_ADDR: &str = "ORDER_BOARD_ADDR";
pub const ENV_STATIC_DIR: &str = "ORDER_BOARD_STATIC_DIR";
pub const ENV_MENU_GROUPS: &str = "ORDER_BOARD_MENU_GROUPS";
pub const ENV_LOOKBACK_MINUTES: &str = "ORDER_BOARD_LOOKBACK_MINUTES";
pub const ENV_PAGE_SIZE: &str = "ORDER_BOARD_PAGE_SIZE";
pub const ENV_HTTP_TIMEOUT_SECS: &str = "ORDER_BOARD_HTTP_TIMEOUT_SECS";

/// Configuration errors. Always fatal at startup.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable(s): {}", .0.join(", "))]
    Missing(Vec<&'static str>),
    #[error("invalid value for {var}: {value:?} ({reason})")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Connection settings for the Toast API.
#[derive(Clone)]
pub struct ToastConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Restaurant external ID sent on every authenticated call
    pub location_id: String,
    /// API host, e.g. `https://ws-api.toasttab.com`
    pub base_url: String,
    pub page_size: u32,
    pub timeout: Duration,
}

// Keeps the client secret out of logs.
impl fmt::Debug for ToastConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("location_id", &self.location_id)
            .field("base_url", &self.base_url)
            .field("page_size", &self.page_size)
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Complete order board configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub toast: ToastConfig,
    /// Bind address (e.g., "0.0.0.0:3000")
    pub server_addr: String,
    /// Dashboard directory served for non-API paths
    pub static_dir: PathBuf,
    pub menu_groups: MenuGroupAllowList,
    /// Width of the order listing window, ending at "now"
    pub lookback: chrono::Duration,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let mut missing = Vec::new();
        let mut required = |key: &'static str| {
            get(key).unwrap_or_else(|| {
                missing.push(key);
                String::new()
            })
        };
        let client_id = required(ENV_CLIENT_ID);
        let client_secret = required(ENV_CLIENT_SECRET);
        let location_id = required(ENV_LOCATION_ID);
        let base_url = required(ENV_API_HOSTNAME);
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let page_size: u32 = parse_positive(ENV_PAGE_SIZE, get(ENV_PAGE_SIZE), defaults::ORDER_PAGE_SIZE)?;
        let timeout_secs: u64 = parse_positive(
            ENV_HTTP_TIMEOUT_SECS,
            get(ENV_HTTP_TIMEOUT_SECS),
            defaults::HTTP_TIMEOUT_SECS,
        )?;
        let lookback_minutes: i64 = parse_positive(
            ENV_LOOKBACK_MINUTES,
            get(ENV_LOOKBACK_MINUTES),
            defaults::LOOKBACK_MINUTES,
        )?;
        let lookback = chrono::Duration::try_minutes(lookback_minutes)
            .filter(|_| lookback_minutes <= defaults::MAX_LOOKBACK_MINUTES)
            .ok_or_else(|| ConfigError::Invalid {
                var: ENV_LOOKBACK_MINUTES,
                value: lookback_minutes.to_string(),
                reason: format!("must be at most {}", defaults::MAX_LOOKBACK_MINUTES),
            })?;

        let menu_groups = match get(ENV_MENU_GROUPS) {
            Some(raw) => {
                let list = MenuGroupAllowList::parse(&raw);
                if list.is_empty() {
                    return Err(ConfigError::Invalid {
                        var: ENV_MENU_GROUPS,
                        value: raw,
                        reason: "no menu group identifiers".to_string(),
                    });
                }
                list
            }
            None => MenuGroupAllowList::default(),
        };

        Ok(Self {
            toast: ToastConfig {
                client_id,
                client_secret,
                location_id,
                base_url: base_url.trim().trim_end_matches('/').to_string(),
                page_size,
                timeout: Duration::from_secs(timeout_secs),
            },
            server_addr: get(ENV_SERVER_ADDR).unwrap_or_else(|| defaults::SERVER_ADDR.to_string()),
            static_dir: get(ENV_STATIC_DIR)
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from(defaults::STATIC_DIR)),
            menu_groups,
            lookback,
        })
    }
}

/// Parse an optional numeric override, rejecting zero and negatives.
fn parse_positive<T>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
    T::Err: fmt::Display,
{
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value: T = raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.clone(),
        reason: e.to_string(),
    })?;
    if value <= T::default() {
        return Err(ConfigError::Invalid {
            var,
            value: raw,
            reason: "must be greater than zero".to_string(),
        });
    }
    Ok(value)
}
