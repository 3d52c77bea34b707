//! Toast POS API client
//!
//! ## Modules
//!
//! - `auth`      - access-token cache with single-flight refresh
//! - `client`    - authenticated REST calls (orders, menu groups)
//! - `error`     - failure taxonomy for upstream calls
//! - `timestamp` - Toast's `+0000` timestamp format

pub mod auth;
pub mod client;
mod error;
pub mod timestamp;

pub use auth::{AccessToken, TokenCache};
pub use client::ToastClient;
pub use error::ToastError;
