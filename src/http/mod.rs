//! Request execution pipeline for the xRocket Pay API.
//!
//! This module turns a logical operation into a reliable, authenticated HTTP
//! exchange and a well-typed result or error. It knows nothing about
//! individual business endpoints; those live in [`crate::api`].
//!
//! # Architecture
//!
//! ```text
//! caller
//!   → HttpClient::execute (build RequestContext once)
//!       → Session::transport → Transport::exchange (per-attempt timeout)
//!       → envelope::decode (JSON object or Failure::NonJson)
//!       → success flag check (Failure::Api)
//!       → RetryPolicy (sleep base * 2^attempt, or surface the failure)
//!   → ResponseEnvelope
//! ```
//!
//! - [`HttpClient`] - the orchestrator and sole retry boundary
//! - [`RetryPolicy`] - transient-failure classification and backoff
//! - [`ResponseEnvelope`] / [`decode`] - response shape normalization
//! - [`Session`] - ownership of the pooled client
//! - [`Failure`] / [`ClientError`] - error taxonomy
//!
//! # Example
//!
//! ```rust,no_run
//! use reqwest::Method;
//! use xrocket_pay::config::ClientConfig;
//! use xrocket_pay::http::{HttpClient, RequestOptions};
//!
//! # async fn example() -> Result<(), xrocket_pay::http::ClientError> {
//! let client = HttpClient::new(&ClientConfig::new("API_KEY").testnet())?;
//! let envelope = client
//!     .execute(Method::GET, "version", RequestOptions::new().require_auth(false).require_success(false))
//!     .await?;
//! println!("API version: {:?}", envelope.version);
//! client.close().await;
//! # Ok(())
//! # }
//! ```

mod envelope;
mod error;
mod http_client;
mod retry;
mod session;
mod transport;
mod utils;

pub use envelope::{ErrorEntry, FieldError, ResponseEnvelope, decode};
pub use error::{ClientError, Failure};
pub use http_client::{API_KEY_HEADER, HttpClient, RequestOptions};
pub use retry::{DEFAULT_BACKOFF_BASE, DEFAULT_MAX_RETRIES, RetryPolicy};
pub use session::{Ownership, Session};
pub use transport::{RawResponse, RequestContext, Transport};
pub use utils::{NON_JSON_BODY_LIMIT, QueryParams, truncate_body};
