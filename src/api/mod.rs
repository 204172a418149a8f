//! Typed operations of the xRocket Pay API.
//!
//! [`RocketClient`] is a thin facade over [`HttpClient`]: each method picks
//! an [`Endpoint`] from the catalogue, builds the query or body, runs it
//! through the request pipeline and decodes `data` into a domain entity.
//!
//! # Example
//!
//! ```rust,no_run
//! use xrocket_pay::api::RocketClient;
//! use xrocket_pay::config::ClientConfig;
//! use xrocket_pay::models::TransferRequest;
//! use xrocket_pay::utils::generate_idempotency_id;
//!
//! # async fn example() -> Result<(), xrocket_pay::http::ClientError> {
//! let client = RocketClient::new(ClientConfig::new("API_KEY"))?;
//! let info = client.get_info().await?;
//! println!("{} holds {:?} TONCOIN", info.name, info.balance_of("TONCOIN"));
//!
//! let transfer = TransferRequest::new(123456789, "TONCOIN", 0.5, generate_idempotency_id());
//! client.send_transfer(&transfer).await?;
//! client.close().await;
//! # Ok(())
//! # }
//! ```

mod app;
mod cheques;
mod currencies;
pub mod endpoints;
mod invoices;
mod transfers;
mod withdrawals;

use log::trace;
use serde::Serialize;

use crate::config::ClientConfig;
use crate::http::{ClientError, HttpClient, QueryParams, RequestOptions, ResponseEnvelope, Session};
use endpoints::Endpoint;

/// Default page size of list operations.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Client for the xRocket Pay API.
///
/// Safe to share across tasks; concurrent calls share one connection pool.
#[derive(Debug)]
pub struct RocketClient {
    http: HttpClient,
}

impl RocketClient {
    /// Creates a client that owns its connection pool.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::new(&config)?,
        })
    }

    /// Creates a client over a caller-supplied session.
    pub fn with_session(config: ClientConfig, session: Session) -> Result<Self, ClientError> {
        Ok(Self {
            http: HttpClient::with_session(&config, session)?,
        })
    }

    pub fn http_client(&self) -> &HttpClient {
        &self.http
    }

    /// Releases the connection pool if this client owns it. Idempotent.
    pub async fn close(&self) {
        self.http.close().await;
    }

    async fn call(
        &self,
        endpoint: &Endpoint,
        path: &str,
        options: RequestOptions,
    ) -> Result<ResponseEnvelope, ClientError> {
        trace!(endpoint = endpoint.name, path = path; "Calling endpoint");
        self.http.execute(endpoint.method.clone(), path, options).await
    }

    async fn get(&self, endpoint: &Endpoint) -> Result<ResponseEnvelope, ClientError> {
        self.call(endpoint, endpoint.path, endpoint.options()).await
    }

    async fn get_with_query(&self, endpoint: &Endpoint, query: QueryParams) -> Result<ResponseEnvelope, ClientError> {
        self.call(endpoint, endpoint.path, endpoint.options().with_query(query))
            .await
    }

    async fn send<B: Serialize>(&self, endpoint: &Endpoint, path: &str, body: &B) -> Result<ResponseEnvelope, ClientError> {
        let body = serde_json::to_value(body)?;
        self.call(endpoint, path, endpoint.options().with_body(body)).await
    }
}

fn page_query(limit: u32, offset: u32) -> QueryParams {
    QueryParams::new().with("limit", limit).with("offset", offset)
}
