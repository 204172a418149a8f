use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use reqwest_middleware::ClientWithMiddleware;
use url::Url;

use super::utils::QueryParams;

/// Everything needed to perform one HTTP exchange.
///
/// Built once per logical call and reused verbatim by every retry, so the
/// serialized body (and any idempotency token inside it) never changes
/// between attempts.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub method: Method,
    pub url: Url,
    pub query: QueryParams,
    pub body: Option<String>,
    pub headers: HeaderMap,
}

impl RequestContext {
    pub fn new(method: Method, url: Url, headers: HeaderMap) -> Self {
        Self {
            method,
            url,
            query: QueryParams::new(),
            body: None,
            headers,
        }
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    /// Sets a pre-serialized JSON body and the matching content type.
    pub fn with_json_body(mut self, body: String) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(body);
        self
    }
}

/// Status and raw text of a completed exchange.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: StatusCode,
    pub body: String,
}

/// Performs single HTTP exchanges over a pooled client.
///
/// Cloning is cheap and shares the connection pool, so concurrent calls
/// each hold their own `Transport`.
#[derive(Debug, Clone)]
pub struct Transport {
    client: ClientWithMiddleware,
}

impl Transport {
    pub fn new(client: ClientWithMiddleware) -> Self {
        Self { client }
    }

    /// Sends `context` and reads the whole body within `timeout`.
    ///
    /// Any status is a completed exchange; only failures to connect, send
    /// or read (including the timeout) are errors.
    pub async fn exchange(
        &self,
        context: &RequestContext,
        timeout: Duration,
    ) -> Result<RawResponse, reqwest_middleware::Error> {
        let mut req = self
            .client
            .request(context.method.clone(), context.url.clone())
            .headers(context.headers.clone())
            .timeout(timeout);

        if !context.query.is_empty() {
            req = req.query(context.query.as_slice());
        }
        if let Some(body) = &context.body {
            req = req.body(body.clone());
        }

        let resp = req.send().await?;
        let status = resp.status();
        let body = resp.text().await?;

        Ok(RawResponse { status, body })
    }
}
