// Copyright 2025 The xrocket-pay Authors
// SPDX-License-Identifier: BSD-3-Clause

use std::time::{Duration, Instant};

use log::{debug, warn};
use reqwest::Method;
use reqwest::header::{ACCEPT, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde_json::Value;
use tokio::sync::RwLock;
use url::Url;

use super::envelope::{self, ResponseEnvelope};
use super::error::{ClientError, Failure};
use super::retry::RetryPolicy;
use super::session::Session;
use super::transport::{RequestContext, Transport};
use super::utils::QueryParams;
use crate::config::ClientConfig;

/// Header carrying the API key on authenticated calls.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("rocket-pay-key");

/// Per-call options for [`HttpClient::execute`].
///
/// Defaults to an authenticated call that requires `success: true`.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub query: QueryParams,
    pub body: Option<Value>,
    pub require_auth: bool,
    pub require_success: bool,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            query: QueryParams::new(),
            body: None,
            require_auth: true,
            require_success: true,
        }
    }
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_query(mut self, query: QueryParams) -> Self {
        self.query = query;
        self
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn require_auth(mut self, require_auth: bool) -> Self {
        self.require_auth = require_auth;
        self
    }

    pub fn require_success(mut self, require_success: bool) -> Self {
        self.require_success = require_success;
        self
    }
}

/// Turns a logical operation into an authenticated, retried HTTP exchange.
///
/// One call is one sequential pipeline: build the request context once,
/// exchange, decode the envelope, enforce the success flag, and on a
/// classified failure consult the [`RetryPolicy`]. Concurrent calls share
/// only the session's connection pool.
///
/// The timeout bounds each attempt, not the whole call; see
/// [`RetryPolicy::worst_case_latency`] for the total.
#[derive(Debug)]
pub struct HttpClient {
    base_url: String,
    session: Session,
    auth_headers: HeaderMap,
    noauth_headers: HeaderMap,
    retry_policy: RetryPolicy,
    timeout: Duration,
    last_latency: RwLock<Option<(Duration, Instant)>>,
}

impl HttpClient {
    /// Creates a client with its own session.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        Self::with_session(config, Session::owned()?)
    }

    /// Creates a client over an existing session.
    pub fn with_session(config: &ClientConfig, session: Session) -> Result<Self, ClientError> {
        let base_url = config.base_url();
        Url::parse(&base_url)?;

        let user_agent = HeaderValue::from_str(&config.user_agent)?;
        let accept = HeaderValue::from_static("application/json");

        let mut noauth_headers = HeaderMap::new();
        noauth_headers.insert(USER_AGENT, user_agent);
        noauth_headers.insert(ACCEPT, accept);

        let mut api_key = HeaderValue::from_str(&config.api_key)?;
        api_key.set_sensitive(true);
        let mut auth_headers = noauth_headers.clone();
        auth_headers.insert(API_KEY_HEADER, api_key);

        Ok(Self {
            base_url,
            session,
            auth_headers,
            noauth_headers,
            retry_policy: config.retry_policy(),
            timeout: config.timeout(),
            last_latency: RwLock::new(None),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn retry_policy(&self) -> &RetryPolicy {
        &self.retry_policy
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Executes `method path` until it succeeds, fails permanently, or the
    /// retry policy gives up.
    ///
    /// The caller observes the last failure unchanged, except that a
    /// transport failure is surfaced as a status-less [`Failure::Api`].
    pub async fn execute(
        &self,
        method: Method,
        path: &str,
        options: RequestOptions,
    ) -> Result<ResponseEnvelope, ClientError> {
        let require_success = options.require_success;
        let context = self.build_context(method, path, options)?;
        let transport = self.session.transport().await?;

        let mut attempt: u32 = 0;
        loop {
            debug!(
                method:% = context.method,
                path = path,
                attempt = attempt;
                "Sending request"
            );

            let failure = match self.attempt(&transport, &context, require_success).await {
                Ok(envelope) => return Ok(envelope),
                Err(failure) => failure,
            };

            if !self.retry_policy.should_retry(&failure, attempt) {
                if attempt > 0 && RetryPolicy::is_retryable(&failure) {
                    warn!(
                        method:% = context.method,
                        path = path,
                        attempts = attempt + 1,
                        error:% = failure;
                        "Request failed, retries exhausted"
                    );
                }
                return Err(failure.into_surfaced().into());
            }

            let delay = self.retry_policy.delay_for(attempt);
            warn!(
                method:% = context.method,
                path = path,
                attempt = attempt + 1,
                delay_ms = delay.as_millis() as u64,
                error:% = failure;
                "Request failed, retrying"
            );
            tokio::time::sleep(delay).await;
            attempt += 1;
        }
    }

    fn build_context(&self, method: Method, path: &str, options: RequestOptions) -> Result<RequestContext, ClientError> {
        let url = Url::parse(&format!("{}/{}", self.base_url, path.trim_start_matches('/')))?;
        let headers = if options.require_auth {
            self.auth_headers.clone()
        } else {
            self.noauth_headers.clone()
        };

        let mut context = RequestContext::new(method, url, headers).with_query(options.query);
        if let Some(body) = options.body {
            context = context.with_json_body(serde_json::to_string(&body)?);
        }
        Ok(context)
    }

    async fn attempt(
        &self,
        transport: &Transport,
        context: &RequestContext,
        require_success: bool,
    ) -> Result<ResponseEnvelope, Failure> {
        let start = Instant::now();
        let response = transport
            .exchange(context, self.timeout)
            .await
            .map_err(Failure::Transport)?;
        self.update_latency(start.elapsed()).await;

        let envelope = envelope::decode(&response.body, response.status)?;
        if require_success && !envelope.is_success() {
            return Err(Failure::Api {
                status: Some(response.status),
                envelope,
            });
        }
        Ok(envelope)
    }

    async fn update_latency(&self, duration: Duration) {
        *self.last_latency.write().await = Some((duration, Instant::now()));
    }

    /// Round-trip time of the most recent completed exchange.
    pub async fn last_latency(&self) -> Option<Duration> {
        self.last_latency.read().await.map(|(d, _)| d)
    }

    /// Releases the session's client if it is owned. Idempotent.
    pub async fn close(&self) {
        self.session.close().await;
    }
}
