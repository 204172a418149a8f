//! Error types for the request execution pipeline.
//!
//! This module defines two layers of errors:
//!
//! - [`Failure`] is the classified failure of a single HTTP exchange. It is
//!   the only input the [`RetryPolicy`](super::RetryPolicy) looks at when it
//!   decides whether another attempt is worth making.
//! - [`ClientError`] is what every public operation returns. It wraps a
//!   terminal [`Failure`] together with the local errors that can occur
//!   before or after the exchange (URL building, body encoding, decoding a
//!   domain entity, a closed session).

use reqwest::StatusCode;
use thiserror::Error;

use super::envelope::ResponseEnvelope;

/// Classified failure of one HTTP exchange.
///
/// Every variant keeps enough context (status if known, message if known,
/// raw payload) to be handed to the caller unchanged once retries are
/// exhausted or the failure is judged non-retryable.
///
/// # Example
///
/// ```rust,no_run
/// use xrocket_pay::http::{ClientError, Failure};
///
/// fn describe(err: &ClientError) {
///     match err.failure() {
///         Some(Failure::Api { status, envelope }) => {
///             eprintln!("Rejected ({status:?}): {:?}", envelope.message);
///         }
///         Some(Failure::NonJson { status, body }) => {
///             eprintln!("Garbled response {status}: {body}");
///         }
///         _ => eprintln!("{err}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum Failure {
    /// The exchange did not complete: connection refused, DNS failure,
    /// TLS error or the per-attempt timeout elapsed.
    ///
    /// Once retries are exhausted the orchestrator surfaces this as an
    /// [`Api`](Failure::Api) failure without a status whose message is the
    /// transport error text.
    #[error("Transport failure: {0}")]
    Transport(#[source] reqwest_middleware::Error),

    /// The response body was not a JSON object.
    ///
    /// `body` holds at most the first 300 characters of the raw text.
    #[error("Non-JSON response (status {status}): {body}")]
    NonJson {
        /// The HTTP status of the exchange.
        status: StatusCode,
        /// The truncated raw body.
        body: String,
    },

    /// The exchange completed and the body decoded, but the remote rejected
    /// the operation (`success` was false or missing where it was required).
    #[error("API says: {} (status: {})", api_message(.envelope), status_text(.status))]
    Api {
        /// The HTTP status, absent for surfaced transport failures.
        status: Option<StatusCode>,
        /// The full decoded envelope.
        envelope: ResponseEnvelope,
    },
}

fn api_message(envelope: &ResponseEnvelope) -> &str {
    envelope.message.as_deref().unwrap_or("~")
}

fn status_text(status: &Option<StatusCode>) -> String {
    status.map_or_else(|| "none".to_string(), |s| s.as_u16().to_string())
}

impl Failure {
    /// The HTTP status of the failed exchange, if one was received.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Failure::Transport(_) => None,
            Failure::NonJson { status, .. } => Some(*status),
            Failure::Api { status, .. } => *status,
        }
    }

    /// A human readable message for the failure, if one is known.
    pub fn message(&self) -> Option<String> {
        match self {
            Failure::Transport(e) => Some(e.to_string()),
            Failure::NonJson { body, .. } => Some(format!("Non-JSON response: {body}")),
            Failure::Api { envelope, .. } => envelope.message.clone(),
        }
    }

    /// The decoded envelope, for API failures.
    pub fn envelope(&self) -> Option<&ResponseEnvelope> {
        match self {
            Failure::Api { envelope, .. } => Some(envelope),
            _ => None,
        }
    }

    /// Converts a terminal failure into the shape the caller observes.
    ///
    /// Transport failures become status-less API failures carrying the
    /// transport error text; the other variants are returned as they are.
    pub(crate) fn into_surfaced(self) -> Failure {
        match self {
            Failure::Transport(e) => Failure::Api {
                status: None,
                envelope: ResponseEnvelope::from_message(e.to_string()),
            },
            other => other,
        }
    }
}

/// Errors returned by [`HttpClient`](super::HttpClient) and
/// [`RocketClient`](crate::api::RocketClient) operations.
///
/// # Error Categories
///
/// - **Remote failures**: [`Failure`](ClientError::Failure), the terminal
///   classified failure after the retry loop
/// - **Decode defects**: [`Decode`](ClientError::Decode), a domain entity
///   whose JSON is structurally impossible to map; never retried
/// - **Local errors**: [`Encode`](ClientError::Encode),
///   [`Url`](ClientError::Url), [`InvalidHeader`](ClientError::InvalidHeader),
///   [`Build`](ClientError::Build), [`SessionClosed`](ClientError::SessionClosed)
#[derive(Debug, Error)]
pub enum ClientError {
    /// The remote exchange failed and will not be retried any further.
    #[error(transparent)]
    Failure(#[from] Failure),

    /// The `data` payload could not be mapped onto the requested entity.
    #[error("Failed to decode {entity}: {source}")]
    Decode {
        /// Type name of the entity being decoded.
        entity: &'static str,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },

    /// The request payload could not be serialized to JSON.
    #[error("JSON serialization error: {0}")]
    Encode(#[from] serde_json::Error),

    /// The base URL joined with the endpoint path is not a valid URL.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),

    /// The API key or user agent cannot be sent as an HTTP header value.
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// The internal HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Build(#[from] reqwest::Error),

    /// The client's own session was closed before this call.
    #[error("Session is closed")]
    SessionClosed,
}

impl ClientError {
    /// The classified failure behind this error, if it came from the remote.
    pub fn failure(&self) -> Option<&Failure> {
        match self {
            ClientError::Failure(f) => Some(f),
            _ => None,
        }
    }

    /// HTTP status of the failed exchange, if any.
    pub fn status(&self) -> Option<StatusCode> {
        self.failure().and_then(Failure::status)
    }
}
