//! Utility types for building requests and reporting failures.
//!
//! # Query parameters
//!
//! The remote treats an empty query value differently from a missing one,
//! so [`QueryParams`] never emits a key whose value is absent.

use std::fmt::Display;

use serde::Serialize;

/// Maximum number of characters of a non-JSON body kept in a failure.
pub const NON_JSON_BODY_LIMIT: usize = 300;

/// Returns at most the first [`NON_JSON_BODY_LIMIT`] characters of `body`.
///
/// Counts characters rather than bytes so multi-byte text is never split.
pub fn truncate_body(body: &str) -> String {
    body.chars().take(NON_JSON_BODY_LIMIT).collect()
}

/// Ordered query string parameters with scalar values.
///
/// # Example
///
/// ```rust
/// use xrocket_pay::http::QueryParams;
///
/// let comment: Option<&str> = None;
/// let params = QueryParams::new()
///     .with("limit", 100)
///     .with("offset", 0)
///     .with_opt("comment", comment);
/// assert_eq!(params.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(Vec<(&'static str, String)>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `key=value`.
    pub fn with(mut self, key: &'static str, value: impl Display) -> Self {
        self.0.push((key, value.to_string()));
        self
    }

    /// Appends `key=value` only when a value is present.
    pub fn with_opt<V: Display>(self, key: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.iter().find(|(k, _)| *k == key).map(|(_, v)| v.as_str())
    }

    pub fn as_slice(&self) -> &[(&'static str, String)] {
        &self.0
    }
}
