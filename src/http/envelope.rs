// Copyright 2025 The xrocket-pay Authors
// SPDX-License-Identifier: BSD-3-Clause

use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::{ClientError, Failure};
use super::utils::truncate_body;
use crate::models;

/// Normalized top-level response shape shared by every endpoint.
///
/// Fields the remote sends beyond the five known ones (the health check's
/// `status`, for instance) are kept in `extra` so the envelope round-trips
/// without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the envelope's `errors` list.
///
/// Validation errors arrive as `{"property": ..., "error": ...}` objects;
/// anything else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorEntry {
    Field(FieldError),
    Other(Value),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldError {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub property: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ResponseEnvelope {
    /// Envelope carrying only a message, used when a failure has no body of
    /// its own to report.
    pub fn from_message(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Default::default()
        }
    }

    /// Whether the remote reported success.
    ///
    /// A missing `success` key counts as `false`: "missing" and "explicit
    /// false" are the same outcome for calls that require success.
    pub fn is_success(&self) -> bool {
        self.success.unwrap_or(false)
    }

    /// A top-level field outside the five envelope keys.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.extra.get(name)
    }

    /// Decodes `data` into a domain entity, substituting the entity's
    /// defaults when `data` is absent.
    pub fn into_data<T>(self) -> Result<T, ClientError>
    where
        T: DeserializeOwned + Default,
    {
        models::from_api(self.data)
    }
}

/// Decodes a raw response body into a [`ResponseEnvelope`].
///
/// Only a body that is not a JSON object fails, with [`Failure::NonJson`]
/// carrying `status` and the first 300 characters of the body. Envelope
/// keys of an unexpected type are read leniently; see
/// [`ResponseEnvelope::from_object`].
pub fn decode(raw_body: &str, status: StatusCode) -> Result<ResponseEnvelope, Failure> {
    match serde_json::from_str::<Value>(raw_body) {
        Ok(Value::Object(map)) => Ok(ResponseEnvelope::from_object(map)),
        _ => Err(Failure::NonJson {
            status,
            body: truncate_body(raw_body),
        }),
    }
}

impl ResponseEnvelope {
    /// Builds an envelope from a decoded JSON object.
    ///
    /// - `success` counts only as a boolean; any other value is `false`
    /// - `message` and `version` are kept only when they are strings
    /// - a non-array `errors` value becomes a single [`ErrorEntry::Other`]
    /// - `null` is treated as absent
    pub fn from_object(mut map: Map<String, Value>) -> Self {
        let mut take = |key: &str| map.remove(key).filter(|v| !v.is_null());

        let success = take("success").map(|v| v.as_bool().unwrap_or(false));
        let message = take("message").and_then(into_string);
        let version = take("version").and_then(into_string);
        let data = take("data");
        let errors = take("errors").map(|v| match v {
            Value::Array(items) => items.into_iter().map(ErrorEntry::from_value).collect(),
            other => vec![ErrorEntry::Other(other)],
        });

        Self {
            success,
            message,
            errors,
            data,
            version,
            extra: map,
        }
    }
}

impl ErrorEntry {
    fn from_value(value: Value) -> Self {
        match value {
            Value::Object(_) => serde_json::from_value(value.clone())
                .map(ErrorEntry::Field)
                .unwrap_or(ErrorEntry::Other(value)),
            other => ErrorEntry::Other(other),
        }
    }
}

fn into_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        _ => None,
    }
}
