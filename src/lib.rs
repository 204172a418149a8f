//! Async client for the xRocket Pay API.
//!
//! - [`api`] - typed operations ([`RocketClient`])
//! - [`http`] - request pipeline: transport, envelope decoding, retries, session
//! - [`models`] - domain entities and request payloads
//! - [`config`] - client configuration and its layered loader

pub mod api;
pub mod config;
pub mod http;
pub mod log;
pub mod models;
pub mod utils;

pub use crate::api::RocketClient;
pub use crate::config::ClientConfig;
pub use crate::http::{ClientError, Failure};
