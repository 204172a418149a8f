//! Ownership of the pooled HTTP client across the client's lifetime.
//!
//! A [`Session`] either created its client itself ([`Ownership::Owned`]) or
//! was handed one by the caller ([`Ownership::Borrowed`]). The tag is fixed
//! at construction:
//!
//! - an owned session releases its client on [`Session::close`] or on drop;
//!   later calls fail with [`ClientError::SessionClosed`]
//! - a borrowed session never releases the caller's client; `close` only
//!   logs and the client stays usable
//!
//! `close` is idempotent in both cases.

use log::{debug, info};
use reqwest_middleware::ClientWithMiddleware;
use tokio::sync::RwLock;

use super::error::ClientError;
use super::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ownership {
    Owned,
    Borrowed,
}

#[derive(Debug)]
pub struct Session {
    client: RwLock<Option<ClientWithMiddleware>>,
    ownership: Ownership,
}

impl Session {
    /// Creates a session with its own connection pool.
    pub fn owned() -> Result<Self, ClientError> {
        let inner_client = reqwest::Client::builder().build()?;
        let client = reqwest_middleware::ClientBuilder::new(inner_client).build();

        Ok(Self {
            client: RwLock::new(Some(client)),
            ownership: Ownership::Owned,
        })
    }

    /// Wraps a caller-supplied client, including any middleware stack it
    /// carries. The caller keeps ownership.
    pub fn borrowed(client: ClientWithMiddleware) -> Self {
        Self {
            client: RwLock::new(Some(client)),
            ownership: Ownership::Borrowed,
        }
    }

    /// Wraps a caller-supplied plain `reqwest` client.
    pub fn borrowed_reqwest(client: reqwest::Client) -> Self {
        Self::borrowed(reqwest_middleware::ClientBuilder::new(client).build())
    }

    pub fn ownership(&self) -> Ownership {
        self.ownership
    }

    pub async fn is_closed(&self) -> bool {
        self.client.read().await.is_none()
    }

    /// Hands out a transport for one logical call.
    pub async fn transport(&self) -> Result<Transport, ClientError> {
        self.client
            .read()
            .await
            .as_ref()
            .map(|client| Transport::new(client.clone()))
            .ok_or(ClientError::SessionClosed)
    }

    /// Releases the client if this session owns it. Safe to call repeatedly.
    ///
    /// Calls already in flight keep their transport and finish normally.
    pub async fn close(&self) {
        match self.ownership {
            Ownership::Owned => {
                if self.client.write().await.take().is_some() {
                    info!("Closed owned HTTP session");
                }
            },
            Ownership::Borrowed => {
                debug!("Session client is caller-owned; leaving it open");
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn owned_close_is_idempotent() {
        let session = Session::owned().unwrap();
        assert_eq!(session.ownership(), Ownership::Owned);
        assert!(session.transport().await.is_ok());

        session.close().await;
        session.close().await;

        assert!(session.is_closed().await);
        assert!(matches!(session.transport().await, Err(ClientError::SessionClosed)));
    }

    #[tokio::test]
    async fn borrowed_session_is_never_released() {
        let session = Session::borrowed_reqwest(reqwest::Client::new());
        assert_eq!(session.ownership(), Ownership::Borrowed);

        session.close().await;
        session.close().await;

        assert!(!session.is_closed().await);
        assert!(session.transport().await.is_ok());
    }

    #[tokio::test]
    async fn transport_outlives_close() {
        let session = Session::owned().unwrap();
        let transport = session.transport().await.unwrap();
        session.close().await;
        // The in-flight transport still holds its own handle to the pool.
        drop(transport);
        assert!(session.is_closed().await);
    }
}
