use serde::Deserialize;

use super::RocketClient;
use super::endpoints::{GET_AVAILABLE_CURRENCIES, GET_WITHDRAWAL_LINK};
use crate::http::{ClientError, Failure};
use crate::models::{Currency, WithdrawalLinkRequest};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct CurrencyList {
    results: Vec<Currency>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct WithdrawalLink {
    telegram_app_link: Option<String>,
}

impl RocketClient {
    /// Currencies the remote currently supports. Needs no API key.
    pub async fn get_available_currencies(&self) -> Result<Vec<Currency>, ClientError> {
        let list: CurrencyList = self.get(&GET_AVAILABLE_CURRENCIES).await?.into_data()?;
        Ok(list.results)
    }

    /// Telegram app link that prefills a withdrawal.
    ///
    /// A successful response without a link is reported as a
    /// [`Failure::Api`] carrying the envelope.
    pub async fn get_withdrawal_link(&self, request: &WithdrawalLinkRequest) -> Result<String, ClientError> {
        let envelope = self
            .get_with_query(&GET_WITHDRAWAL_LINK, request.to_query())
            .await?;
        let link: WithdrawalLink = crate::models::from_api(envelope.data.clone())?;

        match link.telegram_app_link.filter(|l| !l.is_empty()) {
            Some(link) => Ok(link),
            None => Err(Failure::Api { status: None, envelope }.into()),
        }
    }
}
