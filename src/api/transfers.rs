use log::info;

use super::RocketClient;
use super::endpoints::SEND_TRANSFER;
use crate::http::ClientError;
use crate::models::{Transfer, TransferRequest};

impl RocketClient {
    /// Transfers funds to a Telegram user.
    ///
    /// Retries resend the same `transfer_id`, so the remote applies the
    /// transfer at most once.
    pub async fn send_transfer(&self, request: &TransferRequest) -> Result<Transfer, ClientError> {
        info!(
            transfer_id = request.transfer_id.as_str(),
            currency = request.currency.as_str(),
            amount = request.amount;
            "Sending transfer"
        );
        self.send(&SEND_TRANSFER, SEND_TRANSFER.path, request)
            .await?
            .into_data()
    }
}
