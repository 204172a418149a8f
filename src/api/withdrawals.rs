use log::info;

use super::RocketClient;
use super::endpoints::{CREATE_WITHDRAWAL, GET_WITHDRAWAL, GET_WITHDRAWAL_FEES};
use crate::http::{ClientError, QueryParams};
use crate::log::mask_string;
use crate::models::{Withdrawal, WithdrawalCoin, WithdrawalRequest, WithdrawalStatus};

impl RocketClient {
    /// Withdraws funds to an external wallet.
    pub async fn create_withdrawal(&self, request: &WithdrawalRequest) -> Result<Withdrawal, ClientError> {
        info!(
            withdrawal_id = request.withdrawal_id.as_str(),
            network:% = request.network,
            address:% = mask_string(&request.address),
            amount = request.amount;
            "Creating withdrawal"
        );
        self.send(&CREATE_WITHDRAWAL, CREATE_WITHDRAWAL.path, request)
            .await?
            .into_data()
    }

    pub async fn get_withdrawal(&self, withdrawal_id: &str) -> Result<Withdrawal, ClientError> {
        let path = GET_WITHDRAWAL.resolve(withdrawal_id);
        self.call(&GET_WITHDRAWAL, &path, GET_WITHDRAWAL.options())
            .await?
            .into_data()
    }

    pub async fn get_withdrawal_status(&self, withdrawal_id: &str) -> Result<WithdrawalStatus, ClientError> {
        Ok(self.get_withdrawal(withdrawal_id).await?.status)
    }

    /// Withdrawal fees per coin and network, for one coin or all of them.
    pub async fn get_withdrawal_fees(&self, currency: Option<&str>) -> Result<Vec<WithdrawalCoin>, ClientError> {
        let query = QueryParams::new().with_opt("currency", currency);
        self.get_with_query(&GET_WITHDRAWAL_FEES, query)
            .await?
            .into_data()
    }
}
