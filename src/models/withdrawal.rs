use serde::{Deserialize, Serialize};

use super::FromApi;
use super::enums::{Network, WithdrawalStatus};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Withdrawal {
    pub network: Network,
    pub address: String,
    pub currency: String,
    pub amount: f64,
    /// Idempotency token supplied when the withdrawal was created.
    pub withdrawal_id: String,
    pub status: WithdrawalStatus,
    pub comment: Option<String>,
    /// Provided only once the withdrawal is on chain.
    pub tx_hash: Option<String>,
    pub tx_link: Option<String>,
}

/// Withdrawal limits and fees for one coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WithdrawalCoin {
    pub code: String,
    pub min_withdrawal: f64,
    pub fees: Vec<WithdrawalCoinFee>,
}

impl WithdrawalCoin {
    pub fn fee_for(&self, network: Network) -> Option<&FeeAmount> {
        self.fees
            .iter()
            .find(|f| f.network_code == network)
            .map(|f| &f.fee_withdraw)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WithdrawalCoinFee {
    pub network_code: Network,
    pub fee_withdraw: FeeAmount,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeeAmount {
    pub fee: f64,
    pub currency: String,
}

impl FromApi for Withdrawal {}
impl FromApi for WithdrawalCoin {}
