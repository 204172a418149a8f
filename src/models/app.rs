use serde::{Deserialize, Serialize};

use super::FromApi;

const DEFAULT_FEE_PERCENTS: f64 = 1.5;

/// Information about the calling application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Info {
    pub name: String,
    /// Fee for incoming transactions.
    pub fee_percents: f64,
    pub balances: Vec<Balance>,
}

impl Default for Info {
    fn default() -> Self {
        Self {
            name: String::new(),
            fee_percents: DEFAULT_FEE_PERCENTS,
            balances: Vec::new(),
        }
    }
}

impl Info {
    /// Balance held in `currency`, if the application holds any.
    pub fn balance_of(&self, currency: &str) -> Option<f64> {
        self.balances
            .iter()
            .find(|b| b.currency == currency)
            .map(|b| b.balance)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Balance {
    pub currency: String,
    pub balance: f64,
}

impl FromApi for Info {}
impl FromApi for Balance {}
