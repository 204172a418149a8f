use serde::{Deserialize, Serialize};
use std::fmt::Display;

use super::FromApi;

/// Capabilities of one currency from `currencies/available`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Currency {
    pub currency: String,
    #[serde(rename = "name")]
    pub ticker: String,
    pub min_transfer: f64,
    pub min_cheque: f64,
    pub min_invoice: f64,
    pub min_withdraw: f64,
    pub fee_withdraw: f64,
}

impl Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.currency)
    }
}

impl FromApi for Currency {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn ticker_comes_from_name() {
        let currency = Currency::from_api(json!({
            "currency": "TONCOIN",
            "name": "TON",
            "minTransfer": 0.01,
            "feeWithdraw": 0.05
        }))
        .unwrap();
        assert_eq!(currency.ticker, "TON");
        assert_eq!(currency.to_string(), "TONCOIN");
        assert_eq!(currency.min_cheque, 0.0);
        assert_eq!(currency.fee_withdraw, 0.05);
    }
}
