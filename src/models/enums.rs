use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Blockchain network of a withdrawal or fee.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Network {
    Ton,
    Bsc,
    Eth,
    Btc,
    Trx,
    Sol,
    /// Absent, null, or not a network this client knows about.
    #[default]
    #[serde(other)]
    Unknown,
}

impl Network {
    pub fn as_str(&self) -> &'static str {
        match self {
            Network::Ton => "TON",
            Network::Bsc => "BSC",
            Network::Eth => "ETH",
            Network::Btc => "BTC",
            Network::Trx => "TRX",
            Network::Sol => "SOL",
            Network::Unknown => "UNKNOWN",
        }
    }
}

impl Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Network {
    fn from(s: &str) -> Self {
        match s {
            "TON" => Network::Ton,
            "BSC" => Network::Bsc,
            "ETH" => Network::Eth,
            "BTC" => Network::Btc,
            "TRX" => Network::Trx,
            "SOL" => Network::Sol,
            _ => Network::Unknown,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WithdrawalStatus {
    Created,
    Completed,
    Fail,
    #[default]
    #[serde(other)]
    Unknown,
}

impl WithdrawalStatus {
    /// Whether the withdrawal reached a final state.
    pub fn is_final(&self) -> bool {
        matches!(self, WithdrawalStatus::Completed | WithdrawalStatus::Fail)
    }
}

impl Display for WithdrawalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WithdrawalStatus::Created => write!(f, "CREATED"),
            WithdrawalStatus::Completed => write!(f, "COMPLETED"),
            WithdrawalStatus::Fail => write!(f, "FAIL"),
            WithdrawalStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChequeState {
    Active,
    Completed,
    Draft,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Top-level `status` reported by the health check.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HealthStatus {
    Ok,
    #[default]
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn known_values_decode() {
        assert_eq!(serde_json::from_value::<Network>(json!("TON")).unwrap(), Network::Ton);
        assert_eq!(
            serde_json::from_value::<WithdrawalStatus>(json!("COMPLETED")).unwrap(),
            WithdrawalStatus::Completed
        );
        assert_eq!(serde_json::from_value::<ChequeState>(json!("active")).unwrap(), ChequeState::Active);
        assert_eq!(serde_json::from_value::<HealthStatus>(json!("OK")).unwrap(), HealthStatus::Ok);
    }

    #[test]
    fn unlisted_values_map_to_unknown() {
        assert_eq!(serde_json::from_value::<Network>(json!("APTOS")).unwrap(), Network::Unknown);
        assert_eq!(
            serde_json::from_value::<WithdrawalStatus>(json!("PENDING_REVIEW")).unwrap(),
            WithdrawalStatus::Unknown
        );
        assert_eq!(serde_json::from_value::<ChequeState>(json!("archived")).unwrap(), ChequeState::Unknown);
        assert_eq!(serde_json::from_value::<HealthStatus>(json!("DEGRADED")).unwrap(), HealthStatus::Unknown);
    }

    #[test]
    fn network_string_forms_agree() {
        for network in [Network::Ton, Network::Bsc, Network::Eth, Network::Btc, Network::Trx, Network::Sol] {
            assert_eq!(Network::from(network.as_str()), network);
            assert_eq!(serde_json::to_value(network).unwrap(), json!(network.to_string()));
        }
        assert_eq!(Network::from("ton"), Network::Unknown);
    }

    #[test]
    fn final_withdrawal_states() {
        assert!(WithdrawalStatus::Fail.is_final());
        assert!(!WithdrawalStatus::Created.is_final());
        assert!(!WithdrawalStatus::Unknown.is_final());
    }
}
