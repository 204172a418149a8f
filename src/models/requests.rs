//! Request payloads for operations that send a body or a long query.
//!
//! Optional fields left unset are omitted from the wire rather than sent
//! as `null`. Transfer and withdrawal ids are idempotency tokens and are
//! required at construction.

use serde::{Deserialize, Serialize};

use super::enums::Network;
use crate::http::QueryParams;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub tg_user_id: i64,
    pub currency: String,
    pub amount: f64,
    /// Unique id in the caller's system; repeated submissions with the same
    /// id are rejected by the remote.
    pub transfer_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl TransferRequest {
    pub fn new(tg_user_id: i64, currency: impl Into<String>, amount: f64, transfer_id: impl Into<String>) -> Self {
        Self {
            tg_user_id,
            currency: currency.into(),
            amount,
            transfer_id: transfer_id.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    pub network: Network,
    pub address: String,
    pub currency: String,
    pub amount: f64,
    /// At most 50 characters, unique in the caller's system.
    pub withdrawal_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl WithdrawalRequest {
    pub fn new(
        network: Network,
        address: impl Into<String>,
        currency: impl Into<String>,
        amount: f64,
        withdrawal_id: impl Into<String>,
    ) -> Self {
        Self {
            network,
            address: address.into(),
            currency: currency.into(),
            amount,
            withdrawal_id: withdrawal_id.into(),
            comment: None,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

/// A Telegram group or channel, by numeric id or by username.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResourceRef {
    Id(i64),
    Name(String),
}

impl From<i64> for ResourceRef {
    fn from(id: i64) -> Self {
        ResourceRef::Id(id)
    }
}

impl From<&str> for ResourceRef {
    fn from(name: &str) -> Self {
        ResourceRef::Name(name.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMultiCheque {
    pub currency: String,
    pub cheque_per_user: f64,
    /// Minimum 1.
    pub users_number: u32,
    /// Referral program percentage, 0 to 100.
    pub ref_program: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub send_notifications: bool,
    pub enable_captcha: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_resources_ids: Option<Vec<ResourceRef>>,
    pub for_premium: bool,
    pub linked_wallet: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_languages: Option<Vec<String>>,
    pub enabled_countries: Vec<String>,
}

impl NewMultiCheque {
    pub fn new(currency: impl Into<String>, cheque_per_user: f64, users_number: u32, ref_program: u8) -> Self {
        Self {
            currency: currency.into(),
            cheque_per_user,
            users_number,
            ref_program,
            password: None,
            description: None,
            send_notifications: true,
            enable_captcha: true,
            telegram_resources_ids: None,
            for_premium: false,
            linked_wallet: false,
            disabled_languages: None,
            enabled_countries: Vec::new(),
        }
    }
}

/// Partial update of a multi-cheque; only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiChequeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_notifications: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_captcha: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram_resources_ids: Option<Vec<ResourceRef>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub for_premium: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linked_wallet: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disabled_languages: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled_countries: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInvoice {
    /// Unset for a multi-payment invoice paid by `min_payment` steps.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_payment: Option<f64>,
    pub num_payments: u32,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden_message: Option<String>,
    pub comments_enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Seconds until expiry, at most one day; 0 never expires.
    pub expired_in: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_id: Option<String>,
}

impl NewInvoice {
    /// A single-payment invoice for `amount`.
    pub fn new(currency: impl Into<String>, amount: f64) -> Self {
        Self {
            amount: Some(amount),
            num_payments: 1,
            currency: currency.into(),
            ..Default::default()
        }
    }
}

/// Parameters of a Telegram withdrawal link.
#[derive(Debug, Clone, PartialEq)]
pub struct WithdrawalLinkRequest {
    pub currency: String,
    pub network: Network,
    pub address: String,
    pub amount: f64,
    pub comment: Option<String>,
    pub platform: Option<String>,
}

impl WithdrawalLinkRequest {
    pub fn new(currency: impl Into<String>, network: Network, address: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
            network,
            address: address.into(),
            amount: 0.0,
            comment: None,
            platform: None,
        }
    }

    pub fn to_query(&self) -> QueryParams {
        QueryParams::new()
            .with("currency", &self.currency)
            .with("network", self.network)
            .with("address", &self.address)
            .with("amount", self.amount)
            .with_opt("comment", self.comment.as_deref().filter(|c| !c.is_empty()))
            .with_opt("platform", self.platform.as_deref().filter(|p| !p.is_empty()))
    }
}
