use serde::{Deserialize, Serialize};

use super::FromApi;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Transfer {
    #[serde(deserialize_with = "super::de::u64_from_number")]
    pub id: u64,
    #[serde(deserialize_with = "super::de::i64_from_number")]
    pub tg_user_id: i64,
    pub currency: String,
    /// 9 decimal places, the rest is cut off by the remote.
    pub amount: f64,
    pub description: Option<String>,
}

impl FromApi for Transfer {}
