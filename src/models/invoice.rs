use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::FromApi;

/// A Telegram invoice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Invoice {
    #[serde(deserialize_with = "super::de::u64_from_number")]
    pub id: u64,
    pub amount: f64,
    #[serde(rename = "totalActivations")]
    #[serde(deserialize_with = "super::de::u64_from_number")]
    pub total_payments: u64,
    #[serde(rename = "activationsLeft")]
    #[serde(deserialize_with = "super::de::u64_from_number")]
    pub payments_left: u64,
    pub description: Option<String>,
    pub hidden_message: Option<String>,
    pub payload: Option<String>,
    pub callback_url: Option<String>,
    pub currency: String,
    pub created: String,
    pub paid: Option<String>,
    pub status: String,
    /// Seconds until expiry, 0 for never.
    #[serde(deserialize_with = "super::de::u64_from_number")]
    pub expired_in: u64,
    pub link: String,
    pub payments: Vec<Value>,
}

impl Invoice {
    pub fn is_paid(&self) -> bool {
        self.paid.is_some()
    }
}

impl FromApi for Invoice {}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{FromApi, Page};

    #[test]
    fn decodes_invoice_page() {
        let page: Page<Invoice> = crate::models::from_api(Some(json!({
            "total": 3,
            "limit": 2,
            "offset": 0,
            "results": [
                {"id": 1, "amount": 1.5, "currency": "TONCOIN", "totalActivations": 1, "activationsLeft": 1, "status": "active", "link": "https://t.me/xrocket?start=inv_1"},
                {"id": 2, "amount": 3, "currency": "USDT", "paid": "2025-01-02T10:00:00Z", "payments": [{"userId": 7}]}
            ]
        })))
        .unwrap();

        assert_eq!(page.results.len(), 2);
        assert!(page.has_more());
        assert_eq!(page.results[0].total_payments, 1);
        assert!(!page.results[0].is_paid());
        assert!(page.results[1].is_paid());
        assert_eq!(page.results[1].payments, vec![json!({"userId": 7})]);
        assert_eq!(page.results[1].status, "");
    }

    #[test]
    fn float_counts_decode() {
        let invoice = Invoice::from_api(json!({"id": 3.0, "totalActivations": 2.0, "activationsLeft": 1, "expiredIn": 3600.0}))
            .unwrap();
        assert_eq!(invoice.id, 3);
        assert_eq!(invoice.total_payments, 2);
        assert_eq!(invoice.expired_in, 3600);
    }

    #[test]
    fn has_more_does_not_overflow() {
        let page = Page::<Invoice> {
            total: u64::MAX,
            offset: u64::MAX,
            results: vec![Invoice::default()],
            ..Default::default()
        };
        assert!(!page.has_more());

        let page: Page<Invoice> = crate::models::from_api(Some(json!({"total": 5.0, "offset": 2.0, "results": [{}]}))).unwrap();
        assert!(page.has_more());
    }
}
