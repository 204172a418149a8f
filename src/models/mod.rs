//! Typed domain entities decoded from the envelope's `data` payload.
//!
//! Decoding is total with respect to optional content: an absent or `null`
//! field takes the entity's default (numbers 0, booleans false, empty
//! collections, enums `Unknown`), and an unlisted enum value maps to the
//! `Unknown` sentinel. A value whose JSON type cannot possibly fit (an
//! object where a number is expected) is a [`ClientError::Decode`] and is
//! never retried.

mod app;
mod cheque;
mod currency;
mod de;
mod enums;
mod invoice;
mod page;
mod requests;
mod transfer;
mod withdrawal;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::http::ClientError;

pub use app::{Balance, Info};
pub use cheque::{Cheque, TgResource};
pub use currency::Currency;
pub use enums::{ChequeState, HealthStatus, Network, WithdrawalStatus};
pub use invoice::Invoice;
pub use page::Page;
pub use requests::{
    MultiChequeUpdate, NewInvoice, NewMultiCheque, ResourceRef, TransferRequest, WithdrawalLinkRequest,
    WithdrawalRequest,
};
pub use transfer::Transfer;
pub use withdrawal::{FeeAmount, Withdrawal, WithdrawalCoin, WithdrawalCoinFee};

/// Entities that can be built from an API JSON object.
pub trait FromApi: DeserializeOwned + Default {
    fn from_api(value: Value) -> Result<Self, ClientError> {
        from_api(Some(value))
    }
}

/// Decodes an optional `data` payload into `T`.
///
/// `None` and `null` yield `T::default()`.
pub fn from_api<T>(data: Option<Value>) -> Result<T, ClientError>
where
    T: DeserializeOwned + Default,
{
    let mut value = match data {
        None | Some(Value::Null) => return Ok(T::default()),
        Some(value) => value,
    };
    strip_nulls(&mut value);

    serde_json::from_value(value).map_err(|source| ClientError::Decode {
        entity: std::any::type_name::<T>(),
        source,
    })
}

/// Removes `null` members from every object so they decode like absent ones.
fn strip_nulls(value: &mut Value) {
    match value {
        Value::Object(map) => {
            map.retain(|_, v| !v.is_null());
            map.values_mut().for_each(strip_nulls);
        },
        Value::Array(items) => items.iter_mut().for_each(strip_nulls),
        _ => {},
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn strips_nested_nulls() {
        let mut value = json!({"a": null, "b": {"c": null, "d": 1}, "e": [{"f": null}]});
        strip_nulls(&mut value);
        assert_eq!(value, json!({"b": {"d": 1}, "e": [{}]}));
    }

    #[test]
    fn null_data_is_default() {
        let info: Info = from_api(Some(Value::Null)).unwrap();
        assert_eq!(info, Info::default());
    }

    #[test]
    fn structurally_impossible_value_is_a_decode_error() {
        let err = Balance::from_api(json!({"currency": "TONCOIN", "balance": {"value": 1}})).unwrap_err();
        match err {
            ClientError::Decode { entity, .. } => assert!(entity.ends_with("Balance")),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
