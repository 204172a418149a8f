//! Lenient integer fields.
//!
//! The remote sometimes sends counts and ids as JSON floats (`4.0`). These
//! helpers accept any integral number and reject fractional or out of range
//! values.

use serde::de::Error;
use serde::{Deserialize, Deserializer};
use serde_json::Number;

fn integral(n: &Number) -> Option<f64> {
    n.as_f64().filter(|f| f.is_finite() && f.fract() == 0.0)
}

pub(crate) fn u64_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    let n = Number::deserialize(deserializer)?;
    n.as_u64()
        .or_else(|| integral(&n).filter(|f| *f >= 0.0 && *f <= u64::MAX as f64).map(|f| f as u64))
        .ok_or_else(|| D::Error::custom(format!("expected a non-negative integer, got {n}")))
}

pub(crate) fn i64_from_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let n = Number::deserialize(deserializer)?;
    n.as_i64()
        .or_else(|| {
            integral(&n)
                .filter(|f| *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
                .map(|f| f as i64)
        })
        .ok_or_else(|| D::Error::custom(format!("expected an integer, got {n}")))
}
