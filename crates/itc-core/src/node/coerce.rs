//! Post-processors turning a raw `result` value into the type a query
//! returns. Each yields `None` on a shape mismatch; the caller maps that to
//! `CoreError::InvalidRpcReply`.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use num_bigint::{BigInt, ToBigInt};
use serde::de::DeserializeOwned;

pub(crate) fn raw(value: serde_json::Value) -> Option<serde_json::Value> {
    Some(value)
}

pub(crate) fn string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        _ => None,
    }
}

pub(crate) fn parse<T: DeserializeOwned>(value: serde_json::Value) -> Option<T> {
    serde_json::from_value(value).ok()
}

/// Walk nested objects, e.g. `["chain-config", "staking-epoch"]`.
pub(crate) fn field(value: serde_json::Value, path: &[&str]) -> Option<serde_json::Value> {
    let mut current = value;
    for key in path {
        current = match current {
            serde_json::Value::Object(mut map) => map.remove(*key)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Base-10 integer: JSON numbers (fractions truncated toward zero) or
/// decimal digit strings.
pub(crate) fn int<T: TryFrom<BigInt>>(value: serde_json::Value) -> Option<T> {
    let n = match value {
        serde_json::Value::Number(n) => BigDecimal::from_str(&n.to_string()).ok()?.to_bigint()?,
        serde_json::Value::String(s) => BigInt::from_str(s.trim()).ok()?,
        _ => return None,
    };
    T::try_from(n).ok()
}

/// Base-16 integer string, with or without a `0x` prefix.
pub(crate) fn hex<T: TryFrom<BigInt>>(value: serde_json::Value) -> Option<T> {
    let serde_json::Value::String(s) = value else {
        return None;
    };
    let s = s.trim();
    let digits = s
        .strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .unwrap_or(s);
    let n = BigInt::parse_bytes(digits.as_bytes(), 16)?;
    T::try_from(n).ok()
}

/// Hex string when `0x`-prefixed, base-10 integer otherwise.
pub(crate) fn quantity<T: TryFrom<BigInt>>(value: serde_json::Value) -> Option<T> {
    let is_hex = value
        .as_str()
        .map(|s| s.trim_start().starts_with("0x") || s.trim_start().starts_with("0X"))
        .unwrap_or(false);
    if is_hex {
        hex(value)
    } else {
        int(value)
    }
}

pub(crate) fn decimal(value: serde_json::Value) -> Option<BigDecimal> {
    match value {
        serde_json::Value::Number(n) => BigDecimal::from_str(&n.to_string()).ok(),
        serde_json::Value::String(s) => BigDecimal::from_str(s.trim()).ok(),
        _ => None,
    }
}

/// Strict boolean from whatever truthy shape the node sent.
///
/// Booleans pass through, numbers are true when non-zero, and the strings
/// `"true"`/`"1"` and `"false"`/`"0"`/`""` map accordingly. `null` is false.
/// Any other string, array, or object is rejected.
pub(crate) fn truthy(value: serde_json::Value) -> Option<bool> {
    match value {
        serde_json::Value::Bool(b) => Some(b),
        serde_json::Value::Null => Some(false),
        serde_json::Value::Number(n) => {
            let n = BigDecimal::from_str(&n.to_string()).ok()?;
            Some(n != BigDecimal::from(0))
        }
        serde_json::Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Some(true),
            "false" | "0" | "" => Some(false),
            _ => None,
        },
        _ => None,
    }
}
