//! Lenient decoding of Bitrix24 REST values
//!
//! Bitrix returns almost every scalar as a string (`"1500000.00"`, `"12"`,
//! `"Y"`), money fields sometimes as `"amount|CURRENCY"`, enum lists as arrays
//! and unset fields as `null` or `""`. These `deserialize_with` helpers coerce
//! such values into typed fields without failing the whole record.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Coerce a JSON value into a float.
///
/// Accepts numbers, numeric strings and Bitrix money strings
/// (`"2500|AED"`). Anything else yields `None`.
#[must_use]
pub fn value_as_f64(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => {
            let amount = s.split('|').next().unwrap_or_default().trim();
            if amount.is_empty() {
                None
            } else {
                amount.parse::<f64>().ok().filter(|v| v.is_finite())
            }
        }
        _ => None,
    }
}

/// Coerce a JSON value into an integer, truncating fractional parts.
#[must_use]
pub fn value_as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(truncate)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| trimmed.parse::<f64>().ok().map(truncate))
        }
        _ => None,
    }
}

/// Coerce a JSON value into a string. Only `null`, arrays and objects are
/// treated as absent; empty strings are kept.
#[must_use]
pub fn value_as_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if *b { "Y".to_string() } else { "N".to_string() }),
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn truncate(v: f64) -> i64 {
    v.trunc() as i64
}

pub fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_f64))
}

pub fn lenient_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64))
}

pub fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_string))
}

/// Required numeric identifier (`"42"` or `42`).
pub fn lenient_id<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    value_as_i64(&value)
        .and_then(|id| u64::try_from(id).ok())
        .ok_or_else(|| D::Error::custom(format!("invalid Bitrix identifier: {value}")))
}

/// Optional numeric identifier; blanks and garbage become `None`.
pub fn lenient_opt_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(value_as_i64).and_then(|id| u64::try_from(id).ok()))
}

/// List of identifiers; a bare scalar is treated as a one-element list.
pub fn lenient_id_list<'de, D>(deserializer: D) -> Result<Vec<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    let ids = match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(value_as_i64)
            .filter_map(|id| u64::try_from(id).ok())
            .collect(),
        Some(other) => {
            value_as_i64(&other).and_then(|id| u64::try_from(id).ok()).into_iter().collect()
        }
        None => Vec::new(),
    };
    Ok(ids)
}

/// Enum fields configured as "multiple" arrive as arrays even when only one
/// value is set; keep the first element, or the scalar itself.
pub fn scalar_or_first<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::Array(items)) => items.first().and_then(value_as_string),
        Some(other) => value_as_string(&other),
        None => None,
    })
}
