//! Bitrix24 REST response envelope

use serde::Deserialize;
use serde_json::Value;

/// Outer shape of every `*.list` / `*.get` response.
///
/// `result` is absent on errors, in which case `error` and
/// `error_description` usually explain why.
#[derive(Debug, Default, Deserialize)]
pub struct ListEnvelope {
    #[serde(default)]
    pub result: Option<Value>,
    #[serde(default)]
    pub next: Option<Value>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl ListEnvelope {
    pub fn describe_error(&self) -> String {
        match (&self.error, &self.error_description) {
            (Some(code), Some(description)) => format!("{code}: {description}"),
            (Some(code), None) => code.clone(),
            (None, Some(description)) => description.clone(),
            (None, None) => "no error details".to_string(),
        }
    }
}

/// The `next` cursor, which Bitrix sends as a number or a numeric string.
pub fn next_offset(next: Option<&Value>) -> Option<u64> {
    match next? {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}
