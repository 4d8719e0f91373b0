//! Response decoder: raw JSON bodies into typed intermediate records.
//!
//! Decoding is tolerant. Unknown fields are ignored, a single value is
//! accepted where an array is expected and numbers may arrive either as JSON
//! numbers or as numeric strings. Dates stay as raw strings here; the
//! normalizer owns every textual date format.

pub(crate) mod records;

use std::str::FromStr;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::executor::RawBody;
use crate::DecodeError;

/// Decodes a body into `T`.
///
/// An empty body and a literal JSON `null` both yield `Ok(None)`, the
/// explicit "no data" outcome. Malformed JSON is a [`DecodeError`].
pub fn decode<T: DeserializeOwned>(body: &RawBody) -> Result<Option<T>, DecodeError> {
    match body.as_text() {
        None => Ok(None),
        Some(text) if text.trim().is_empty() => Ok(None),
        Some(text) => Ok(serde_json::from_str::<Option<T>>(text)?),
    }
}

/// Decodes a body expected to hold an array, accepting a bare element.
pub fn decode_list<T: DeserializeOwned>(body: &RawBody) -> Result<Vec<T>, DecodeError> {
    Ok(decode::<OneOrMany<T>>(body)?
        .map(OneOrMany::into_vec)
        .unwrap_or_default())
}

/// Converts an already-parsed JSON subtree into a list of records.
pub fn list_from_value<T: DeserializeOwned>(value: Value) -> Result<Vec<T>, DecodeError> {
    if value.is_null() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_value::<OneOrMany<T>>(value)?.into_vec())
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> OneOrMany<T> {
    fn into_vec(self) -> Vec<T> {
        match self {
            Self::Many(values) => values,
            Self::One(value) => vec![value],
        }
    }
}

/// `deserialize_with` helper: `null` → empty, scalar/object → one element.
pub(crate) fn one_or_many<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<OneOrMany<T>>::deserialize(deserializer)?
        .map(OneOrMany::into_vec)
        .unwrap_or_default())
}

/// `deserialize_with` helper for identifier-like text that upstream sometimes
/// sends as a number.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(text)) => Some(text),
        Some(Value::Number(number)) => Some(number.to_string()),
        Some(Value::Bool(flag)) => Some(flag.to_string()),
        Some(other) => Some(other.to_string()),
    })
}

/// A numeric field as it appeared on the wire.
///
/// Kept unparsed so the normalizer can tell a required field that is
/// malformed (a decode error) from an optional one (absent). JSON numbers
/// keep their literal text (serde_json `arbitrary_precision`), so no digits
/// are lost on the way to [`Decimal`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawNumber {
    Number(serde_json::Number),
    Text(String),
}

impl RawNumber {
    /// Exact decimal value, `None` when the text is not numeric.
    pub fn to_decimal(&self) -> Option<Decimal> {
        let text = match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.trim().to_owned(),
        };
        if text.is_empty() {
            return None;
        }
        Decimal::from_str(&text)
            .or_else(|_| Decimal::from_scientific(&text))
            .ok()
    }

    /// Integral value, `None` when absent, non-numeric or fractional.
    pub fn to_i64(&self) -> Option<i64> {
        if let Self::Number(number) = self {
            if let Some(value) = number.as_i64() {
                return Some(value);
            }
        }
        let value = self.to_decimal()?;
        if value.fract().is_zero() {
            value.to_i64()
        } else {
            None
        }
    }

    /// The value as it appeared on the wire, for error messages.
    pub fn raw(&self) -> String {
        match self {
            Self::Number(number) => number.to_string(),
            Self::Text(text) => text.clone(),
        }
    }
}
