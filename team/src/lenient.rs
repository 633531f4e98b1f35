//! Forgiving field deserializers
//!
//! Each helper accepts whatever JSON value is present and falls back to the
//! field's default when it cannot use it, so one bad field never fails the
//! document around it.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

use crate::descriptor::Accuracy;

const MIN_LEVEL: f64 = 1.0;
const MAX_LEVEL: f64 = 100.0;

/// A finite number, or a string holding one
pub(crate) fn number(value: &Value) -> Option<f64> {
    let n = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// A number rounded to the nearest whole value that fits `T`
fn integer<T: TryFrom<i64>>(value: &Value) -> Option<T> {
    let n = number(value)?.round();
    if n < i64::MIN as f64 || n > i64::MAX as f64 {
        return None;
    }
    T::try_from(n as i64).ok()
}

fn as_text(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

pub(crate) fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(as_text(Value::deserialize(deserializer)?).unwrap_or_default())
}

pub(crate) fn opt_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Ok(as_text(Value::deserialize(deserializer)?))
}

/// A list of strings; a lone string counts as a list of one
pub(crate) fn strings<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(as_text).collect(),
        Value::String(s) => vec![s],
        _ => Vec::new(),
    })
}

pub(crate) fn opt_int<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    Ok(integer(&Value::deserialize(deserializer)?))
}

/// Levels are clamped into `1..=100`
pub(crate) fn level<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u8>, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(number(&value).map(|n| n.round().clamp(MIN_LEVEL, MAX_LEVEL) as u8))
}

pub(crate) fn accuracy<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<Accuracy>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(always) => Some(Accuracy::Always(always)),
        other => integer(&other).map(Accuracy::Percent),
    })
}

pub(crate) fn table<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Map<String, Value>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Object(map) => map,
        _ => Map::new(),
    })
}

/// Items of a list that deserialize as `T`; the rest are skipped
pub(crate) fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}
