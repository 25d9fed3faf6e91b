//! Forgiving field deserializers for the catalog document.
//!
//! A value of the wrong shape never fails the document: it reads as absent
//! and normalization applies the field's default instead.

use crate::data::catalog::RawSpawnCondition;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Integer view of a JSON number. Integral floats such as `2.0` count;
/// strings, fractions and non-numbers do not.
#[must_use]
pub fn as_integer(value: &Value) -> Option<i64> {
    let Value::Number(number) = value else {
        return None;
    };
    number.as_i64().or_else(|| {
        number
            .as_f64()
            .filter(|f| f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64)
            .map(|f| f as i64)
    })
}

/// Any shape `T` accepts, otherwise `None`.
pub fn value<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(T::deserialize(raw).ok())
}

/// Like [`value`], falling back to `T::default()`.
pub fn or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(value(deserializer)?.unwrap_or_default())
}

/// An integer that fits `T`, otherwise `None`.
pub fn integer<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<i64>,
{
    let raw = Value::deserialize(deserializer)?;
    Ok(as_integer(&raw).and_then(|n| T::try_from(n).ok()))
}

/// A list where each unreadable element becomes `T::default()`, so positions
/// of the remaining elements are kept. Anything but an array reads as empty.
pub fn entries<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(Vec::new());
    };
    Ok(items
        .into_iter()
        .map(|item| T::deserialize(item).unwrap_or_default())
        .collect())
}

/// Spawn conditions. Entries without a usable `id` are dropped and a missing
/// or unusable `amount` reads as 0. `None` unless the value is an array.
pub fn conditions<'de, D>(deserializer: D) -> Result<Option<Vec<RawSpawnCondition>>, D::Error>
where
    D: Deserializer<'de>,
{
    let Value::Array(items) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    Ok(Some(items.iter().filter_map(condition).collect()))
}

/// Like [`conditions`], reading anything but an array as empty.
pub fn condition_list<'de, D>(deserializer: D) -> Result<Vec<RawSpawnCondition>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(conditions(deserializer)?.unwrap_or_default())
}

fn condition(item: &Value) -> Option<RawSpawnCondition> {
    let field = |key: &str| {
        item.get(key)
            .and_then(as_integer)
            .and_then(|n| u32::try_from(n).ok())
    };
    Some(RawSpawnCondition {
        id: field("id")?,
        amount: field("amount").unwrap_or(0),
    })
}
