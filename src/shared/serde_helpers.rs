//! Deserialization helpers for the dashboard's form conventions.
//!
//! The admin forms submit `""` for "no selection" in id fields and omit fields they do not
//! touch, so optional ids need to distinguish "absent", "cleared" and "set".

use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Deserialize an optional value, mapping `null` and blank strings to `None`
pub fn empty_string_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

/// Patch-style field: absent => `None`, `null`/`""` => `Some(None)`, value => `Some(Some(v))`
///
/// Use together with `#[serde(default)]` so an absent field stays `None`.
pub fn patch_field<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    empty_string_as_none(deserializer).map(Some)
}
