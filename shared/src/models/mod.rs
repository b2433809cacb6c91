//! Data models
//!
//! Mirrors the JSON documents served by the café API. Backend ids arrive
//! as `_id`; every entity also accepts a plain `id`.

pub mod menu;
pub mod order;
pub mod payment;
pub mod reservation;
pub mod role;
pub mod support;
pub mod user;

// Re-exports
pub use menu::*;
pub use order::*;
pub use payment::*;
pub use reservation::*;
pub use role::*;
pub use support::*;
pub use user::*;

use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// Accept a number, a numeric string, or null for money fields.
///
/// Forms post prices as text and the backend stores whatever it receives.
pub(crate) fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null(()),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) if s.trim().is_empty() => Ok(0.0),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Raw::Null(()) => Ok(0.0),
    }
}

/// Accept any spelling of a closed set of values (`"Delivery"`, `"CASH"`).
///
/// Values that don't parse, non-strings and null all become `None` so one
/// odd record can't fail a whole list.
pub(crate) fn lenient_choice<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
{
    Ok(match Option::<serde_json::Value>::deserialize(deserializer)? {
        Some(serde_json::Value::String(raw)) => raw.parse().ok(),
        _ => None,
    })
}
