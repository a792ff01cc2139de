//! Field-presence tracking for partial updates.
//!
//! A PATCH field is declared as `Option<Option<T>>` with
//! `#[serde(default, deserialize_with = "deserialize_present")]`:
//! - key omitted: `None`, the stored value is kept
//! - key set to `null`: `Some(None)`, the stored value is cleared
//! - key set to a value: `Some(Some(v))`, the stored value is replaced

use serde::{Deserialize, Deserializer};

/// Deserialize a key that is present in the body, null or not.
pub fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Overwrite `target` when the field was supplied.
pub fn apply_present<T>(target: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(value) = value {
        *target = value;
    }
}
