//! Form field coercion applied while deserializing submitted forms.
//!
//! Use with `#[serde(default, deserialize_with = "...")]` so an absent field
//! takes the default instead of failing.

use serde::de::{Deserialize, Deserializer, Error};

/// Checkbox-style boolean. Absent, blank, `0`, `false`, `off` and `no` are false.
pub fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.as_deref().is_some_and(is_truthy))
}

/// Optional foreign key. Absent or blank becomes `None`, never an empty string.
pub fn reference<'de, D>(deserializer: D) -> Result<Option<i32>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value
            .parse()
            .map(Some)
            .map_err(|_| D::Error::custom(format!("'{}' is not a valid id", value))),
    }
}

pub fn is_truthy(raw: &str) -> bool {
    let value = raw.trim().to_ascii_lowercase();
    !matches!(value.as_str(), "" | "0" | "false" | "off" | "no")
}
