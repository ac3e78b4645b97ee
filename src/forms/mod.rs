//! Request bodies accepted by the JSON API and their validated payloads.

use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::domain::types::TypeConstraintError;

pub mod articles;
pub mod authors;
pub mod categories;
pub mod tags;

/// Identifier as it may appear in a JSON body: either a number or a string.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum IdInput {
    Number(i64),
    Text(String),
}

impl IdInput {
    /// Parse into a typed identifier.
    pub fn parse<T>(&self) -> Result<T, TypeConstraintError>
    where
        T: FromStr<Err = TypeConstraintError>,
    {
        match self {
            IdInput::Number(value) => value.to_string().parse(),
            IdInput::Text(value) => value.parse(),
        }
    }
}

/// Treat blank optional strings as absent.
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Deserialize a field that distinguishes "absent" (`None`, via
/// `#[serde(default)]`) from an explicit `null` (`Some(None)`).
pub(crate) fn explicit_null<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
