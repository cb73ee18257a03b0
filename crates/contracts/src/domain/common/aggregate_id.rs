use serde::{de::DeserializeOwned, Serialize};
use std::hash::Hash;

/// Identifier of an aggregate as it travels through routes and forms.
pub trait AggregateId:
    Clone + Copy + PartialEq + Eq + Hash + Serialize + DeserializeOwned + std::fmt::Debug
{
    /// Render the id for URLs and form fields.
    fn as_string(&self) -> String;

    /// Parse an id taken from a URL segment or form field.
    fn from_string(s: &str) -> Result<Self, String>;
}
