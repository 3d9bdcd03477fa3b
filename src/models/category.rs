//! Project category records.

use serde::{Deserialize, Serialize};

use super::de;

/// A browsable project category.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Unique identifier within the category catalog
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,

    /// Display name (e.g., "Web Development")
    pub name: String,

    /// URL-safe slug
    pub slug: String,

    /// Icon key understood by the front end
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub icon: String,

    /// Color key understood by the front end
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub color: String,

    /// Number of projects filed under this category
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub project_count: u32,
}
