//! Mentor records.

use serde::{Deserialize, Serialize};

use super::de;

/// A faculty mentor available to students.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Mentor {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub name: String,
    pub position: String,
    pub field: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub email: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub image: String,

    /// Research interests, in display order
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub research: Vec<String>,

    /// Notable achievements, in display order
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub achievements: Vec<String>,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub linkedin_url: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub github_url: String,
}
