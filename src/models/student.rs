//! Student records.

use serde::{Deserialize, Serialize};

use super::de;

/// A student profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub name: String,
    pub course: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub image: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub project_count: u32,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub linkedin_url: String,
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub github_url: String,
}
