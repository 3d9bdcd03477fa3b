//! Project records shown in the feed and catalog.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::de;

/// Image shown for an author without a profile picture.
pub const PLACEHOLDER_USER_IMAGE: &str = "/placeholder-user.jpg";

/// Cover image shown for a project without images.
pub const PLACEHOLDER_COVER: &str = "/placeholder.jpg";

/// A showcased project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    #[serde(deserialize_with = "de::string_or_number")]
    pub id: String,
    pub title: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub description: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub tags: Vec<String>,

    /// Denormalized author (name and picture), not a foreign key
    #[serde(default, deserialize_with = "de::null_as_default")]
    pub author: Author,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub github_url: String,

    #[serde(default, deserialize_with = "de::null_as_default")]
    pub live_url: String,

    /// Screenshot URLs, in display order
    #[serde(
        default,
        deserialize_with = "de::null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub images: Vec<String>,

    /// Demo video URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Cover image, falling back to the placeholder.
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .map(String::as_str)
            .unwrap_or(PLACEHOLDER_COVER)
    }
}

/// Project author as embedded in project records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    #[serde(
        default = "defaults::author_name",
        deserialize_with = "author_name_or_default"
    )]
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Author {
    /// Profile picture, falling back to the placeholder.
    pub fn image_or_placeholder(&self) -> &str {
        self.image
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(PLACEHOLDER_USER_IMAGE)
    }
}

impl Default for Author {
    fn default() -> Self {
        Self {
            name: defaults::author_name(),
            image: None,
        }
    }
}

/// A `null` author name gets the same default as a missing one.
fn author_name_or_default<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(defaults::author_name))
}

mod defaults {
    pub fn author_name() -> String {
        "Anonymous".into()
    }
}
