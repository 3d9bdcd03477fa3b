//! Lenient field deserializers for records produced by the front end.

use serde::{Deserialize, Deserializer};

/// Treat `null` like a missing field.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept an identifier written as a string or as a number.
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Unsigned(u64),
        Signed(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Unsigned(n) => n.to_string(),
        Id::Signed(n) => n.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Record {
        #[serde(deserialize_with = "string_or_number")]
        id: String,
        #[serde(default, deserialize_with = "null_as_default")]
        tags: Vec<String>,
        #[serde(default, deserialize_with = "null_as_default")]
        count: u32,
    }

    #[test]
    fn test_null_fields_default() {
        let record: Record =
            serde_json::from_str(r#"{"id":"a","tags":null,"count":null}"#).unwrap();
        assert!(record.tags.is_empty());
        assert_eq!(record.count, 0);
    }

    #[test]
    fn test_numeric_ids() {
        let record: Record = serde_json::from_str(r#"{"id":7}"#).unwrap();
        assert_eq!(record.id, "7");
        let record: Record = serde_json::from_str(r#"{"id":-3}"#).unwrap();
        assert_eq!(record.id, "-3");
    }

    #[test]
    fn test_other_id_types_rejected() {
        assert!(serde_json::from_str::<Record>(r#"{"id":null}"#).is_err());
        assert!(serde_json::from_str::<Record>(r#"{"id":[1]}"#).is_err());
    }
}
