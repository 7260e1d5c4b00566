//! Typed views of off-chain content documents
//!
//! Every field is optional so that partially filled documents still parse.
//! A document that does not parse at all is treated as missing.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpaceContent {
    pub name: String,
    pub about: Option<String>,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub links: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PostContent {
    pub title: Option<String>,
    pub body: String,
    pub image: Option<String>,
    pub tags: Vec<String>,
    pub canonical: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileContent {
    pub name: String,
    pub avatar: Option<String>,
    pub about: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_document_parses() {
        let content: PostContent = serde_json::from_value(serde_json::json!({
            "body": "Hello",
            "unknown": 42
        }))
        .unwrap();

        assert_eq!(content.body, "Hello");
        assert!(content.title.is_none());
        assert!(content.tags.is_empty());
    }

    #[test]
    fn test_non_object_document_is_rejected() {
        assert!(serde_json::from_value::<SpaceContent>(serde_json::json!("just a string")).is_err());
        assert!(serde_json::from_value::<ProfileContent>(serde_json::json!({"name": 5})).is_err());
    }

    #[test]
    fn test_array_document_fills_fields_by_position() {
        // Arrays deserialize positionally, which is why the fetcher only
        // accepts objects as documents
        let content: PostContent = serde_json::from_value(serde_json::json!(["not", "a", "post"])).unwrap();
        assert_eq!(content.body, "a");
    }
}
