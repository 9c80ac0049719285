//! Post domain model

use serde::{Deserialize, Serialize};

/// A post as served by the placeholder API's `/posts` endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub user_id: u64,
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_post() {
        let json = r#"{ "userId": 1, "id": 3, "title": "ea molestias", "body": "et iusto sed" }"#;
        let post: Post = serde_json::from_str(json).unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.id, 3);
        assert_eq!(post.title, "ea molestias");
    }

    #[test]
    fn test_missing_body_is_empty() {
        let post: Post = serde_json::from_str(r#"{ "userId": 2, "id": 9 }"#).unwrap();
        assert_eq!(post.title, "");
        assert_eq!(post.body, "");
    }
}
