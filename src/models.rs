use serde::{Deserialize, Serialize};

/// A user of the remote API
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl User {
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        User {
            id,
            name: name.into(),
            username: None,
            email: None,
            phone: None,
        }
    }
}

/// A post authored by a user
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub user_id: u64,
    pub title: String,
    pub body: String,
}

/// A comment left on a post
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: u64,
    pub post_id: u64,
    pub name: String,
    pub email: String,
    pub body: String,
}

/// Unsaved comment input
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentDraft {
    pub name: String,
    pub email: String,
    pub body: String,
}

impl CommentDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        CommentDraft {
            name: name.into(),
            email: email.into(),
            body: body.into(),
        }
    }
}

/// Wire payload for creating a comment
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewComment<'a> {
    pub post_id: u64,
    pub name: &'a str,
    pub email: &'a str,
    pub body: &'a str,
}

impl<'a> NewComment<'a> {
    pub fn from_draft(draft: &'a CommentDraft, post_id: u64) -> Self {
        NewComment {
            post_id,
            name: &draft.name,
            email: &draft.email,
            body: &draft.body,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_uses_camel_case_user_id() {
        let post: Post = serde_json::from_str(
            r#"{"id": 10, "userId": 1, "title": "T", "body": "B"}"#,
        )
        .unwrap();
        assert_eq!(post.user_id, 1);
        assert_eq!(post.title, "T");
    }

    #[test]
    fn test_user_tolerates_extra_fields() {
        let user: User = serde_json::from_str(
            r#"{"id": 1, "name": "Alice", "email": "a@x.com", "address": {"city": "Kyiv"}}"#,
        )
        .unwrap();
        assert_eq!(user.name, "Alice");
        assert_eq!(user.email.as_deref(), Some("a@x.com"));
        assert!(user.phone.is_none());
    }

    #[test]
    fn test_new_comment_payload() {
        let draft = CommentDraft::new("Bob", "b@x.com", "Hi");
        let json = serde_json::to_value(NewComment::from_draft(&draft, 10)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"postId": 10, "name": "Bob", "email": "b@x.com", "body": "Hi"})
        );
    }
}
