//! Data Transfer Objects - request/response types for the API.

use blog_core::domain::{Author, AuthorPatch, BlogPost, BlogPostPatch, NewBlogPost};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Author name parts as sent by clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Author::new(dto.first_name, dto.last_name)
    }
}

/// Request to create a blog post. All fields are required.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: String,
    pub author: AuthorDto,
    pub content: String,
}

impl From<CreateBlogPostRequest> for NewBlogPost {
    fn from(req: CreateBlogPostRequest) -> Self {
        Self {
            title: req.title,
            author: req.author.into(),
            content: req.content,
        }
    }
}

/// Author name parts in an update; either may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorPatchDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Request to update a blog post. Any subset of fields may be sent.
///
/// `id`, when present, must match the ID in the request path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<AuthorPatchDto>,
}

impl UpdateBlogPostRequest {
    pub fn into_patch(self) -> BlogPostPatch {
        BlogPostPatch {
            title: self.title,
            content: self.content,
            author: self.author.map(|a| AuthorPatch {
                first_name: a.first_name,
                last_name: a.last_name,
            }),
        }
    }
}

/// Outward representation of a blog post.
///
/// The author is projected as a single `"first last"` string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: String,
    pub created: DateTime<Utc>,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            author: post.author.full_name(),
            id: post.id,
            title: post.title,
            content: post.content,
            created: post.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn representation_exposes_only_projected_author() {
        let post = BlogPost::new(NewBlogPost {
            title: "T".to_string(),
            author: Author::new("A", "B"),
            content: "C".to_string(),
        });

        let value = serde_json::to_value(BlogPostResponse::from(post)).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["author", "content", "created", "id", "title"]);
        assert_eq!(object["author"], "A B");
    }

    #[test]
    fn create_request_requires_author_parts() {
        let missing = json!({
            "title": "T",
            "author": { "firstName": "A" },
            "content": "C"
        });
        assert!(serde_json::from_value::<CreateBlogPostRequest>(missing).is_err());

        let full = json!({
            "title": "T",
            "author": { "firstName": "A", "lastName": "B" },
            "content": "C"
        });
        let post: NewBlogPost = serde_json::from_value::<CreateBlogPostRequest>(full)
            .unwrap()
            .into();
        assert_eq!(post.author, Author::new("A", "B"));
    }

    #[test]
    fn update_request_maps_to_patch() {
        let body = json!({
            "title": "New",
            "author": { "lastName": "Z" }
        });
        let patch = serde_json::from_value::<UpdateBlogPostRequest>(body)
            .unwrap()
            .into_patch();

        assert_eq!(patch.title.as_deref(), Some("New"));
        assert_eq!(patch.content, None);
        assert_eq!(
            patch.author,
            Some(AuthorPatch {
                first_name: None,
                last_name: Some("Z".to_string()),
            })
        );
    }
}
