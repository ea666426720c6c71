use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post, stored as separate name parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// The single-string projection exposed on read: `"{first} {last}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Fields supplied by a client when creating a post.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub author: Author,
    pub content: String,
}

impl NewBlogPost {
    pub fn validate(&self) -> Result<(), DomainError> {
        validate_title(&self.title)
    }
}

/// Blog post entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub author: Author,
    pub content: String,
    pub created: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a generated ID and creation timestamp.
    pub fn new(post: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: post.title,
            author: post.author,
            content: post.content,
            created: Utc::now(),
        }
    }
}

/// Partial author update; absent name parts keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Partial update of a post. Only `Some` fields are written.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorPatch>,
}

impl BlogPostPatch {
    /// True when the patch would not change any field.
    pub fn is_empty(&self) -> bool {
        let author_empty = self
            .author
            .as_ref()
            .is_none_or(|a| a.first_name.is_none() && a.last_name.is_none());
        self.title.is_none() && self.content.is_none() && author_empty
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        match &self.title {
            Some(title) => validate_title(title),
            None => Ok(()),
        }
    }
}

fn validate_title(title: &str) -> Result<(), DomainError> {
    if title.trim().is_empty() {
        return Err(DomainError::Validation("title must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NewBlogPost {
        NewBlogPost {
            title: "T".to_string(),
            author: Author::new("A", "B"),
            content: "C".to_string(),
        }
    }

    #[test]
    fn full_name_joins_with_single_space() {
        assert_eq!(Author::new("Ada", "Lovelace").full_name(), "Ada Lovelace");
    }

    #[test]
    fn new_assigns_distinct_ids() {
        let a = BlogPost::new(sample());
        let b = BlogPost::new(sample());
        assert_ne!(a.id, b.id);
        assert!(b.created >= a.created);
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut post = sample();
        post.title = "   ".to_string();
        assert!(matches!(post.validate(), Err(DomainError::Validation(_))));

        let patch = BlogPostPatch {
            title: Some(String::new()),
            ..Default::default()
        };
        assert!(patch.validate().is_err());
        assert!(BlogPostPatch::default().validate().is_ok());
    }

    #[test]
    fn patch_emptiness() {
        assert!(BlogPostPatch::default().is_empty());
        assert!(
            BlogPostPatch {
                author: Some(AuthorPatch::default()),
                ..Default::default()
            }
            .is_empty()
        );
        assert!(
            !BlogPostPatch {
                title: Some("x".to_string()),
                ..Default::default()
            }
            .is_empty()
        );
    }
}
