use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostPatch};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Insert a new entity and return it as stored.
    async fn insert(&self, entity: T) -> Result<T, RepoError>;

    /// Insert several entities in one statement.
    async fn insert_many(&self, entities: Vec<T>) -> Result<Vec<T>, RepoError>;

    /// Count all stored entities.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Delete an entity by its ID. Returns `false` if nothing was removed.
    async fn delete(&self, id: ID) -> Result<bool, RepoError>;
}

/// Blog post repository.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// All posts, oldest first.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// The oldest post, if any.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Overwrite the fields present in `patch`.
    ///
    /// Fails with [`RepoError::NotFound`] when no post has this ID.
    async fn update(&self, id: Uuid, patch: BlogPostPatch) -> Result<(), RepoError>;
}
