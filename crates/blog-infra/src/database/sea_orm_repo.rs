//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostPatch};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blog_post::{self, Entity as BlogPostEntity};
use super::sea_orm_base::{SeaOrmBaseRepository, map_db_err};

/// SeaORM blog post repository.
pub type SeaOrmBlogPostRepository = SeaOrmBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for SeaOrmBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .all(&self.db)
            .await
            .map_err(map_db_err)?;

        tracing::debug!(count = result.len(), "Loaded blog posts");
        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blog_post::Column::Created)
            .one(&self.db)
            .await
            .map_err(map_db_err)?;

        Ok(result.map(Into::into))
    }

    async fn update(&self, id: Uuid, patch: BlogPostPatch) -> Result<(), RepoError> {
        tracing::debug!(post_id = %id, "Updating blog post");

        if patch.is_empty() {
            // Nothing to write, but the post still has to exist.
            let existing = BlogPostEntity::find_by_id(id)
                .one(&self.db)
                .await
                .map_err(map_db_err)?;
            return existing.map(|_| ()).ok_or(RepoError::NotFound);
        }

        let mut update = BlogPostEntity::update_many().filter(blog_post::Column::Id.eq(id));
        if let Some(title) = patch.title {
            update = update.col_expr(blog_post::Column::Title, Expr::value(title));
        }
        if let Some(content) = patch.content {
            update = update.col_expr(blog_post::Column::Content, Expr::value(content));
        }
        if let Some(author) = patch.author {
            if let Some(first_name) = author.first_name {
                update =
                    update.col_expr(blog_post::Column::AuthorFirstName, Expr::value(first_name));
            }
            if let Some(last_name) = author.last_name {
                update =
                    update.col_expr(blog_post::Column::AuthorLastName, Expr::value(last_name));
            }
        }

        let result = update.exec(&self.db).await.map_err(map_db_err)?;
        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }
}
