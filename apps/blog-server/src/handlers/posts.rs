//! Blog post resource handlers.

use actix_web::{HttpResponse, web};
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewBlogPost};
use blog_core::error::DomainError;
use blog_shared::dto::{BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest};

use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /posts
pub async fn list_posts(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.posts.find_all().await?;

    let body: Vec<BlogPostResponse> = posts.into_iter().map(Into::into).collect();
    Ok(HttpResponse::Ok().json(body))
}

/// GET /posts/{id}
pub async fn get_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();

    let post = state
        .posts
        .find_by_id(id)
        .await?
        .ok_or(DomainError::NotFound {
            entity_type: "BlogPost",
            id,
        })?;

    Ok(HttpResponse::Ok().json(BlogPostResponse::from(post)))
}

/// POST /posts
pub async fn create_post(
    state: web::Data<AppState>,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let new_post: NewBlogPost = body.into_inner().into();
    new_post.validate()?;

    let saved = state.posts.insert(BlogPost::new(new_post)).await?;
    tracing::info!(post_id = %saved.id, "Blog post created");

    Ok(HttpResponse::Created().json(BlogPostResponse::from(saved)))
}

/// PUT /posts/{id}
pub async fn update_post(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = path.into_inner();
    let req = body.into_inner();

    if let Some(body_id) = req.id.filter(|body_id| *body_id != id) {
        return Err(AppError::BadRequest(format!(
            "Request path id ({id}) and request body id ({body_id}) must match"
        )));
    }

    let patch = req.into_patch();
    patch.validate()?;

    state.posts.update(id, patch).await?;
    tracing::info!(post_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /posts/{id}
///
/// Deleting an unknown ID still answers 204, including one that is not a UUID.
pub async fn delete_post(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let Ok(id) = Uuid::parse_str(&path) else {
        tracing::debug!(post_id = %path, "Delete of malformed blog post id ignored");
        return Ok(HttpResponse::NoContent().finish());
    };

    if state.posts.delete(id).await? {
        tracing::info!(post_id = %id, "Blog post deleted");
    } else {
        tracing::debug!(post_id = %id, "Delete of unknown blog post ignored");
    }

    Ok(HttpResponse::NoContent().finish())
}
