//! # Blog Shared
//!
//! Request and response types of the HTTP API.
//! The outward JSON shapes live here, separate from the stored shape.

pub mod dto;
pub mod response;

pub use dto::{
    AuthorDto, AuthorPatchDto, BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest,
};
pub use response::ErrorResponse;
