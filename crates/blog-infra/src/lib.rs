//! # Blog Infrastructure
//!
//! Concrete implementations of the ports defined in `blog-core`.
//! The blog post store is backed by SeaORM; PostgreSQL and SQLite
//! connection URLs are both accepted.

pub mod database;

pub use database::{DatabaseConfig, DatabaseConnections, SeaOrmBlogPostRepository};
