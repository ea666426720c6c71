//! Database connection management and repositories.

mod connections;
mod sea_orm_base;
pub mod sea_orm_repo;

pub mod entity;

pub use connections::{DatabaseConfig, DatabaseConnections};
pub use sea_orm_base::SeaOrmBaseRepository;
pub use sea_orm_repo::SeaOrmBlogPostRepository;

pub use sea_orm::DbErr;
