//! # Blog Core
//!
//! The domain layer of the blog API.
//! This crate contains the blog post model and the store port,
//! with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
