//! # Blog API Server
//!
//! Actix-web application serving the `/posts` resource.
//! [`BlogServer`] owns the listener and database pool; the binary and the
//! integration tests both go through it.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{BlogServer, ServerError};
pub use state::AppState;
