//! Server lifecycle - owns the HTTP listener and the database pool.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use actix_web::dev::ServerHandle;
use actix_web::{App, HttpServer, web};
use blog_infra::database::{DatabaseConnections, DbErr};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing_actix_web::TracingLogger;

use crate::config::AppConfig;
use crate::handlers;
use crate::observability::RequestIdMiddleware;
use crate::state::AppState;

/// Errors raised while starting or stopping the server.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] DbErr),

    #[error("Failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("Listener reported no local address")]
    NoAddress,

    #[error("HTTP server failed: {0}")]
    Io(#[from] io::Error),

    #[error("Server task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// A running blog API: the HTTP listener plus the database pool behind it.
///
/// Dropping a `BlogServer` without calling [`BlogServer::stop`] leaves the
/// listener and pool alive until the runtime shuts down.
pub struct BlogServer {
    addr: SocketAddr,
    handle: ServerHandle,
    task: JoinHandle<io::Result<()>>,
    db: Arc<DatabaseConnections>,
}

impl BlogServer {
    /// Connect to the configured database, then start listening.
    ///
    /// Fails if the address is already in use.
    pub async fn start(config: &AppConfig) -> Result<Self, ServerError> {
        let db = Arc::new(DatabaseConnections::init(&config.database).await?);
        if let Err(e) = db.ensure_schema().await {
            db.close().await?;
            return Err(e.into());
        }

        let state = AppState::new(db.clone());
        let http = HttpServer::new(move || {
            App::new()
                .wrap(TracingLogger::default())
                .wrap(RequestIdMiddleware)
                .app_data(web::Data::new(state.clone()))
                .configure(handlers::configure_routes)
        });
        let http = http.shutdown_timeout(config.shutdown_timeout);
        let http = match config.workers {
            Some(workers) => http.workers(workers),
            None => http,
        };

        let http = match http.bind((config.host.as_str(), config.port)) {
            Ok(http) => http,
            Err(source) => {
                db.close().await?;
                return Err(ServerError::Bind {
                    addr: format!("{}:{}", config.host, config.port),
                    source,
                });
            }
        };
        let addr = http
            .addrs()
            .first()
            .copied()
            .ok_or(ServerError::NoAddress)?;

        let server = http.run();
        let handle = server.handle();
        let task = tokio::spawn(server);

        tracing::info!(%addr, "Blog API listening");

        Ok(Self {
            addr,
            handle,
            task,
            db,
        })
    }

    /// Address the listener is bound to.
    pub fn local_addr(&self) -> SocketAddr {
        self.addr
    }

    /// Absolute URL for `path` on this server.
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// The database pool serving this instance.
    pub fn db(&self) -> &DatabaseConnections {
        &self.db
    }

    /// Stop accepting requests, drain in-flight ones, then close the pool.
    pub async fn stop(self) -> Result<(), ServerError> {
        tracing::info!(addr = %self.addr, "Stopping Blog API");

        self.handle.stop(true).await;
        self.task.await??;
        self.db.close().await?;
        Ok(())
    }

    /// Run until the listener shuts down on its own (e.g. Ctrl-C), then close the pool.
    pub async fn wait(self) -> Result<(), ServerError> {
        let result = self.task.await;
        self.db.close().await?;
        result??;
        Ok(())
    }
}
