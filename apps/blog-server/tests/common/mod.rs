//! Shared harness for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use blog_core::domain::{Author, BlogPost, NewBlogPost};
use blog_core::ports::BlogPostRepository;
use blog_infra::database::SeaOrmBlogPostRepository;
use blog_server::{AppConfig, BlogServer};
use rand::Rng;
use rand::seq::SliceRandom;
use tempfile::TempDir;

const FIRST_NAMES: &[&str] = &["Ada", "Grace", "Alan", "Barbara", "Edsger", "Margaret"];
const LAST_NAMES: &[&str] = &["Lovelace", "Hopper", "Turing", "Liskov", "Dijkstra", "Hamilton"];
const WORDS: &[&str] = &[
    "robust", "scalable", "seamless", "adaptive", "holistic", "synergy", "paradigm",
    "framework", "pipeline", "protocol", "leverage", "interface",
];

/// A running server backed by its own throwaway SQLite database.
pub struct TestApp {
    pub server: BlogServer,
    pub client: reqwest::Client,
    _dir: TempDir,
}

impl TestApp {
    pub async fn spawn() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let url = format!(
            "sqlite://{}?mode=rwc",
            dir.path().join("test-blog-app.db").display()
        );

        let server = BlogServer::start(&AppConfig::for_database(url))
            .await
            .expect("start test server");

        Self {
            server,
            client: test_client(),
            _dir: dir,
        }
    }

    pub fn url(&self, path: &str) -> String {
        self.server.url(path)
    }

    /// Direct store access, bypassing HTTP.
    pub fn repo(&self) -> Arc<dyn BlogPostRepository> {
        Arc::new(SeaOrmBlogPostRepository::new(self.server.db().main.clone()))
    }

    pub async fn seed_blog_data(&self, n: usize) -> Vec<BlogPost> {
        let seed = (0..n).map(|_| BlogPost::new(generate_blog_data())).collect();
        self.repo().insert_many(seed).await.expect("seed blog posts")
    }

    pub async fn stop(self) {
        self.server.stop().await.expect("stop test server");
    }
}

/// HTTP client without idle connection pooling, so stopping the server never waits on it.
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_max_idle_per_host(0)
        .build()
        .expect("build http client")
}

fn pick(words: &[&'static str]) -> &'static str {
    words.choose(&mut rand::thread_rng()).copied().unwrap_or("lorem")
}

fn sentence() -> String {
    let len = rand::thread_rng().gen_range(4..10);
    let words: Vec<&str> = (0..len).map(|_| pick(WORDS)).collect();
    format!("{}.", words.join(" "))
}

pub fn generate_blog_data() -> NewBlogPost {
    NewBlogPost {
        title: sentence(),
        author: Author::new(pick(FIRST_NAMES), pick(LAST_NAMES)),
        content: (0..3).map(|_| sentence()).collect::<Vec<_>>().join(" "),
    }
}
