// tests/common/mod.rs

//! Shared test utilities and helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use recipebox::db;
use recipebox::db::models::Recipe;
use recipebox::server::{ServerConfig, ServerState, create_router};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

/// A router backed by a fresh database in a temporary directory.
///
/// Keep the struct alive for the duration of the test; dropping it removes
/// the database.
pub struct TestApp {
    _temp_dir: TempDir,
    pub db_path: PathBuf,
    pub router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let db_path = temp_dir.path().join("recipes.db");
        db::init(db_path.to_str().unwrap()).unwrap();

        let config = ServerConfig {
            db_path: db_path.clone(),
            ..ServerConfig::default()
        };
        let router = create_router(Arc::new(ServerState::new(config)));

        Self {
            _temp_dir: temp_dir,
            db_path,
            router,
        }
    }

    /// Insert a recipe (with its collections) and return its ID
    pub fn insert(&self, recipe: Recipe) -> i64 {
        let mut conn = db::open(&self.db_path).unwrap();
        let mut recipe = recipe;
        db::transaction(&mut conn, |tx| recipe.insert(tx)).unwrap()
    }

    /// GET `uri`, returning status and body text
    pub async fn get(&self, uri: &str) -> (StatusCode, String) {
        let response = self
            .router
            .clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    /// GET `uri` and parse the body as JSON
    pub async fn get_json(&self, uri: &str) -> (StatusCode, Value) {
        let (status, body) = self.get(uri).await;
        (status, serde_json::from_str(&body).unwrap())
    }
}
