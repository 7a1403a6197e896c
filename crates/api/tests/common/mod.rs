#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use todo_api::config::ServerConfig;
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_core::pagination::PageRequest;
use todo_core::types::DbId;
use todo_db::models::category::{Category, NewCategory};
use todo_db::models::todo::{NewTodo, Todo, TodoFilter};
use todo_db::repositories::{CategoryRepository, InMemoryStore, TodoRepository};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses the wildcard CORS origin (matching the default) and a 30-second
/// request timeout. The database URL is never dialed.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        database_url: "postgres://unused".to_string(),
        database_max_connections: 1,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
    }
}

/// Application state backed by a fresh in-memory store.
pub fn test_state() -> AppState {
    let store = Arc::new(InMemoryStore::new());
    AppState::new(store.clone(), store)
}

/// Build the full application router with all middleware layers over a
/// fresh in-memory store.
pub fn build_test_app() -> Router {
    build_app_router(test_state(), &test_config())
}

/// Storage whose every call fails as if the pool were exhausted.
pub struct FailingStore;

fn storage_down() -> sqlx::Error {
    sqlx::Error::PoolTimedOut
}

#[async_trait]
impl CategoryRepository for FailingStore {
    async fn create(&self, _input: &NewCategory) -> Result<Category, sqlx::Error> {
        Err(storage_down())
    }

    async fn list(&self) -> Result<Vec<Category>, sqlx::Error> {
        Err(storage_down())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Category>, sqlx::Error> {
        Err(storage_down())
    }

    async fn update(&self, _category: &Category) -> Result<Option<Category>, sqlx::Error> {
        Err(storage_down())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(storage_down())
    }
}

#[async_trait]
impl TodoRepository for FailingStore {
    async fn create(&self, _input: &NewTodo) -> Result<Todo, sqlx::Error> {
        Err(storage_down())
    }

    async fn list(
        &self,
        _filter: &TodoFilter,
        _page: PageRequest,
    ) -> Result<(Vec<Todo>, i64), sqlx::Error> {
        Err(storage_down())
    }

    async fn find_by_id(&self, _id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        Err(storage_down())
    }

    async fn update(&self, _todo: &Todo) -> Result<Option<Todo>, sqlx::Error> {
        Err(storage_down())
    }

    async fn delete(&self, _id: DbId) -> Result<bool, sqlx::Error> {
        Err(storage_down())
    }
}

/// Full router over storage that always fails.
pub fn build_failing_app() -> Router {
    let store = Arc::new(FailingStore);
    build_app_router(AppState::new(store.clone(), store), &test_config())
}

/// Send a request with an optional JSON body through the router.
pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_raw(app: Router, method: Method, uri: &str, body: &str) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::PATCH, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
