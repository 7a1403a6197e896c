pub mod category;
pub mod health;
pub mod todo;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /todos                       list, create
/// /todos/{id}                  get, update, delete
/// /todos/{id}/complete         toggle completion (PATCH)
///
/// /categories                  list, create
/// /categories/{id}             get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/todos", todo::router())
        .nest("/categories", category::router())
}
