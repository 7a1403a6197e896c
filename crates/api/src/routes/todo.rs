//! Route definitions for todo items.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::todo;
use crate::state::AppState;

/// Todo routes mounted at `/todos`.
///
/// ```text
/// GET    /                -> list_todos
/// POST   /                -> create_todo
/// GET    /{id}            -> get_todo
/// PUT    /{id}            -> update_todo
/// DELETE /{id}            -> delete_todo
/// PATCH  /{id}/complete   -> toggle_todo_complete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(todo::list_todos).post(todo::create_todo))
        .route(
            "/{id}",
            get(todo::get_todo)
                .put(todo::update_todo)
                .delete(todo::delete_todo),
        )
        .route("/{id}/complete", patch(todo::toggle_todo_complete))
}
