//! Handlers for todo items.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_db::models::todo::{CreateTodo, UpdateTodo};

use crate::error::AppResult;
use crate::extract::{JsonBody, TodoId};
use crate::query::TodoListParams;
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/todos
///
/// Paginated, filtered, sorted listing. Returns `{ data, pagination }`.
pub async fn list_todos(
    State(state): State<AppState>,
    Query(params): Query<TodoListParams>,
) -> AppResult<impl IntoResponse> {
    let page = state.todos.list(params.into_query()).await?;

    Ok(Json(page))
}

/// POST /api/todos
pub async fn create_todo(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.create(input).await?;

    tracing::info!(todo_id = todo.id, "Todo created");

    Ok((StatusCode::CREATED, Json(todo)))
}

/// GET /api/todos/{id}
pub async fn get_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.get(id).await?;

    Ok(Json(todo))
}

/// PUT /api/todos/{id}
///
/// Partial update; absent fields are left unchanged.
pub async fn update_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
    JsonBody(input): JsonBody<UpdateTodo>,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.update(id, input).await?;

    tracing::info!(todo_id = id, "Todo updated");

    Ok(Json(todo))
}

/// DELETE /api/todos/{id}
pub async fn delete_todo(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> AppResult<impl IntoResponse> {
    state.todos.delete(id).await?;

    tracing::info!(todo_id = id, "Todo deleted");

    Ok(Json(MessageResponse {
        message: "todo deleted successfully",
    }))
}

/// PATCH /api/todos/{id}/complete
///
/// Flip the completion flag.
pub async fn toggle_todo_complete(
    State(state): State<AppState>,
    TodoId(id): TodoId,
) -> AppResult<impl IntoResponse> {
    let todo = state.todos.toggle_complete(id).await?;

    tracing::info!(todo_id = id, completed = todo.completed, "Todo completion toggled");

    Ok(Json(todo))
}
