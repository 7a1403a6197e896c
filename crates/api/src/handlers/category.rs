//! Handlers for categories.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use todo_db::models::category::{CreateCategory, UpdateCategory};

use crate::error::AppResult;
use crate::extract::{CategoryId, JsonBody};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/categories
pub async fn list_categories(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let categories = state.categories.list().await?;

    Ok(Json(categories))
}

/// POST /api/categories
pub async fn create_category(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.create(input).await?;

    tracing::info!(category_id = category.id, name = %category.name, "Category created");

    Ok((StatusCode::CREATED, Json(category)))
}

/// GET /api/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    CategoryId(id): CategoryId,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.get(id).await?;

    Ok(Json(category))
}

/// PUT /api/categories/{id}
pub async fn update_category(
    State(state): State<AppState>,
    CategoryId(id): CategoryId,
    JsonBody(input): JsonBody<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.update(id, input).await?;

    tracing::info!(category_id = id, "Category updated");

    Ok(Json(category))
}

/// DELETE /api/categories/{id}
///
/// Todos in the category are kept and lose their category.
pub async fn delete_category(
    State(state): State<AppState>,
    CategoryId(id): CategoryId,
) -> AppResult<impl IntoResponse> {
    state.categories.delete(id).await?;

    tracing::info!(category_id = id, "Category deleted");

    Ok(Json(MessageResponse {
        message: "category deleted successfully",
    }))
}
