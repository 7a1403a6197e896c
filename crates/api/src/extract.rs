//! Custom Axum extractors.
//!
//! Axum's stock `Path` and `Json` rejections answer in plain text (and use
//! 422 for body shape errors). These wrappers reject with [`AppError`] so
//! every failure uses the JSON error envelope with status 400.

use axum::extract::{FromRequest, FromRequestParts, Path, Request};
use axum::http::request::Parts;
use axum::Json;
use serde::de::DeserializeOwned;
use todo_core::types::DbId;

use crate::error::AppError;

/// A todo id taken from the `{id}` path segment.
pub struct TodoId(pub DbId);

impl<S> FromRequestParts<S> for TodoId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        path_id(parts, state, "invalid todo ID").await.map(Self)
    }
}

/// A category id taken from the `{id}` path segment.
pub struct CategoryId(pub DbId);

impl<S> FromRequestParts<S> for CategoryId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        path_id(parts, state, "invalid category ID").await.map(Self)
    }
}

async fn path_id<S>(parts: &mut Parts, state: &S, message: &'static str) -> Result<DbId, AppError>
where
    S: Send + Sync,
{
    let Path(raw): Path<String> = Path::from_request_parts(parts, state)
        .await
        .map_err(|_| AppError::BadRequest(message.into()))?;

    raw.parse::<DbId>()
        .map_err(|_| AppError::BadRequest(message.into()))
}

/// JSON request body whose rejections become 400 responses carrying the
/// deserializer's message.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}
