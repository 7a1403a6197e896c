//! Shared response body types for API handlers.

use serde::Serialize;

/// `{ "message": ... }` body returned by delete endpoints.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
