//! Category entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::types::{DbId, Timestamp};

/// A row from the `categories` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a category.
///
/// A missing `name` deserializes to the empty string so it is reported as
/// "category name is required" rather than as a JSON shape error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCategory {
    #[serde(default)]
    pub name: String,
    pub color: Option<String>,
}

/// Request body for partially updating a category. Absent fields are kept.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateCategory {
    pub name: Option<String>,
    /// An empty string resets the color to the default.
    pub color: Option<String>,
}

/// Validated insert payload with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCategory {
    pub name: String,
    pub color: String,
}
