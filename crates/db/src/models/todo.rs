//! Todo entity model, DTOs, and list filter.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use todo_core::patch::Patch;
use todo_core::priority::Priority;
use todo_core::sorting::{SortField, SortOrder};
use todo_core::types::{DbId, Timestamp};

use crate::models::category::Category;

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A todo item with its category (when it has one) resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Todo {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    pub priority: Priority,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<DbId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A `todos` row joined with its (optional) category columns.
///
/// The category columns come from a `LEFT JOIN`, so they are all `NULL` when
/// the todo has no category.
#[derive(Debug, FromRow)]
pub struct TodoRow {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[sqlx(try_from = "String")]
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub category_name: Option<String>,
    pub category_color: Option<String>,
    pub category_created_at: Option<Timestamp>,
    pub category_updated_at: Option<Timestamp>,
}

impl From<TodoRow> for Todo {
    fn from(row: TodoRow) -> Self {
        let category = match (
            row.category_id,
            row.category_name,
            row.category_color,
            row.category_created_at,
            row.category_updated_at,
        ) {
            (Some(id), Some(name), Some(color), Some(created_at), Some(updated_at)) => {
                Some(Category {
                    id,
                    name,
                    color,
                    created_at,
                    updated_at,
                })
            }
            _ => None,
        };

        Self {
            id: row.id,
            title: row.title,
            description: row.description,
            completed: row.completed,
            priority: row.priority,
            due_date: row.due_date,
            category_id: row.category_id,
            category,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Request body for creating a todo.
///
/// `priority` stays a string here so an unknown value surfaces as
/// "invalid priority value" instead of a JSON shape error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_date: Option<Timestamp>,
    pub category_id: Option<DbId>,
}

/// Request body for partially updating a todo.
///
/// Non-nullable fields use `Option` (absent or `null` = keep). The nullable
/// columns use [`Patch`] so `null` clears them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTodo {
    pub title: Option<String>,
    pub description: Option<String>,
    pub completed: Option<bool>,
    pub priority: Option<String>,
    #[serde(default)]
    pub due_date: Patch<Timestamp>,
    #[serde(default)]
    pub category_id: Patch<DbId>,
}

/// Validated insert payload with defaults already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<Timestamp>,
    pub category_id: Option<DbId>,
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// Typed filter for todo listings. `None` fields impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoFilter {
    /// Case-insensitive substring matched against title OR description.
    pub search: Option<String>,
    pub category_id: Option<DbId>,
    pub completed: Option<bool>,
    /// Exact match against the stored priority. A value outside
    /// high/medium/low matches nothing.
    pub priority: Option<String>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
}
