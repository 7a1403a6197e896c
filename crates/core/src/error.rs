use crate::types::DbId;

/// Domain-level failures raised by validation and lookup rules.
///
/// The `Display` strings double as the client-facing error messages, so
/// keep them lowercase and free of internal detail.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("todo title is required")]
    TitleRequired,

    #[error("category name is required")]
    NameRequired,

    #[error("invalid priority value")]
    InvalidPriority,

    #[error("{0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a missing todo.
    pub fn todo_not_found(id: DbId) -> Self {
        Self::NotFound { entity: "todo", id }
    }

    /// Shorthand for a missing category.
    pub fn category_not_found(id: DbId) -> Self {
        Self::NotFound {
            entity: "category",
            id,
        }
    }
}
