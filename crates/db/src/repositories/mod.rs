//! Repository layer.
//!
//! One trait per entity describes the storage contract the services depend
//! on. [`PgCategoryRepo`] / [`PgTodoRepo`] implement it over a shared
//! `PgPool`; [`InMemoryStore`] implements both traits for tests and local
//! experiments.

use async_trait::async_trait;
use todo_core::pagination::PageRequest;
use todo_core::types::DbId;

use crate::models::category::{Category, NewCategory};
use crate::models::todo::{NewTodo, Todo, TodoFilter};

pub mod category_repo;
pub mod memory;
pub mod todo_repo;

pub use category_repo::PgCategoryRepo;
pub use memory::InMemoryStore;
pub use todo_repo::PgTodoRepo;

/// Storage contract for categories.
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Insert a category; the store assigns `id` and timestamps.
    async fn create(&self, input: &NewCategory) -> Result<Category, sqlx::Error>;

    /// All categories ordered by name ascending.
    async fn list(&self) -> Result<Vec<Category>, sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, sqlx::Error>;

    /// Save the full (already merged) row. Returns `None` if the row is gone.
    async fn update(&self, category: &Category) -> Result<Option<Category>, sqlx::Error>;

    /// Delete by id. Returns `true` if a row was deleted. Todos referencing
    /// the category are detached.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}

/// Storage contract for todos. Every returned [`Todo`] carries its category.
#[async_trait]
pub trait TodoRepository: Send + Sync {
    /// Insert a todo; the store assigns `id` and timestamps.
    async fn create(&self, input: &NewTodo) -> Result<Todo, sqlx::Error>;

    /// One page of todos matching `filter`, plus the total match count
    /// before paging.
    async fn list(
        &self,
        filter: &TodoFilter,
        page: PageRequest,
    ) -> Result<(Vec<Todo>, i64), sqlx::Error>;

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error>;

    /// Save the full (already merged) row. Returns `None` if the row is gone.
    async fn update(&self, todo: &Todo) -> Result<Option<Todo>, sqlx::Error>;

    /// Delete by id. Returns `true` if a row was deleted.
    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error>;
}
