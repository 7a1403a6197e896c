use std::sync::Arc;

use todo_db::repositories::{CategoryRepository, TodoRepository};

use crate::services::{CategoryService, TodoService};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (services hold their repositories behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Todo use cases.
    pub todos: TodoService,
    /// Category use cases.
    pub categories: CategoryService,
}

impl AppState {
    /// Wire both services to the given storage.
    pub fn new(todos: Arc<dyn TodoRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self {
            todos: TodoService::new(todos, Arc::clone(&categories)),
            categories: CategoryService::new(categories),
        }
    }
}
