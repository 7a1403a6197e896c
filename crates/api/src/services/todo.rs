use std::sync::Arc;

use todo_core::error::CoreError;
use todo_core::pagination::{PageRequest, Paginated, Pagination};
use todo_core::priority::Priority;
use todo_core::todo::{resolve_priority, validate_title};
use todo_core::types::DbId;
use todo_db::models::todo::{CreateTodo, NewTodo, Todo, TodoFilter, UpdateTodo};
use todo_db::repositories::{CategoryRepository, TodoRepository};

use crate::error::AppResult;

/// A todo listing request: typed filter plus raw (un-normalized) paging.
#[derive(Debug, Clone, Default)]
pub struct TodoListQuery {
    pub filter: TodoFilter,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

/// Todo use cases over injected repositories.
///
/// Holds the category repository as well so a supplied `category_id` can be
/// checked before it is written.
#[derive(Clone)]
pub struct TodoService {
    todos: Arc<dyn TodoRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl TodoService {
    pub fn new(todos: Arc<dyn TodoRepository>, categories: Arc<dyn CategoryRepository>) -> Self {
        Self { todos, categories }
    }

    /// Validate and persist a new todo, then return it as stored.
    ///
    /// Defaults: empty description, `medium` priority, not completed.
    /// A delete racing between the insert and the read surfaces as
    /// `NotFound`.
    pub async fn create(&self, input: CreateTodo) -> AppResult<Todo> {
        validate_title(&input.title)?;
        let priority = resolve_priority(input.priority.as_deref())?;
        if let Some(category_id) = input.category_id {
            self.ensure_category_exists(category_id).await?;
        }

        let created = self
            .todos
            .create(&NewTodo {
                title: input.title,
                description: input.description.unwrap_or_default(),
                priority,
                due_date: input.due_date,
                category_id: input.category_id,
            })
            .await?;

        // Re-read so the response carries the resolved category.
        self.get(created.id).await
    }

    /// One normalized page of todos matching the query's filter.
    pub async fn list(&self, query: TodoListQuery) -> AppResult<Paginated<Todo>> {
        let page = PageRequest::normalize(query.page, query.limit);
        let (data, total) = self.todos.list(&query.filter, page).await?;

        Ok(Paginated {
            data,
            pagination: Pagination::new(page, total),
        })
    }

    /// Look up a todo. Any lookup failure, including a storage error, is
    /// reported as `NotFound`; storage errors are logged first.
    pub async fn get(&self, id: DbId) -> AppResult<Todo> {
        match self.todos.find_by_id(id).await {
            Ok(Some(todo)) => Ok(todo),
            Ok(None) => Err(CoreError::todo_not_found(id).into()),
            Err(err) => {
                tracing::warn!(todo_id = id, error = %err, "Todo lookup failed");
                Err(CoreError::todo_not_found(id).into())
            }
        }
    }

    /// Merge the supplied fields into an existing todo and save it.
    ///
    /// Absent fields are kept. `due_date` and `category_id` are cleared by an
    /// explicit `null`. An empty `priority` counts as not supplied.
    pub async fn update(&self, id: DbId, input: UpdateTodo) -> AppResult<Todo> {
        let mut todo = self.get(id).await?;

        if let Some(title) = input.title {
            validate_title(&title)?;
            todo.title = title;
        }
        if let Some(description) = input.description {
            todo.description = description;
        }
        if let Some(completed) = input.completed {
            todo.completed = completed;
        }
        if let Some(priority) = Priority::parse_optional(input.priority.as_deref())? {
            todo.priority = priority;
        }
        if let Some(&category_id) = input.category_id.as_set() {
            self.ensure_category_exists(category_id).await?;
        }
        todo.due_date = input.due_date.apply(todo.due_date);
        todo.category_id = input.category_id.apply(todo.category_id);

        self.save(todo).await?;
        self.get(id).await
    }

    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.todos.delete(id).await? {
            return Err(CoreError::todo_not_found(id).into());
        }
        Ok(())
    }

    /// Flip `completed` and return the saved todo.
    pub async fn toggle_complete(&self, id: DbId) -> AppResult<Todo> {
        let mut todo = self.get(id).await?;
        todo.completed = !todo.completed;
        self.save(todo).await
    }

    async fn save(&self, todo: Todo) -> AppResult<Todo> {
        let saved = self
            .todos
            .update(&todo)
            .await?
            .ok_or_else(|| CoreError::todo_not_found(todo.id))?;
        Ok(saved)
    }

    async fn ensure_category_exists(&self, category_id: DbId) -> AppResult<()> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(
                CoreError::Validation(format!("category {category_id} does not exist")).into(),
            );
        }
        Ok(())
    }
}
