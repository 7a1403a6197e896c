//! In-memory implementation of both repository traits.
//!
//! Mirrors the PostgreSQL semantics closely enough for service and HTTP
//! tests: name-ordered categories, AND-combined todo filters, counts taken
//! before paging, NULLs sorted last ascending / first descending, and
//! `ON DELETE SET NULL` for a deleted category's todos.

use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use chrono::Utc;
use todo_core::pagination::PageRequest;
use todo_core::sorting::{SortField, SortOrder};
use todo_core::types::{DbId, Timestamp};

use crate::models::category::{Category, NewCategory};
use crate::models::todo::{NewTodo, Todo, TodoFilter};
use crate::repositories::{CategoryRepository, TodoRepository};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<DbId, Category>,
    /// Stored without the resolved `category`; it is attached on read.
    todos: BTreeMap<DbId, Todo>,
    last_category_id: DbId,
    last_todo_id: DbId,
}

impl Tables {
    fn resolve(&self, todo: &Todo) -> Todo {
        let mut resolved = todo.clone();
        resolved.category = todo
            .category_id
            .and_then(|id| self.categories.get(&id).cloned());
        resolved
    }
}

/// Shared in-process store implementing [`CategoryRepository`] and
/// [`TodoRepository`].
#[derive(Debug, Default)]
pub struct InMemoryStore {
    tables: RwLock<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// A timestamp no earlier than `previous`, so `updated_at` never goes back.
fn touch(previous: Timestamp) -> Timestamp {
    Utc::now().max(previous)
}

/// Compare optional values with `None` after every `Some` (PostgreSQL's
/// default `NULLS LAST` for ascending order).
fn cmp_nulls_last<T: Ord>(a: &Option<T>, b: &Option<T>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
    }
}

fn compare_todos(a: &Todo, b: &Todo, field: SortField, order: SortOrder) -> Ordering {
    let primary = match field {
        SortField::Id => Ordering::Equal,
        SortField::Title => a.title.cmp(&b.title),
        SortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
        SortField::Completed => a.completed.cmp(&b.completed),
        SortField::DueDate => cmp_nulls_last(&a.due_date, &b.due_date),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
    };
    let ordering = primary.then_with(|| a.id.cmp(&b.id));
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

fn matches_filter(todo: &Todo, filter: &TodoFilter) -> bool {
    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        let needle = search.to_lowercase();
        let hit = todo.title.to_lowercase().contains(&needle)
            || todo.description.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    if filter.category_id.is_some() && todo.category_id != filter.category_id {
        return false;
    }
    if let Some(completed) = filter.completed {
        if todo.completed != completed {
            return false;
        }
    }
    if let Some(priority) = filter.priority.as_deref().filter(|p| !p.is_empty()) {
        if todo.priority.as_str() != priority {
            return false;
        }
    }
    true
}

#[async_trait]
impl CategoryRepository for InMemoryStore {
    async fn create(&self, input: &NewCategory) -> Result<Category, sqlx::Error> {
        let mut tables = self.write();
        tables.last_category_id += 1;
        let now = Utc::now();
        let category = Category {
            id: tables.last_category_id,
            name: input.name.clone(),
            color: input.color.clone(),
            created_at: now,
            updated_at: now,
        };
        tables.categories.insert(category.id, category.clone());
        Ok(category)
    }

    async fn list(&self) -> Result<Vec<Category>, sqlx::Error> {
        let mut categories: Vec<Category> = self.read().categories.values().cloned().collect();
        categories.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(categories)
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        Ok(self.read().categories.get(&id).cloned())
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>, sqlx::Error> {
        let mut tables = self.write();
        let Some(stored) = tables.categories.get_mut(&category.id) else {
            return Ok(None);
        };
        stored.name = category.name.clone();
        stored.color = category.color.clone();
        stored.updated_at = touch(stored.updated_at);
        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tables = self.write();
        if tables.categories.remove(&id).is_none() {
            return Ok(false);
        }
        for todo in tables.todos.values_mut() {
            if todo.category_id == Some(id) {
                todo.category_id = None;
            }
        }
        Ok(true)
    }
}

#[async_trait]
impl TodoRepository for InMemoryStore {
    async fn create(&self, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let mut tables = self.write();
        tables.last_todo_id += 1;
        let now = Utc::now();
        let todo = Todo {
            id: tables.last_todo_id,
            title: input.title.clone(),
            description: input.description.clone(),
            completed: false,
            priority: input.priority,
            due_date: input.due_date,
            category_id: input.category_id,
            category: None,
            created_at: now,
            updated_at: now,
        };
        tables.todos.insert(todo.id, todo.clone());
        Ok(tables.resolve(&todo))
    }

    async fn list(
        &self,
        filter: &TodoFilter,
        page: PageRequest,
    ) -> Result<(Vec<Todo>, i64), sqlx::Error> {
        let tables = self.read();
        let mut matching: Vec<&Todo> = tables
            .todos
            .values()
            .filter(|todo| matches_filter(todo, filter))
            .collect();
        let total = i64::try_from(matching.len()).unwrap_or(i64::MAX);

        matching.sort_by(|a, b| compare_todos(a, b, filter.sort_by, filter.sort_order));

        let offset = usize::try_from(page.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(page.limit).unwrap_or(0);
        let items = matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .map(|todo| tables.resolve(todo))
            .collect();

        Ok((items, total))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let tables = self.read();
        Ok(tables.todos.get(&id).map(|todo| tables.resolve(todo)))
    }

    async fn update(&self, todo: &Todo) -> Result<Option<Todo>, sqlx::Error> {
        let mut tables = self.write();
        let Some(stored) = tables.todos.get_mut(&todo.id) else {
            return Ok(None);
        };
        stored.title = todo.title.clone();
        stored.description = todo.description.clone();
        stored.completed = todo.completed;
        stored.priority = todo.priority;
        stored.due_date = todo.due_date;
        stored.category_id = todo.category_id;
        stored.updated_at = touch(stored.updated_at);
        let stored = stored.clone();
        Ok(Some(tables.resolve(&stored)))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        Ok(self.write().todos.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use todo_core::priority::Priority;

    use super::*;

    fn new_todo(title: &str) -> NewTodo {
        NewTodo {
            title: title.to_string(),
            description: String::new(),
            priority: Priority::Medium,
            due_date: None,
            category_id: None,
        }
    }

    #[tokio::test]
    async fn ids_are_assigned_sequentially() {
        let store = InMemoryStore::new();
        let a = TodoRepository::create(&store, &new_todo("a")).await.unwrap();
        let b = TodoRepository::create(&store, &new_todo("b")).await.unwrap();
        assert_eq!((a.id, b.id), (1, 2));
    }

    #[tokio::test]
    async fn deleting_category_detaches_todos() {
        let store = InMemoryStore::new();
        let category = CategoryRepository::create(
            &store,
            &NewCategory {
                name: "Work".into(),
                color: "#000000".into(),
            },
        )
        .await
        .unwrap();
        let mut input = new_todo("report");
        input.category_id = Some(category.id);
        let todo = TodoRepository::create(&store, &input).await.unwrap();
        assert_eq!(todo.category.as_ref().map(|c| c.id), Some(category.id));

        assert!(CategoryRepository::delete(&store, category.id).await.unwrap());

        let reloaded = TodoRepository::find_by_id(&store, todo.id).await.unwrap().unwrap();
        assert_eq!(reloaded.category_id, None);
        assert!(reloaded.category.is_none());
    }

    #[tokio::test]
    async fn due_date_nulls_sort_last_ascending() {
        let store = InMemoryStore::new();
        let mut dated = new_todo("dated");
        dated.due_date = Some(Utc::now());
        TodoRepository::create(&store, &new_todo("undated")).await.unwrap();
        TodoRepository::create(&store, &dated).await.unwrap();

        let filter = TodoFilter {
            sort_by: SortField::DueDate,
            sort_order: SortOrder::Asc,
            ..TodoFilter::default()
        };
        let (items, _) = TodoRepository::list(&store, &filter, PageRequest::default())
            .await
            .unwrap();
        let titles: Vec<_> = items.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["dated", "undated"]);
    }

    #[tokio::test]
    async fn update_of_missing_row_returns_none() {
        let store = InMemoryStore::new();
        let mut todo = TodoRepository::create(&store, &new_todo("gone")).await.unwrap();
        TodoRepository::delete(&store, todo.id).await.unwrap();
        todo.completed = true;
        assert!(TodoRepository::update(&store, &todo).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_priority_filter_matches_nothing() {
        let store = InMemoryStore::new();
        TodoRepository::create(&store, &new_todo("medium")).await.unwrap();

        let filter = TodoFilter {
            priority: Some("urgent".into()),
            ..TodoFilter::default()
        };
        let (items, total) = TodoRepository::list(&store, &filter, PageRequest::default())
            .await
            .unwrap();
        assert!(items.is_empty());
        assert_eq!(total, 0);
    }
}
