//! PostgreSQL repository for the `todos` table.
//!
//! Every read joins `categories` so returned todos carry their category.

use async_trait::async_trait;
use todo_core::pagination::PageRequest;
use todo_core::sorting::{SortField, SortOrder};
use todo_core::types::DbId;

use crate::models::todo::{NewTodo, Todo, TodoFilter, TodoRow};
use crate::repositories::TodoRepository;
use crate::DbPool;

// ---------------------------------------------------------------------------
// Column lists
// ---------------------------------------------------------------------------

/// Todo columns (aliased `t`) plus the joined category columns (aliased `c`).
const JOINED_COLUMNS: &str = "\
    t.id, t.title, t.description, t.completed, t.priority, t.due_date, \
    t.category_id, t.created_at, t.updated_at, \
    c.name AS category_name, c.color AS category_color, \
    c.created_at AS category_created_at, c.updated_at AS category_updated_at";

const CATEGORY_JOIN: &str = "LEFT JOIN categories c ON c.id = t.category_id";

// ---------------------------------------------------------------------------
// Dynamic filter helpers
// ---------------------------------------------------------------------------

/// Typed bind value for dynamically-built listing queries.
enum BindValue {
    BigInt(i64),
    Text(String),
    Bool(bool),
}

/// Build a WHERE clause and bind values from a [`TodoFilter`].
///
/// Returns `(where_clause, bind_values, next_bind_index)`. The clause is
/// empty if no filters are active, or starts with `WHERE `.
fn build_todo_filter(filter: &TodoFilter) -> (String, Vec<BindValue>, u32) {
    let mut conditions: Vec<String> = Vec::new();
    let mut bind_idx = 1u32;
    let mut bind_values: Vec<BindValue> = Vec::new();

    if let Some(search) = filter.search.as_deref().filter(|s| !s.is_empty()) {
        conditions.push(format!(
            "(t.title ILIKE ${bind_idx} OR t.description ILIKE ${bind_idx})"
        ));
        bind_idx += 1;
        bind_values.push(BindValue::Text(format!("%{}%", escape_like(search))));
    }

    if let Some(category_id) = filter.category_id {
        conditions.push(format!("t.category_id = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::BigInt(category_id));
    }

    if let Some(completed) = filter.completed {
        conditions.push(format!("t.completed = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Bool(completed));
    }

    if let Some(priority) = filter.priority.as_deref().filter(|p| !p.is_empty()) {
        conditions.push(format!("t.priority = ${bind_idx}"));
        bind_idx += 1;
        bind_values.push(BindValue::Text(priority.to_string()));
    }

    let where_clause = if conditions.is_empty() {
        String::new()
    } else {
        format!("WHERE {}", conditions.join(" AND "))
    };

    (where_clause, bind_values, bind_idx)
}

/// Escape `ILIKE` wildcards so the search term matches literally.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// ORDER BY clause for a listing. Ties break on `id` in the same direction.
fn order_clause(field: SortField, order: SortOrder) -> String {
    let column = match field {
        SortField::Id => "t.id",
        SortField::Title => "t.title",
        SortField::Priority => {
            "CASE t.priority WHEN 'high' THEN 3 WHEN 'medium' THEN 2 ELSE 1 END"
        }
        SortField::Completed => "t.completed",
        SortField::DueDate => "t.due_date",
        SortField::CreatedAt => "t.created_at",
        SortField::UpdatedAt => "t.updated_at",
    };
    let dir = order.as_sql();
    if field == SortField::Id {
        format!("ORDER BY {column} {dir}")
    } else {
        format!("ORDER BY {column} {dir}, t.id {dir}")
    }
}

/// Bind a slice of `BindValue` to a sqlx `QueryAs`.
fn bind_values<'q, O>(
    mut q: sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryAs<'q, sqlx::Postgres, O, sqlx::postgres::PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
        }
    }
    q
}

/// Bind a slice of `BindValue` to a sqlx `QueryScalar`.
fn bind_values_scalar<'q>(
    mut q: sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments>,
    values: &'q [BindValue],
) -> sqlx::query::QueryScalar<'q, sqlx::Postgres, i64, sqlx::postgres::PgArguments> {
    for val in values {
        match val {
            BindValue::BigInt(v) => q = q.bind(*v),
            BindValue::Text(v) => q = q.bind(v.as_str()),
            BindValue::Bool(v) => q = q.bind(*v),
        }
    }
    q
}

// ---------------------------------------------------------------------------
// PgTodoRepo
// ---------------------------------------------------------------------------

/// Todo storage backed by PostgreSQL.
#[derive(Clone)]
pub struct PgTodoRepo {
    pool: DbPool,
}

impl PgTodoRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoRepository for PgTodoRepo {
    async fn create(&self, input: &NewTodo) -> Result<Todo, sqlx::Error> {
        let query = format!(
            "WITH t AS ( \
                 INSERT INTO todos (title, description, priority, due_date, category_id) \
                 VALUES ($1, $2, $3, $4, $5) \
                 RETURNING * \
             ) \
             SELECT {JOINED_COLUMNS} FROM t {CATEGORY_JOIN}"
        );
        let row = sqlx::query_as::<_, TodoRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.priority.as_str())
            .bind(input.due_date)
            .bind(input.category_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(row.into())
    }

    async fn list(
        &self,
        filter: &TodoFilter,
        page: PageRequest,
    ) -> Result<(Vec<Todo>, i64), sqlx::Error> {
        let (where_clause, values, bind_idx) = build_todo_filter(filter);

        let count_query = format!("SELECT COUNT(*) FROM todos t {where_clause}");
        let total = bind_values_scalar(sqlx::query_scalar::<_, i64>(&count_query), &values)
            .fetch_one(&self.pool)
            .await?;

        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM todos t {CATEGORY_JOIN} \
             {where_clause} \
             {order} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            order = order_clause(filter.sort_by, filter.sort_order),
            next_idx = bind_idx + 1,
        );
        let rows = bind_values(sqlx::query_as::<_, TodoRow>(&query), &values)
            .bind(page.limit)
            .bind(page.offset())
            .fetch_all(&self.pool)
            .await?;

        Ok((rows.into_iter().map(Todo::from).collect(), total))
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM todos t {CATEGORY_JOIN} WHERE t.id = $1");
        let row = sqlx::query_as::<_, TodoRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Todo::from))
    }

    async fn update(&self, todo: &Todo) -> Result<Option<Todo>, sqlx::Error> {
        let query = format!(
            "WITH t AS ( \
                 UPDATE todos SET \
                     title = $2, \
                     description = $3, \
                     completed = $4, \
                     priority = $5, \
                     due_date = $6, \
                     category_id = $7 \
                 WHERE id = $1 \
                 RETURNING * \
             ) \
             SELECT {JOINED_COLUMNS} FROM t {CATEGORY_JOIN}"
        );
        let row = sqlx::query_as::<_, TodoRow>(&query)
            .bind(todo.id)
            .bind(&todo.title)
            .bind(&todo.description)
            .bind(todo.completed)
            .bind(todo.priority.as_str())
            .bind(todo.due_date)
            .bind(todo.category_id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Todo::from))
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM todos WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
