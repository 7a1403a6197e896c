//! PostgreSQL repository for the `categories` table.

use async_trait::async_trait;
use todo_core::types::DbId;

use crate::models::category::{Category, NewCategory};
use crate::repositories::CategoryRepository;
use crate::DbPool;

/// Column list for `categories` queries.
const COLUMNS: &str = "id, name, color, created_at, updated_at";

/// Category storage backed by PostgreSQL.
#[derive(Clone)]
pub struct PgCategoryRepo {
    pool: DbPool,
}

impl PgCategoryRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepo {
    async fn create(&self, input: &NewCategory) -> Result<Category, sqlx::Error> {
        let query = format!(
            "INSERT INTO categories (name, color) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.color)
            .fetch_one(&self.pool)
            .await
    }

    async fn list(&self) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories ORDER BY name ASC, id ASC");
        sqlx::query_as::<_, Category>(&query)
            .fetch_all(&self.pool)
            .await
    }

    async fn find_by_id(&self, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn update(&self, category: &Category) -> Result<Option<Category>, sqlx::Error> {
        let query = format!(
            "UPDATE categories SET name = $2, color = $3 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(category.id)
            .bind(&category.name)
            .bind(&category.color)
            .fetch_optional(&self.pool)
            .await
    }

    async fn delete(&self, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM categories WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
