use std::sync::Arc;

use todo_core::category::{resolve_color, validate_name};
use todo_core::error::CoreError;
use todo_core::types::DbId;
use todo_db::models::category::{Category, CreateCategory, NewCategory, UpdateCategory};
use todo_db::repositories::CategoryRepository;

use crate::error::AppResult;

/// Category use cases over an injected [`CategoryRepository`].
#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryRepository>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryRepository>) -> Self {
        Self { categories }
    }

    /// Validate and persist a new category. A blank color gets the default.
    pub async fn create(&self, input: CreateCategory) -> AppResult<Category> {
        validate_name(&input.name)?;
        let color = resolve_color(input.color.as_deref())?;

        let category = self
            .categories
            .create(&NewCategory {
                name: input.name,
                color,
            })
            .await?;
        Ok(category)
    }

    /// All categories, ordered by name.
    pub async fn list(&self) -> AppResult<Vec<Category>> {
        Ok(self.categories.list().await?)
    }

    /// Look up a category. Any lookup failure, including a storage error,
    /// is reported as `NotFound`; storage errors are logged first.
    pub async fn get(&self, id: DbId) -> AppResult<Category> {
        match self.categories.find_by_id(id).await {
            Ok(Some(category)) => Ok(category),
            Ok(None) => Err(CoreError::category_not_found(id).into()),
            Err(err) => {
                tracing::warn!(category_id = id, error = %err, "Category lookup failed");
                Err(CoreError::category_not_found(id).into())
            }
        }
    }

    /// Apply the supplied fields to an existing category.
    ///
    /// An empty `name` is rejected; an empty `color` resets to the default.
    pub async fn update(&self, id: DbId, input: UpdateCategory) -> AppResult<Category> {
        let mut category = self.get(id).await?;

        if let Some(name) = input.name {
            validate_name(&name)?;
            category.name = name;
        }
        if let Some(color) = input.color {
            category.color = resolve_color(Some(&color))?;
        }

        let updated = self
            .categories
            .update(&category)
            .await?
            .ok_or_else(|| CoreError::category_not_found(id))?;
        Ok(updated)
    }

    /// Delete a category. Todos that referenced it are left without one.
    pub async fn delete(&self, id: DbId) -> AppResult<()> {
        if !self.categories.delete(id).await? {
            return Err(CoreError::category_not_found(id).into());
        }
        Ok(())
    }
}
