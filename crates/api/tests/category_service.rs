//! Tests for `CategoryService` business rules over the in-memory store.

mod common;

use std::sync::Arc;

use assert_matches::assert_matches;
use todo_api::error::AppError;
use todo_api::services::{CategoryService, TodoService};
use todo_core::error::CoreError;
use todo_db::models::category::{CreateCategory, UpdateCategory};
use todo_db::models::todo::CreateTodo;
use todo_db::repositories::InMemoryStore;

fn services() -> (CategoryService, TodoService) {
    let store = Arc::new(InMemoryStore::new());
    (
        CategoryService::new(store.clone()),
        TodoService::new(store.clone(), store),
    )
}

fn named(name: &str) -> CreateCategory {
    CreateCategory {
        name: name.to_string(),
        color: None,
    }
}

#[tokio::test]
async fn create_defaults_color() {
    let (categories, _) = services();

    let category = categories.create(named("Work")).await.unwrap();

    assert_eq!(category.name, "Work");
    assert_eq!(category.color, "#3B82F6");
}

#[tokio::test]
async fn create_keeps_supplied_color() {
    let (categories, _) = services();
    let category = categories
        .create(CreateCategory {
            name: "Urgent".into(),
            color: Some("#EF4444".into()),
        })
        .await
        .unwrap();
    assert_eq!(category.color, "#EF4444");
}

#[tokio::test]
async fn create_with_empty_name_persists_nothing() {
    let (categories, _) = services();

    assert_matches!(
        categories.create(named("")).await,
        Err(AppError::Core(CoreError::NameRequired))
    );
    assert!(categories.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn create_rejects_overlong_name_and_color() {
    let (categories, _) = services();
    assert_matches!(
        categories.create(named(&"n".repeat(101))).await,
        Err(AppError::Core(CoreError::Validation(_)))
    );
    assert_matches!(
        categories
            .create(CreateCategory {
                name: "Ok".into(),
                color: Some("c".repeat(21)),
            })
            .await,
        Err(AppError::Core(CoreError::Validation(_)))
    );
}

#[tokio::test]
async fn list_is_ordered_by_name() {
    let (categories, _) = services();
    for name in ["Work", "Errands", "Home"] {
        categories.create(named(name)).await.unwrap();
    }

    let names: Vec<_> = categories
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(names, ["Errands", "Home", "Work"]);
}

#[tokio::test]
async fn update_changes_only_supplied_fields() {
    let (categories, _) = services();
    let category = categories
        .create(CreateCategory {
            name: "Work".into(),
            color: Some("#10B981".into()),
        })
        .await
        .unwrap();

    let renamed = categories
        .update(
            category.id,
            UpdateCategory {
                name: Some("Office".into()),
                color: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(renamed.name, "Office");
    assert_eq!(renamed.color, "#10B981");
    assert!(renamed.updated_at >= category.updated_at);
}

#[tokio::test]
async fn update_with_empty_color_resets_default() {
    let (categories, _) = services();
    let category = categories
        .create(CreateCategory {
            name: "Work".into(),
            color: Some("#10B981".into()),
        })
        .await
        .unwrap();

    let reset = categories
        .update(
            category.id,
            UpdateCategory {
                name: None,
                color: Some(String::new()),
            },
        )
        .await
        .unwrap();

    assert_eq!(reset.color, "#3B82F6");
}

#[tokio::test]
async fn update_with_empty_name_is_rejected() {
    let (categories, _) = services();
    let category = categories.create(named("Work")).await.unwrap();

    assert_matches!(
        categories
            .update(
                category.id,
                UpdateCategory {
                    name: Some(String::new()),
                    color: None,
                },
            )
            .await,
        Err(AppError::Core(CoreError::NameRequired))
    );
}

#[tokio::test]
async fn missing_category_is_not_found() {
    let (categories, _) = services();

    assert_matches!(
        categories.get(999).await,
        Err(AppError::Core(CoreError::NotFound { entity: "category", id: 999 }))
    );
    assert_matches!(
        categories.update(999, UpdateCategory::default()).await,
        Err(AppError::Core(CoreError::NotFound { .. }))
    );
    assert_matches!(
        categories.delete(999).await,
        Err(AppError::Core(CoreError::NotFound { .. }))
    );
}

#[tokio::test]
async fn get_reports_storage_failure_as_not_found() {
    let categories = CategoryService::new(Arc::new(common::FailingStore));

    assert_matches!(
        categories.get(5).await,
        Err(AppError::Core(CoreError::NotFound { entity: "category", id: 5 }))
    );
}

#[tokio::test]
async fn delete_detaches_todos() {
    let (categories, todos) = services();
    let category = categories.create(named("Home")).await.unwrap();
    let todo = todos
        .create(CreateTodo {
            title: "Dishes".into(),
            category_id: Some(category.id),
            ..CreateTodo::default()
        })
        .await
        .unwrap();

    categories.delete(category.id).await.unwrap();

    let reloaded = todos.get(todo.id).await.unwrap();
    assert_eq!(reloaded.category_id, None);
    assert!(reloaded.category.is_none());
    assert_matches!(
        categories.get(category.id).await,
        Err(AppError::Core(CoreError::NotFound { .. }))
    );
}
