//! Query parameter types for API handlers.

use serde::Deserialize;
use todo_core::sorting::{SortField, SortOrder};
use todo_db::models::todo::TodoFilter;

use crate::services::TodoListQuery;

/// Raw `GET /api/todos` query string.
///
/// Every field is kept as a string so malformed numbers and flags can be
/// ignored instead of failing the request. `priority` is an exact-match
/// filter, so an unknown value yields an empty page.
#[derive(Debug, Default, Deserialize)]
pub struct TodoListParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub search: Option<String>,
    pub category_id: Option<String>,
    pub completed: Option<String>,
    pub priority: Option<String>,
    pub sort_by: Option<String>,
    pub sort_order: Option<String>,
}

impl TodoListParams {
    pub fn into_query(self) -> TodoListQuery {
        let filter = TodoFilter {
            search: self.search.filter(|s| !s.is_empty()),
            category_id: parse_lenient(self.category_id.as_deref()),
            completed: parse_lenient(self.completed.as_deref()),
            priority: self.priority.filter(|p| !p.is_empty()),
            sort_by: SortField::resolve(self.sort_by.as_deref()),
            sort_order: SortOrder::resolve(self.sort_order.as_deref()),
        };

        TodoListQuery {
            filter,
            page: parse_lenient(self.page.as_deref()),
            limit: parse_lenient(self.limit.as_deref()),
        }
    }
}

/// Parse a value, treating anything unparsable as absent.
fn parse_lenient<T: std::str::FromStr>(raw: Option<&str>) -> Option<T> {
    raw.and_then(|v| v.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn malformed_numbers_and_flags_are_ignored() {
        let params = TodoListParams {
            page: Some("two".into()),
            limit: Some("-".into()),
            category_id: Some("abc".into()),
            completed: Some("yes".into()),
            ..TodoListParams::default()
        };
        let query = params.into_query();
        assert_eq!(query.page, None);
        assert_eq!(query.limit, None);
        assert_eq!(query.filter.category_id, None);
        assert_eq!(query.filter.completed, None);
    }

    #[test]
    fn well_formed_values_become_a_typed_filter() {
        let params = TodoListParams {
            page: Some("2".into()),
            limit: Some("5".into()),
            search: Some("milk".into()),
            category_id: Some("3".into()),
            completed: Some("true".into()),
            priority: Some("high".into()),
            sort_by: Some("title".into()),
            sort_order: Some("ASC".into()),
        };
        let query = params.into_query();
        assert_eq!(query.page, Some(2));
        assert_eq!(query.limit, Some(5));
        assert_eq!(
            query.filter,
            TodoFilter {
                search: Some("milk".into()),
                category_id: Some(3),
                completed: Some(true),
                priority: Some("high".into()),
                sort_by: SortField::Title,
                sort_order: SortOrder::Asc,
            }
        );
    }

    #[test]
    fn empty_search_and_priority_impose_no_constraint() {
        let params = TodoListParams {
            search: Some(String::new()),
            priority: Some(String::new()),
            ..TodoListParams::default()
        };
        let query = params.into_query();
        assert_eq!(query.filter, TodoFilter::default());
    }

    #[test]
    fn unknown_priority_is_passed_through() {
        let params = TodoListParams {
            priority: Some("urgent".into()),
            ..TodoListParams::default()
        };
        assert_eq!(params.into_query().filter.priority.as_deref(), Some("urgent"));
    }
}
