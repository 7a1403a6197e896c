//! Domain services.
//!
//! Services own the business rules (validation, defaults, partial-update
//! merging, existence checks) and talk to storage only through the
//! repository traits, so they run unchanged over PostgreSQL or the
//! in-memory store.

pub mod category;
pub mod todo;

pub use category::CategoryService;
pub use todo::{TodoListQuery, TodoService};
