//! Domain primitives for the todo service.
//!
//! Everything here is pure (no I/O) so it can be shared by the repository
//! layer, the HTTP services, and tests without pulling in a database.

pub mod category;
pub mod error;
pub mod pagination;
pub mod patch;
pub mod priority;
pub mod sorting;
pub mod todo;
pub mod types;
