//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` entity struct returned to clients
//! - A `Deserialize` create DTO as sent by clients
//! - A `Deserialize` update DTO with presence-aware fields for patches
//! - A validated insert payload handed to the repositories

pub mod category;
pub mod todo;
