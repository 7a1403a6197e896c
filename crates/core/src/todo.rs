//! Validation rules and defaults for todo items.

use crate::error::CoreError;
use crate::priority::Priority;

/// Maximum length of a todo title, in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Validate a todo title.
///
/// Only the empty string counts as missing; whitespace is not trimmed.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::TitleRequired);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(CoreError::Validation(format!(
            "todo title must be at most {MAX_TITLE_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Resolve the priority for a new todo, defaulting to medium.
pub fn resolve_priority(raw: Option<&str>) -> Result<Priority, CoreError> {
    Ok(Priority::parse_optional(raw)?.unwrap_or_default())
}
