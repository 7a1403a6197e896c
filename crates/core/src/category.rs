//! Validation rules and defaults for categories.

use crate::error::CoreError;

/// Color assigned to categories created without one.
pub const DEFAULT_CATEGORY_COLOR: &str = "#3B82F6";

/// Maximum length of a category name, in characters.
pub const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a stored color string.
pub const MAX_COLOR_LENGTH: usize = 20;

/// Validate a category name (non-empty, <= 100 chars).
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::NameRequired);
    }
    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "category name must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Resolve a client-supplied color; blank means the default color.
pub fn resolve_color(raw: Option<&str>) -> Result<String, CoreError> {
    match raw {
        None | Some("") => Ok(DEFAULT_CATEGORY_COLOR.to_string()),
        Some(color) if color.chars().count() > MAX_COLOR_LENGTH => Err(CoreError::Validation(
            format!("category color must be at most {MAX_COLOR_LENGTH} characters"),
        )),
        Some(color) => Ok(color.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_is_required_error() {
        assert!(matches!(validate_name(""), Err(CoreError::NameRequired)));
    }

    #[test]
    fn long_name_is_rejected() {
        assert!(validate_name(&"n".repeat(100)).is_ok());
        assert!(matches!(
            validate_name(&"n".repeat(101)),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn blank_color_defaults() {
        assert_eq!(resolve_color(None).unwrap(), "#3B82F6");
        assert_eq!(resolve_color(Some("")).unwrap(), "#3B82F6");
    }

    #[test]
    fn explicit_color_is_kept() {
        assert_eq!(resolve_color(Some("#EF4444")).unwrap(), "#EF4444");
    }

    #[test]
    fn overlong_color_is_rejected() {
        assert!(resolve_color(Some(&"#".repeat(21))).is_err());
    }
}
