//! Sort options for todo listings.
//!
//! Sort keys arrive as free-form query strings; they are mapped onto a closed
//! set here so the repository never interpolates client text into SQL.

/// Column a todo listing can be ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    Id,
    Title,
    Priority,
    Completed,
    DueDate,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Map a `sort_by` query value. Unknown values yield `None`.
    pub fn from_param(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "id" => Some(Self::Id),
            "title" => Some(Self::Title),
            "priority" => Some(Self::Priority),
            "completed" => Some(Self::Completed),
            "due_date" => Some(Self::DueDate),
            "created_at" => Some(Self::CreatedAt),
            "updated_at" => Some(Self::UpdatedAt),
            _ => None,
        }
    }

    /// Resolve an optional `sort_by`, falling back to `created_at`.
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(Self::from_param).unwrap_or_default()
    }
}

/// Direction of a listing. Descending unless asked otherwise.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Resolve an optional `sort_order` (`asc`/`desc`, any case).
    pub fn resolve(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_field_falls_back_to_created_at() {
        assert_eq!(SortField::resolve(None), SortField::CreatedAt);
        assert_eq!(SortField::resolve(Some("name; DROP TABLE todos")), SortField::CreatedAt);
    }

    #[test]
    fn known_fields_are_case_insensitive() {
        assert_eq!(SortField::resolve(Some("Title")), SortField::Title);
        assert_eq!(SortField::resolve(Some("due_date")), SortField::DueDate);
    }

    #[test]
    fn order_defaults_to_desc() {
        assert_eq!(SortOrder::resolve(None), SortOrder::Desc);
        assert_eq!(SortOrder::resolve(Some("sideways")), SortOrder::Desc);
        assert_eq!(SortOrder::resolve(Some("ASC")), SortOrder::Asc);
        assert_eq!(SortOrder::resolve(Some("asc")), SortOrder::Asc);
    }
}
