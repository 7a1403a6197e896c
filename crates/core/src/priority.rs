//! Todo priority levels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Urgency of a todo item. Stored as lowercase text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// All valid priorities, most urgent first.
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// The stored / wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Numeric urgency used for ordering (low = 1, high = 3).
    pub fn rank(self) -> i16 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }

    /// Parse an optional client-supplied priority.
    ///
    /// `None` and the empty string both mean "not supplied".
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>, CoreError> {
        match raw {
            None | Some("") => Ok(None),
            Some(value) => value.parse().map(Some),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(CoreError::InvalidPriority),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_values() {
        for p in Priority::ALL {
            assert_eq!(p.as_str().parse::<Priority>().unwrap(), p);
        }
    }

    #[test]
    fn rejects_unknown_and_mixed_case() {
        assert!(matches!("urgent".parse::<Priority>(), Err(CoreError::InvalidPriority)));
        assert!(matches!("HIGH".parse::<Priority>(), Err(CoreError::InvalidPriority)));
    }

    #[test]
    fn empty_optional_is_absent() {
        assert_eq!(Priority::parse_optional(None).unwrap(), None);
        assert_eq!(Priority::parse_optional(Some("")).unwrap(), None);
        assert_eq!(
            Priority::parse_optional(Some("low")).unwrap(),
            Some(Priority::Low)
        );
    }

    #[test]
    fn default_is_medium() {
        assert_eq!(Priority::default(), Priority::Medium);
    }

    #[test]
    fn rank_orders_by_urgency() {
        assert!(Priority::High.rank() > Priority::Medium.rank());
        assert!(Priority::Medium.rank() > Priority::Low.rank());
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::High).unwrap(), "\"high\"");
    }
}
