//! Validation error types

use std::fmt;

/// Validation error for user-supplied names.
///
/// The `Display` output is shown to the user verbatim in a flash banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name length outside the accepted range
    LengthOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
    },

    /// Another list already uses this name
    DuplicateListName { name: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LengthOutOfRange { field, min, max } => {
                write!(f, "{} must be between {} and {} characters.", field, min, max)
            }
            Self::DuplicateListName { name } => {
                write!(f, "List name must be unique. List '{}' already exists.", name)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::LengthOutOfRange {
            field: "List name",
            min: 1,
            max: 100,
        };
        assert_eq!(
            err.to_string(),
            "List name must be between 1 and 100 characters."
        );

        let err = ValidationError::DuplicateListName {
            name: "Groceries".into(),
        };
        assert_eq!(
            err.to_string(),
            "List name must be unique. List 'Groceries' already exists."
        );
    }
}
