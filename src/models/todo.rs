//! Todo records and name validation

use sqlx::FromRow;

use super::ValidationError;

const NAME_MIN_LEN: usize = 1;
const NAME_MAX_LEN: usize = 100;

/// Validated todo name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoName(String);

impl TodoName {
    /// Validate a todo name: trimmed, 1-100 characters.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
            return Err(ValidationError::LengthOutOfRange {
                field: "Todo",
                min: NAME_MIN_LEN,
                max: NAME_MAX_LEN,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TodoName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Todo row, owned by exactly one list.
#[derive(Debug, Clone, FromRow)]
pub struct Todo {
    pub id: i32,
    pub name: String,
    pub completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names() {
        assert!(TodoName::new("buy milk").is_ok());
        assert!(TodoName::new(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn rejects_empty() {
        let err = TodoName::new("").unwrap_err();
        assert_eq!(err.to_string(), "Todo must be between 1 and 100 characters.");
    }

    #[test]
    fn rejects_over_100_chars() {
        assert!(TodoName::new(&"x".repeat(101)).is_err());
    }
}
