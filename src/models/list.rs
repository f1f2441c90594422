//! List records and name validation

use sqlx::FromRow;

use super::todo::Todo;
use super::ValidationError;

/// Accepted length range for list names (in characters)
const NAME_MIN_LEN: usize = 1;
const NAME_MAX_LEN: usize = 100;

/// Validated list name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListName(String);

impl ListName {
    /// Validate a list name: trimmed, 1-100 characters.
    ///
    /// Uniqueness against existing lists is enforced by the database
    /// constraint, not here.
    pub fn new(s: &str) -> Result<Self, ValidationError> {
        let trimmed = s.trim();
        let len = trimmed.chars().count();
        if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
            return Err(ValidationError::LengthOutOfRange {
                field: "List name",
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

impl AsRef<str> for ListName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A list with its todos loaded.
#[derive(Debug, Clone)]
pub struct TodoList {
    pub id: i32,
    pub name: String,
    pub todos: Vec<Todo>,
}

impl TodoList {
    pub fn todos_count(&self) -> usize {
        self.todos.len()
    }

    pub fn todos_remaining_count(&self) -> usize {
        self.todos.iter().filter(|t| !t.completed).count()
    }

    /// A list is complete only when it has todos and none remain.
    pub fn is_complete(&self) -> bool {
        self.todos_count() > 0 && self.todos_remaining_count() == 0
    }
}

/// List row with counts for the index page, one JOIN query away.
#[derive(Debug, Clone, FromRow)]
pub struct ListSummary {
    pub id: i32,
    pub name: String,
    pub todos_count: i64,
    pub todos_remaining_count: i64,
}

impl ListSummary {
    pub fn is_complete(&self) -> bool {
        self.todos_count > 0 && self.todos_remaining_count == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn todo(name: &str, completed: bool) -> Todo {
        Todo {
            id: 1,
            name: name.into(),
            completed,
        }
    }

    #[test]
    fn valid_names() {
        assert!(ListName::new("Groceries").is_ok());
        assert!(ListName::new("a").is_ok());
        assert!(ListName::new(&"x".repeat(100)).is_ok());
    }

    #[test]
    fn rejects_empty_and_whitespace() {
        assert!(ListName::new("").is_err());
        assert!(ListName::new("   ").is_err());
    }

    #[test]
    fn rejects_over_100_chars() {
        let err = ListName::new(&"x".repeat(101)).unwrap_err();
        assert!(matches!(err, ValidationError::LengthOutOfRange { .. }));
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let name = ListName::new("  Groceries  ").unwrap();
        assert_eq!(name.as_str(), "Groceries");
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 100 multibyte characters is still within range
        assert!(ListName::new(&"ä".repeat(100)).is_ok());
    }

    #[test]
    fn empty_list_is_never_complete() {
        let list = TodoList {
            id: 1,
            name: "Empty".into(),
            todos: vec![],
        };
        assert!(!list.is_complete());
    }

    #[test]
    fn list_is_complete_when_nothing_remains() {
        let mut list = TodoList {
            id: 1,
            name: "Chores".into(),
            todos: vec![todo("wash", true), todo("dry", false)],
        };
        assert_eq!(list.todos_remaining_count(), 1);
        assert!(!list.is_complete());

        list.todos[1].completed = true;
        assert_eq!(list.todos_remaining_count(), 0);
        assert!(list.is_complete());
    }

    #[test]
    fn summary_completeness() {
        let empty = ListSummary {
            id: 1,
            name: "Empty".into(),
            todos_count: 0,
            todos_remaining_count: 0,
        };
        assert!(!empty.is_complete());

        let done = ListSummary {
            id: 2,
            name: "Done".into(),
            todos_count: 3,
            todos_remaining_count: 0,
        };
        assert!(done.is_complete());
    }
}
