//! Repository implementations for database access
//!
//! Every statement is parameterized via binds. List-name uniqueness is
//! enforced by the DB constraint and surfaced as [`DbError::DuplicateListName`].

pub mod lists;
pub mod todos;

pub use lists::ListRepo;
pub use todos::TodoRepo;

/// Database error type shared by the repositories.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("database error: {0}")]
    Sqlx(sqlx::Error),

    #[error("a list named '{name}' already exists")]
    DuplicateListName { name: String },
}

impl From<sqlx::Error> for DbError {
    fn from(e: sqlx::Error) -> Self {
        Self::Sqlx(e)
    }
}

/// Map a sqlx error to `DuplicateListName` when it is a unique violation.
fn map_unique_violation(e: sqlx::Error, name: &str) -> DbError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => DbError::DuplicateListName {
            name: name.to_owned(),
        },
        _ => DbError::Sqlx(e),
    }
}
