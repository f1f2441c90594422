//! Domain models: lists, todos, and name validation

pub mod list;
pub mod todo;
pub mod validation;

pub use list::{ListName, ListSummary, TodoList};
pub use todo::{Todo, TodoName};
pub use validation::ValidationError;
