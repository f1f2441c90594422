//! HTTP layer - axum server, routes, flash messages, HTML rendering

pub mod error;
pub mod flash;
pub mod render;
pub mod routes;
pub mod server;

pub use error::AppError;
pub use server::{run_server, AppState, ServerConfig};
