//! todos-server: database-backed todo list manager
//!
//! Serves an HTML front end over two Postgres tables (lists, todos).
//! The storage gateway lives in [`db`], typed records and validation in
//! [`models`], and the axum handlers in [`http`].

pub mod db;
pub mod http;
pub mod models;

pub use http::{run_server, ServerConfig};
