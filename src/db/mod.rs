//! Database layer - connection pool and repositories
//!
//! - Connection pool, scoped-acquired per statement
//! - List queries use JOINs for counts - no N+1
//! - Uniqueness enforced by DB constraint, conflicts mapped to errors
//! - A missing row is a normal "not found" result, not an error

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::create_pool;
pub use repos::*;
