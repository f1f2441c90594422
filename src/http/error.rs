//! Application error type with IntoResponse
//!
//! Only infrastructure failures land here. Validation problems and
//! missing rows are recovered inside the handlers (error banner or
//! redirect), so they never become error responses.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use crate::db::DbError;

/// Handler error: something the user cannot fix.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Database(#[from] DbError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the actual error, show a generic page
        match &self {
            Self::Database(e) => tracing::error!("database error: {e}"),
        }

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Html(crate::http::render::error_page()),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn database_error_is_500() {
        let err = AppError::Database(DbError::Sqlx(sqlx::Error::PoolClosed));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
