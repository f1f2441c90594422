//! Todo endpoints: add, toggle, delete, complete-all

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Form, Router};
use serde::Deserialize;

use crate::db::{ListRepo, TodoRepo};
use crate::http::error::AppError;
use crate::http::flash::Flash;
use crate::http::render;
use crate::http::routes::{is_ajax, list_not_found, page, redirect_success};
use crate::http::server::AppState;
use crate::models::TodoName;

/// Form payload for adding a todo.
#[derive(Debug, Deserialize)]
pub struct TodoForm {
    pub todo: String,
}

/// Form payload for toggling completion.
#[derive(Debug, Deserialize)]
pub struct StatusForm {
    pub completed: String,
}

/// POST /lists/{id}/todos - invalid names re-render the list page
async fn create(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    Form(form): Form<TodoForm>,
) -> Result<Response, AppError> {
    let Some(list) = ListRepo::new(&state.pool).find(list_id).await? else {
        return Ok(list_not_found());
    };

    let name = match TodoName::new(&form.todo) {
        Ok(name) => name,
        Err(e) => {
            return Ok(page(render::list_page(&Flash::error(e.to_string()), &list)));
        }
    };

    // The list can vanish between the find above and this insert
    let Some(todo) = TodoRepo::new(&state.pool).create(list_id, &name).await? else {
        return Ok(list_not_found());
    };

    Ok(redirect_success(
        &format!("/lists/{list_id}"),
        &format!("The todo '{}' has been added.", todo.name),
    ))
}

/// POST /lists/{id}/todos/{todo_id} - set completed from the form field
async fn set_status(
    State(state): State<Arc<AppState>>,
    Path((list_id, todo_id)): Path<(i32, i32)>,
    Form(form): Form<StatusForm>,
) -> Result<Response, AppError> {
    let completed = form.completed == "true";

    match TodoRepo::new(&state.pool)
        .set_completed(list_id, todo_id, completed)
        .await?
    {
        Some(todo) => Ok(redirect_success(
            &format!("/lists/{list_id}"),
            &format!("The todo '{}' has been updated.", todo.name),
        )),
        None => Ok(list_not_found()),
    }
}

/// POST /lists/{id}/todos/{todo_id}/destroy
///
/// AJAX callers get 204 with no body; regular form posts get a
/// redirect with a flash.
async fn destroy(
    State(state): State<Arc<AppState>>,
    Path((list_id, todo_id)): Path<(i32, i32)>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let deleted = TodoRepo::new(&state.pool).delete(list_id, todo_id).await?;

    if is_ajax(&headers) {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }

    match deleted {
        Some(todo) => Ok(redirect_success(
            &format!("/lists/{list_id}"),
            &format!("The todo '{}' has been deleted.", todo.name),
        )),
        None => Ok(list_not_found()),
    }
}

/// POST /lists/{id}/complete_all
async fn complete_all(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
) -> Result<Response, AppError> {
    if ListRepo::new(&state.pool).find(list_id).await?.is_none() {
        return Ok(list_not_found());
    }

    TodoRepo::new(&state.pool).complete_all(list_id).await?;

    Ok(redirect_success(
        &format!("/lists/{list_id}"),
        "All todos have been completed.",
    ))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/lists/{list_id}/todos", post(create))
        .route("/lists/{list_id}/todos/{todo_id}", post(set_status))
        .route("/lists/{list_id}/todos/{todo_id}/destroy", post(destroy))
        .route("/lists/{list_id}/complete_all", post(complete_all))
}
