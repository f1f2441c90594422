//! List endpoints: index, create, show, rename, delete

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::HeaderMap;
use axum::response::{IntoResponse, Redirect, Response};
use axum::routing::{get, post};
use axum::{Form, Router};
use serde::Deserialize;

use crate::db::{DbError, ListRepo};
use crate::http::error::AppError;
use crate::http::flash::Flash;
use crate::http::render;
use crate::http::routes::{is_ajax, list_not_found, page, redirect_success};
use crate::http::server::AppState;
use crate::models::{ListName, ValidationError};

/// Form payload for create and rename.
#[derive(Debug, Deserialize)]
pub struct ListForm {
    pub list_name: String,
}

/// GET /
async fn home() -> Redirect {
    Redirect::to("/lists")
}

/// GET /lists - all lists with counts, incomplete first
async fn index(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let lists = ListRepo::new(&state.pool).all().await?;
    let flash = Flash::from_headers(&headers);
    Ok(page(render::lists_page(&flash, lists)))
}

/// GET /lists/new
async fn new_form(headers: HeaderMap) -> Response {
    let flash = Flash::from_headers(&headers);
    page(render::new_list_page(&flash, ""))
}

/// POST /lists - create a list, re-rendering the form on invalid input
async fn create(
    State(state): State<Arc<AppState>>,
    Form(form): Form<ListForm>,
) -> Result<Response, AppError> {
    let name = match ListName::new(&form.list_name) {
        Ok(name) => name,
        Err(e) => {
            return Ok(page(render::new_list_page(
                &Flash::error(e.to_string()),
                &form.list_name,
            )))
        }
    };

    match ListRepo::new(&state.pool).create(&name).await {
        Ok(_) => Ok(redirect_success("/lists", "The list has been created.")),
        Err(DbError::DuplicateListName { name }) => {
            let e = ValidationError::DuplicateListName { name };
            Ok(page(render::new_list_page(
                &Flash::error(e.to_string()),
                &form.list_name,
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// GET /lists/{id} - a single list with its todos
async fn show(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    match ListRepo::new(&state.pool).find(list_id).await? {
        Some(list) => {
            let flash = Flash::from_headers(&headers);
            Ok(page(render::list_page(&flash, &list)))
        }
        None => Ok(list_not_found()),
    }
}

/// GET /lists/{id}/edit
async fn edit_form(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    match ListRepo::new(&state.pool).find(list_id).await? {
        Some(list) => {
            let flash = Flash::from_headers(&headers);
            Ok(page(render::edit_list_page(&flash, list.id, &list.name)))
        }
        None => Ok(list_not_found()),
    }
}

/// POST /lists/{id} - rename, same validation as create
async fn rename(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    Form(form): Form<ListForm>,
) -> Result<Response, AppError> {
    let name = match ListName::new(&form.list_name) {
        Ok(name) => name,
        Err(e) => {
            return Ok(page(render::edit_list_page(
                &Flash::error(e.to_string()),
                list_id,
                &form.list_name,
            )))
        }
    };

    match ListRepo::new(&state.pool).update_name(list_id, &name).await {
        Ok(true) => Ok(redirect_success(
            &format!("/lists/{list_id}"),
            "The list has been updated.",
        )),
        Ok(false) => Ok(list_not_found()),
        Err(DbError::DuplicateListName { name }) => {
            let e = ValidationError::DuplicateListName { name };
            Ok(page(render::edit_list_page(
                &Flash::error(e.to_string()),
                list_id,
                &form.list_name,
            )))
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /lists/{id}/destroy
///
/// AJAX callers get the redirect target as a plain-text body; regular
/// form posts get a redirect with a flash.
async fn destroy(
    State(state): State<Arc<AppState>>,
    Path(list_id): Path<i32>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let deleted = ListRepo::new(&state.pool).delete(list_id).await?;

    if is_ajax(&headers) {
        return Ok("/lists".into_response());
    }

    match deleted {
        Some(name) => Ok(redirect_success(
            "/lists",
            &format!("The list '{name}' has been deleted."),
        )),
        None => Ok(list_not_found()),
    }
}

/// List routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(home))
        .route("/lists", get(index).post(create))
        .route("/lists/new", get(new_form))
        .route("/lists/{list_id}", get(show).post(rename))
        .route("/lists/{list_id}/edit", get(edit_form))
        .route("/lists/{list_id}/destroy", post(destroy))
}
