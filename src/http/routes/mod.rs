//! Route handlers and shared response helpers

pub mod lists;
pub mod todos;

use std::sync::Arc;

use axum::http::header::{HeaderMap, SET_COOKIE};
use axum::response::{AppendHeaders, Html, IntoResponse, Redirect, Response};
use axum::Router;

use super::flash;
use super::server::AppState;

/// All application routes.
pub fn router() -> Router<Arc<AppState>> {
    Router::new().merge(lists::router()).merge(todos::router())
}

/// The front-end JS marks its requests with this header.
pub(crate) fn is_ajax(headers: &HeaderMap) -> bool {
    headers
        .get("x-requested-with")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("xmlhttprequest"))
}

/// Render a page, expiring any flash cookies it displayed.
pub(crate) fn page(body: String) -> Response {
    let [success, error] = flash::expire_both();
    (
        AppendHeaders([(SET_COOKIE, success), (SET_COOKIE, error)]),
        Html(body),
    )
        .into_response()
}

/// Redirect after a successful mutation, carrying a success flash.
pub(crate) fn redirect_success(path: &str, message: &str) -> Response {
    (
        AppendHeaders([(SET_COOKIE, flash::set_success(message))]),
        Redirect::to(path),
    )
        .into_response()
}

/// Redirect carrying an error flash.
pub(crate) fn redirect_error(path: &str, message: &str) -> Response {
    (
        AppendHeaders([(SET_COOKIE, flash::set_error(message))]),
        Redirect::to(path),
    )
        .into_response()
}

/// Standard response when a path names a list that does not exist.
pub(crate) fn list_not_found() -> Response {
    redirect_error("/lists", "The specified list was not found.")
}
