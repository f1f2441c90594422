//! Server-rendered HTML pages
//!
//! Small functions building page strings; all user-supplied text goes
//! through [`escape`]. Display ordering puts incomplete items before
//! complete ones, keeping the storage order within each group.

use std::fmt::Write;

use crate::http::flash::Flash;
use crate::models::{ListSummary, TodoList};

/// Escape text for placement in HTML element or attribute content.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Reorder items so incomplete ones come first, preserving relative
/// order inside each group.
pub fn incomplete_first<T>(items: Vec<T>, is_complete: impl Fn(&T) -> bool) -> Vec<T> {
    let (complete, mut incomplete): (Vec<T>, Vec<T>) = items.into_iter().partition(is_complete);
    incomplete.extend(complete);
    incomplete
}

fn layout(title: &str, flash: &Flash, content: &str) -> String {
    let mut banners = String::new();
    if let Some(msg) = &flash.error {
        let _ = write!(banners, "<div class=\"flash error\">{}</div>\n", escape(msg));
    }
    if let Some(msg) = &flash.success {
        let _ = write!(
            banners,
            "<div class=\"flash success\">{}</div>\n",
            escape(msg)
        );
    }

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
</head>
<body>
<header><h2><a href="/lists">Todo Tracker</a></h2></header>
{banners}<main>
{content}</main>
<script src="/assets/app.js"></script>
</body>
</html>
"#,
        title = escape(title),
    )
}

/// GET /lists
pub fn lists_page(flash: &Flash, lists: Vec<ListSummary>) -> String {
    let lists = incomplete_first(lists, ListSummary::is_complete);

    let mut content = String::from("<h3>Lists</h3>\n<ul class=\"lists\">\n");
    for list in &lists {
        let class = if list.is_complete() { " class=\"complete\"" } else { "" };
        let _ = write!(
            content,
            "<li{class}><a href=\"/lists/{id}\">{name}</a> <span>{remaining} / {total}</span></li>\n",
            id = list.id,
            name = escape(&list.name),
            remaining = list.todos_remaining_count,
            total = list.todos_count,
        );
    }
    content.push_str("</ul>\n<p><a href=\"/lists/new\">New List</a></p>\n");

    layout("All Lists", flash, &content)
}

/// GET /lists/{id}
pub fn list_page(flash: &Flash, list: &TodoList) -> String {
    let mut content = String::new();
    let _ = write!(
        content,
        "<h3>{name}</h3>\n<p><a href=\"/lists/{id}/edit\">Edit List</a></p>\n",
        name = escape(&list.name),
        id = list.id,
    );

    if !list.todos.is_empty() && !list.is_complete() {
        let _ = write!(
            content,
            "<form action=\"/lists/{id}/complete_all\" method=\"post\">\
             <button type=\"submit\">Complete All</button></form>\n",
            id = list.id,
        );
    }

    content.push_str("<ul class=\"todos\">\n");
    let todos = incomplete_first(list.todos.clone(), |t| t.completed);
    for todo in &todos {
        let class = if todo.completed { " class=\"complete\"" } else { "" };
        let (next_status, toggle_label) = if todo.completed {
            ("false", "Undo")
        } else {
            ("true", "Complete")
        };
        let _ = write!(
            content,
            "<li{class}>\
             <form action=\"/lists/{list_id}/todos/{todo_id}\" method=\"post\" class=\"toggle\">\
             <input type=\"hidden\" name=\"completed\" value=\"{next_status}\">\
             <button type=\"submit\">{toggle_label}</button></form> \
             <span>{name}</span> \
             <form action=\"/lists/{list_id}/todos/{todo_id}/destroy\" method=\"post\" class=\"delete\">\
             <button type=\"submit\">Delete</button></form>\
             </li>\n",
            list_id = list.id,
            todo_id = todo.id,
            name = escape(&todo.name),
        );
    }
    content.push_str("</ul>\n");

    let _ = write!(
        content,
        "<form action=\"/lists/{id}/todos\" method=\"post\">\
         <input type=\"text\" name=\"todo\" placeholder=\"Something to do\">\
         <button type=\"submit\">Add</button></form>\n",
        id = list.id,
    );

    layout(&list.name, flash, &content)
}

/// GET /lists/new - `value` preserves the submitted name on error.
pub fn new_list_page(flash: &Flash, value: &str) -> String {
    let content = format!(
        "<h3>New List</h3>\n\
         <form action=\"/lists\" method=\"post\">\
         <input type=\"text\" name=\"list_name\" value=\"{value}\" placeholder=\"List name\">\
         <button type=\"submit\">Save</button></form>\n",
        value = escape(value),
    );

    layout("New List", flash, &content)
}

/// GET /lists/{id}/edit - rename form plus the list delete button.
pub fn edit_list_page(flash: &Flash, list_id: i32, value: &str) -> String {
    let content = format!(
        "<h3>Edit List</h3>\n\
         <form action=\"/lists/{id}\" method=\"post\">\
         <input type=\"text\" name=\"list_name\" value=\"{value}\">\
         <button type=\"submit\">Save</button></form>\n\
         <form action=\"/lists/{id}/destroy\" method=\"post\" class=\"delete\">\
         <button type=\"submit\">Delete List</button></form>\n",
        id = list_id,
        value = escape(value),
    );

    layout("Edit List", flash, &content)
}

/// Generic 500 page. The real error only goes to the log.
pub fn error_page() -> String {
    layout(
        "Something went wrong",
        &Flash::default(),
        "<p>Something went wrong. Please try again.</p>\n",
    )
}
