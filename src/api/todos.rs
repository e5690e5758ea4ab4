//! Todo API
//!
//! Bearer-authenticated CRUD against the signed-in user's list.

use gloo_net::http::Request;
use serde::Serialize;

use super::{authorize, parse, parse_ok, url, ApiError};
use crate::models::{TodoItem, TodoResponse, TodosResponse};

#[derive(Serialize)]
struct TitleArgs<'a> {
    title: &'a str,
}

#[derive(Serialize)]
struct CompletedArgs {
    completed: bool,
}

fn edit_path(id: &str) -> String {
    format!("/todo/edit/{}", id)
}

fn toggle_path(id: &str) -> String {
    format!("/todo/todos/{}", id)
}

fn delete_path(id: &str) -> String {
    format!("/todo/delete/{}", id)
}

pub async fn list_todos(token: &str) -> Result<Vec<TodoItem>, ApiError> {
    let response = authorize(Request::get(&url("/todo/todos")), token)
        .send()
        .await?;
    let body: TodosResponse = parse(response).await?;
    Ok(body.todos)
}

/// The server assigns the id; the caller appends the returned item
pub async fn add_todo(token: &str, title: &str) -> Result<TodoItem, ApiError> {
    let response = authorize(Request::post(&url("/todo/add")), token)
        .json(&TitleArgs { title })?
        .send()
        .await?;
    let body: TodoResponse = parse(response).await?;
    Ok(body.todo)
}

pub async fn edit_todo(token: &str, id: &str, title: &str) -> Result<(), ApiError> {
    let response = authorize(Request::put(&url(&edit_path(id))), token)
        .json(&TitleArgs { title })?
        .send()
        .await?;
    parse_ok(response).await
}

pub async fn set_todo_completed(
    token: &str,
    id: &str,
    completed: bool,
) -> Result<TodoItem, ApiError> {
    let response = authorize(Request::patch(&url(&toggle_path(id))), token)
        .json(&CompletedArgs { completed })?
        .send()
        .await?;
    let body: TodoResponse = parse(response).await?;
    Ok(body.todo)
}

pub async fn delete_todo(token: &str, id: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&url(&delete_path(id))), token)
        .send()
        .await?;
    parse_ok(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_paths_embed_the_id() {
        assert_eq!(edit_path("abc123"), "/todo/edit/abc123");
        assert_eq!(toggle_path("abc123"), "/todo/todos/abc123");
        assert_eq!(delete_path("abc123"), "/todo/delete/abc123");
    }

    #[test]
    fn title_body_is_a_single_field() {
        let json = serde_json::to_string(&TitleArgs { title: "Buy milk" }).expect("serialize");
        assert_eq!(json, r#"{"title":"Buy milk"}"#);
    }

    #[test]
    fn completed_body_is_a_single_field() {
        let json = serde_json::to_string(&CompletedArgs { completed: true }).expect("serialize");
        assert_eq!(json, r#"{"completed":true}"#);
    }
}
