//! Admin API
//!
//! Management endpoints, bearer-authenticated and admin-only server side.

use gloo_net::http::Request;
use serde::Serialize;

use super::{authorize, parse, parse_ok, url, ApiError};
use crate::models::{AdminStats, FeedbackEntry, FeedbacksResponse, Role, UserRecord, UsersResponse};

#[derive(Serialize)]
struct RoleArgs {
    role: Role,
}

fn user_role_path(id: &str) -> String {
    format!("/admin/users/{}/role", id)
}

fn user_path(id: &str) -> String {
    format!("/admin/users/{}", id)
}

fn feedback_path(id: &str) -> String {
    format!("/admin/feedbacks/{}", id)
}

/// The stats endpoint returns the counters as a bare object
pub async fn fetch_stats(token: &str) -> Result<AdminStats, ApiError> {
    let response = authorize(Request::get(&url("/admin/stats")), token)
        .send()
        .await?;
    parse(response).await
}

pub async fn list_users(token: &str) -> Result<Vec<UserRecord>, ApiError> {
    let response = authorize(Request::get(&url("/admin/users")), token)
        .send()
        .await?;
    let body: UsersResponse = parse(response).await?;
    Ok(body.users)
}

pub async fn update_user_role(token: &str, id: &str, role: Role) -> Result<(), ApiError> {
    let response = authorize(Request::patch(&url(&user_role_path(id))), token)
        .json(&RoleArgs { role })?
        .send()
        .await?;
    parse_ok(response).await
}

pub async fn delete_user(token: &str, id: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&url(&user_path(id))), token)
        .send()
        .await?;
    parse_ok(response).await
}

pub async fn list_feedbacks(token: &str) -> Result<Vec<FeedbackEntry>, ApiError> {
    let response = authorize(Request::get(&url("/admin/feedbacks")), token)
        .send()
        .await?;
    let body: FeedbacksResponse = parse(response).await?;
    Ok(body.feedbacks)
}

pub async fn delete_feedback(token: &str, id: &str) -> Result<(), ApiError> {
    let response = authorize(Request::delete(&url(&feedback_path(id))), token)
        .send()
        .await?;
    parse_ok(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_paths_embed_the_id() {
        assert_eq!(user_role_path("u1"), "/admin/users/u1/role");
        assert_eq!(user_path("u1"), "/admin/users/u1");
        assert_eq!(feedback_path("f1"), "/admin/feedbacks/f1");
    }

    #[test]
    fn role_body_serializes_lowercase() {
        let json = serde_json::to_string(&RoleArgs { role: Role::Admin }).expect("serialize");
        assert_eq!(json, r#"{"role":"admin"}"#);
    }
}
