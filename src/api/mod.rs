//! Backend API Client
//!
//! REST bindings organized by domain. Every call resolves to a typed
//! response or an `ApiError`; a 401 gets its own variant so callers can
//! apply the session-expiry policy uniformly.

mod admin;
mod auth;
mod feedback;
mod todos;

use gloo_net::http::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::config;
use crate::models::MessageResponse;

// Re-export all public items
pub use admin::*;
pub use auth::*;
pub use feedback::*;
pub use todos::*;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Fetch(#[from] gloo_net::Error),
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unauthorized")]
    Unauthorized,
    #[error("server returned status {status}")]
    Server { status: u16, message: Option<String> },
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized)
    }

    /// Message the backend attached to a failure, if it sent one
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ApiError::Server { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub(crate) fn url(path: &str) -> String {
    format!("{}{}", config::api_base_url(), path)
}

pub(crate) fn authorize(builder: RequestBuilder, token: &str) -> RequestBuilder {
    builder.header("Authorization", &format!("Bearer {}", token))
}

/// Decode a JSON body after the status checks
pub(crate) async fn parse<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let response = check_status(response).await?;
    let body = response.text().await?;
    Ok(serde_json::from_str(&body)?)
}

/// Status checks only, body ignored
pub(crate) async fn parse_ok(response: Response) -> Result<(), ApiError> {
    check_status(response).await.map(|_| ())
}

async fn check_status(response: Response) -> Result<Response, ApiError> {
    if response.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| serde_json::from_str::<MessageResponse>(&body).ok())
        .map(|m| m.message)
        .filter(|m| !m.is_empty());
    Err(ApiError::Server { status, message })
}
