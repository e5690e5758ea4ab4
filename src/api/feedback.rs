//! Feedback API
//!
//! The create endpoint is public, no bearer token involved.

use gloo_net::http::Request;
use serde::Serialize;

use super::{parse, url, ApiError};
use crate::models::MessageResponse;

#[derive(Serialize)]
pub struct FeedbackArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub rating: u8,
    pub feedback: &'a str,
}

pub async fn create_feedback(args: &FeedbackArgs<'_>) -> Result<MessageResponse, ApiError> {
    let response = Request::post(&url("/feedback/create"))
        .json(args)?
        .send()
        .await?;
    parse(response).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feedback_body_carries_all_four_fields() {
        let args = FeedbackArgs {
            name: "Ada",
            email: "a@b.com",
            rating: 4,
            feedback: "More filters please",
        };
        let json = serde_json::to_string(&args).expect("serialize");
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"a@b.com","rating":4,"feedback":"More filters please"}"#
        );
    }
}
