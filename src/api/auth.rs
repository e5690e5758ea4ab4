//! Auth API
//!
//! Credential endpoints plus the Google Identity hand-off.

use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::{parse, url, ApiError};
use crate::models::{AuthResponse, MessageResponse};

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct SignupArgs<'a> {
    pub name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
struct GoogleArgs<'a> {
    #[serde(rename = "idToken")]
    id_token: &'a str,
}

#[derive(Serialize)]
struct SendResetOtpArgs<'a> {
    email: &'a str,
}

#[derive(Serialize)]
pub struct ResetPasswordArgs<'a> {
    pub email: &'a str,
    pub otp: &'a str,
    #[serde(rename = "newPassword")]
    pub new_password: &'a str,
}

// ========================
// Requests
// ========================

pub async fn signup(args: &SignupArgs<'_>) -> Result<MessageResponse, ApiError> {
    let response = Request::post(&url("/auth/signup")).json(args)?.send().await?;
    parse(response).await
}

pub async fn login(args: &LoginArgs<'_>) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&url("/auth/login")).json(args)?.send().await?;
    parse(response).await
}

/// Forward a Google ID token; the response is handled like a password login
pub async fn google_login(id_token: &str) -> Result<AuthResponse, ApiError> {
    let response = Request::post(&url("/auth/google"))
        .json(&GoogleArgs { id_token })?
        .send()
        .await?;
    parse(response).await
}

pub async fn send_reset_otp(email: &str) -> Result<MessageResponse, ApiError> {
    let response = Request::post(&url("/auth/send-reset-otp"))
        .json(&SendResetOtpArgs { email })?
        .send()
        .await?;
    parse(response).await
}

pub async fn reset_password(args: &ResetPasswordArgs<'_>) -> Result<MessageResponse, ApiError> {
    let response = Request::post(&url("/auth/reset-password"))
        .json(args)?
        .send()
        .await?;
    parse(response).await
}

// Google Identity Services shim, installed by index.html. Resolves with
// the raw ID token once the user finishes the popup flow.
#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "itaskAuth"], js_name = requestGoogleCredential, catch)]
    pub async fn request_google_credential() -> Result<JsValue, JsValue>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn google_args_use_the_wire_field_name() {
        let json = serde_json::to_string(&GoogleArgs { id_token: "tok" }).expect("serialize");
        assert_eq!(json, r#"{"idToken":"tok"}"#);
    }

    #[test]
    fn reset_args_rename_new_password() {
        let args = ResetPasswordArgs {
            email: "a@b.com",
            otp: "123456",
            new_password: "Abcdef1!",
        };
        let json = serde_json::to_string(&args).expect("serialize");
        assert_eq!(
            json,
            r#"{"email":"a@b.com","otp":"123456","newPassword":"Abcdef1!"}"#
        );
    }

    #[test]
    fn signup_args_serialize_all_fields() {
        let args = SignupArgs {
            name: "Ada",
            email: "a@b.com",
            password: "Abcdef1!",
        };
        let json = serde_json::to_string(&args).expect("serialize");
        assert_eq!(
            json,
            r#"{"name":"Ada","email":"a@b.com","password":"Abcdef1!"}"#
        );
    }
}
