//! Login Page
//!
//! Signup and login share one card and swap with the mode toggle.
//! Also hosts the Google hand-off and the forgot-password link.
//! A signed-in visitor is bounced straight to their landing page.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_navigate;
use leptos_toast::{toast_error, toast_success, use_toasts, Toasts};

use crate::api::{self, LoginArgs, SignupArgs};
use crate::models::{AuthResponse, Session};
use crate::pages::Page;
use crate::session::{use_session, SessionStore};
use crate::validate;

/// Which face of the auth card is showing
#[derive(Clone, Copy, PartialEq)]
enum AuthMode {
    Signup,
    Login,
}

impl AuthMode {
    fn heading(self) -> &'static str {
        match self {
            AuthMode::Signup => "Create account",
            AuthMode::Login => "Login account!",
        }
    }

    fn subtitle(self) -> &'static str {
        match self {
            AuthMode::Signup => "Create your account",
            AuthMode::Login => "Login your account!",
        }
    }

    fn submit_label(self) -> &'static str {
        match self {
            AuthMode::Signup => "Signup",
            AuthMode::Login => "Login",
        }
    }
}

/// Store the session and announce the outcome of a credential exchange.
/// Password and Google logins both land here.
fn apply_auth_response(session: SessionStore, toasts: Toasts, response: AuthResponse) {
    match (response.token, response.user) {
        (Some(token), Some(user)) => {
            let (role, user) = user.into_parts();
            toast_success(toasts, "Login Success ✅");
            session.set(Session { token, role, user });
        }
        _ => {
            let message = if response.message.is_empty() {
                "Login failed - No token received".to_string()
            } else {
                response.message
            };
            toast_error(toasts, message);
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    view! {
        <Show
            when=move || session.get().is_none()
            fallback=move || {
                let target = session
                    .role()
                    .map(Page::post_login)
                    .unwrap_or(Page::Home)
                    .path();
                view! { <Redirect path=target/> }
            }
        >
            <AuthCard/>
        </Show>
    }
}

#[component]
fn AuthCard() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let (mode, set_mode) = signal(AuthMode::Signup);
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (busy, set_busy) = signal(false);

    let reset_fields = move || {
        set_name.set(String::new());
        set_email.set(String::new());
        set_password.set(String::new());
    };

    let switch_mode = move |next: AuthMode| {
        if busy.get() {
            return;
        }
        if next == AuthMode::Signup {
            reset_fields();
        }
        set_mode.set(next);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        match mode.get() {
            AuthMode::Signup => {
                let name_value = name.get();
                let email_value = email.get();
                let password_value = password.get();
                if let Err(message) = validate::signup(&name_value, &email_value, &password_value)
                {
                    toast_error(toasts, message);
                    return;
                }
                set_busy.set(true);
                spawn_local(async move {
                    let args = SignupArgs {
                        name: name_value.trim(),
                        email: &email_value,
                        password: &password_value,
                    };
                    let result = api::signup(&args).await;
                    set_busy.set(false);
                    match result {
                        Ok(_) => {
                            toast_success(toasts, "Signup Success ✅");
                            reset_fields();
                            set_mode.set(AuthMode::Login);
                        }
                        Err(err) => {
                            toast_error(toasts, err.server_message().unwrap_or("Signup failed"));
                        }
                    }
                });
            }
            AuthMode::Login => {
                let email_value = email.get();
                let password_value = password.get();
                set_busy.set(true);
                spawn_local(async move {
                    let args = LoginArgs {
                        email: &email_value,
                        password: &password_value,
                    };
                    let result = api::login(&args).await;
                    set_busy.set(false);
                    match result {
                        Ok(response) => apply_auth_response(session, toasts, response),
                        Err(err) => {
                            log::error!("login failed: {err}");
                            toast_error(
                                toasts,
                                err.server_message()
                                    .unwrap_or("Login failed. Please try again."),
                            );
                        }
                    }
                });
            }
        }
    };

    let google_sign_in = move |_| {
        if busy.get() {
            return;
        }
        set_busy.set(true);
        spawn_local(async move {
            let credential = api::request_google_credential().await;
            let Ok(credential) = credential else {
                set_busy.set(false);
                toast_error(toasts, "Google sign-in was cancelled");
                return;
            };
            let Some(id_token) = credential.as_string() else {
                set_busy.set(false);
                toast_error(toasts, "Google sign-in was cancelled");
                return;
            };
            let result = api::google_login(&id_token).await;
            set_busy.set(false);
            match result {
                Ok(response) => apply_auth_response(session, toasts, response),
                Err(err) => {
                    log::error!("google login failed: {err}");
                    toast_error(
                        toasts,
                        err.server_message()
                            .unwrap_or("Login failed. Please try again."),
                    );
                }
            }
        });
    };

    let brand_nav = navigate.clone();
    let forgot = move |_| {
        if !busy.get() {
            navigate(Page::ResetPassword.path(), Default::default());
        }
    };

    view! {
        <div class="auth-screen">
            <span class="brand auth-brand" on:click=move |_| brand_nav("/", Default::default())>
                "iTask"
            </span>
            <div class="auth-card">
                <h2 class="auth-title">{move || mode.get().heading()}</h2>
                <p class="auth-subtitle">{move || mode.get().subtitle()}</p>

                <form on:submit=submit novalidate=true>
                    <Show when=move || mode.get() == AuthMode::Signup>
                        <input
                            class="auth-input"
                            type="text"
                            placeholder="Full Name"
                            autocomplete="off"
                            prop:value=name
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            prop:disabled=busy
                        />
                    </Show>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email address"
                        autocomplete="off"
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                        prop:disabled=busy
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="off"
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        prop:disabled=busy
                    />

                    <p class="auth-link" on:click=forgot>
                        "Forgot Password?"
                    </p>

                    <button type="submit" class="btn-primary auth-submit" prop:disabled=busy>
                        {move || if busy.get() { "Processing..." } else { mode.get().submit_label() }}
                    </button>
                </form>

                <button
                    type="button"
                    class="btn-google"
                    on:click=google_sign_in
                    prop:disabled=busy
                >
                    "Continue with Google"
                </button>

                <Show
                    when=move || mode.get() == AuthMode::Signup
                    fallback=move || {
                        view! {
                            <p class="auth-switch">
                                "Don't have an account? "
                                <span
                                    class="auth-switch-link"
                                    on:click=move |_| switch_mode(AuthMode::Signup)
                                >
                                    "Sign up"
                                </span>
                            </p>
                        }
                    }
                >
                    <p class="auth-switch">
                        "Already have an account? "
                        <span
                            class="auth-switch-link"
                            on:click=move |_| switch_mode(AuthMode::Login)
                        >
                            "Login here"
                        </span>
                    </p>
                </Show>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_labels_follow_the_active_face() {
        assert_eq!(AuthMode::Signup.heading(), "Create account");
        assert_eq!(AuthMode::Signup.subtitle(), "Create your account");
        assert_eq!(AuthMode::Signup.submit_label(), "Signup");
        assert_eq!(AuthMode::Login.heading(), "Login account!");
        assert_eq!(AuthMode::Login.subtitle(), "Login your account!");
        assert_eq!(AuthMode::Login.submit_label(), "Login");
    }
}
