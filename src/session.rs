//! Session Store
//!
//! Single owner of the signed-in state. Restored from browser storage at
//! startup, and every token/role/user read or write goes through here so
//! the three can never diverge.

use gloo_storage::{LocalStorage, Storage};
use leptos::prelude::*;
use leptos_toast::{toast_error, Toasts};

use crate::api::ApiError;
use crate::models::{Role, Session, User};

const TOKEN_KEY: &str = "token";
const ROLE_KEY: &str = "role";
const USER_KEY: &str = "user";

/// Reactive handle to the current session, provided via context
#[derive(Clone, Copy)]
pub struct SessionStore {
    session: RwSignal<Option<Session>>,
}

impl SessionStore {
    /// Restore from persisted storage. Partial leftovers (a token without
    /// a role, or the reverse) are dropped and wiped, never surfaced.
    pub fn load() -> Self {
        let token = LocalStorage::get::<String>(TOKEN_KEY).ok();
        let role = LocalStorage::get::<Role>(ROLE_KEY).ok();
        let user = LocalStorage::get::<User>(USER_KEY).ok();
        let session = combine(token, role, user);
        if session.is_none() {
            clear_storage();
        }
        Self {
            session: RwSignal::new(session),
        }
    }

    pub fn get(&self) -> Option<Session> {
        self.session.get()
    }

    pub fn role(&self) -> Option<Role> {
        self.session.with(|s| s.as_ref().map(|s| s.role))
    }

    pub fn token(&self) -> Option<String> {
        self.session.with(|s| s.as_ref().map(|s| s.token.clone()))
    }

    pub fn user(&self) -> Option<User> {
        self.session.with(|s| s.as_ref().map(|s| s.user.clone()))
    }

    /// Persist and publish a fresh session, storage and signal together
    pub fn set(&self, session: Session) {
        let _ = LocalStorage::set(TOKEN_KEY, &session.token);
        let _ = LocalStorage::set(ROLE_KEY, session.role);
        let _ = LocalStorage::set(USER_KEY, &session.user);
        self.session.set(Some(session));
    }

    /// Drop the session everywhere. Route guards watching the signal
    /// redirect to login on their own.
    pub fn clear(&self) {
        clear_storage();
        self.session.set(None);
    }
}

/// Fetch the `SessionStore` provided by the application root
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Universal 401 handling: clear the session and tell the user why.
/// Redirecting is left to the route guards reacting to the cleared signal.
pub fn expire_session(session: SessionStore, toasts: Toasts) {
    session.clear();
    toast_error(toasts, "Session expired. Please login again.");
}

/// Failure policy shared by every authenticated call: a 401 expires the
/// session, anything else logs the error and toasts the fallback message.
/// Returns true when the session was expired so sequenced loads can stop.
pub fn handle_api_error(
    session: SessionStore,
    toasts: Toasts,
    err: &ApiError,
    fallback: &'static str,
) -> bool {
    if err.is_unauthorized() {
        expire_session(session, toasts);
        true
    } else {
        log::error!("{fallback} {err}");
        toast_error(toasts, fallback);
        false
    }
}

fn clear_storage() {
    LocalStorage::delete(TOKEN_KEY);
    LocalStorage::delete(ROLE_KEY);
    LocalStorage::delete(USER_KEY);
}

/// Token, role and user only form a session when all three are present
fn combine(token: Option<String>, role: Option<Role>, user: Option<User>) -> Option<Session> {
    match (token, role, user) {
        (Some(token), Some(role), Some(user)) => Some(Session { token, role, user }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> User {
        User {
            name: "Ada".to_string(),
            email: "a@b.com".to_string(),
        }
    }

    #[test]
    fn combine_requires_all_three_parts() {
        let session = combine(Some("t1".to_string()), Some(Role::User), Some(user()))
            .expect("complete parts form a session");
        assert_eq!(session.token, "t1");
        assert_eq!(session.role, Role::User);
        assert_eq!(session.user.email, "a@b.com");
    }

    #[test]
    fn combine_drops_partial_state() {
        assert!(combine(Some("t1".to_string()), None, Some(user())).is_none());
        assert!(combine(None, Some(Role::Admin), Some(user())).is_none());
        assert!(combine(Some("t1".to_string()), Some(Role::User), None).is_none());
        assert!(combine(None, None, None).is_none());
    }
}
