//! iTask Frontend App
//!
//! Root component: provides the session, store and toast contexts, then
//! routes between the public screens and the guarded ones.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use leptos_toast::{create_toasts, toast_error, use_toasts, Toaster};
use reactive_stores::Store;

use crate::models::Role;
use crate::pages::{AdminPage, HomePage, LandingPage, LoginPage, ResetPasswordPage, TodosPage};
use crate::session::{use_session, SessionStore};
use crate::store::{store_reset, AppState};

#[component]
pub fn App() -> impl IntoView {
    let session = SessionStore::load();
    let store = Store::new(AppState::default());
    provide_context(session);
    provide_context(create_toasts());
    provide_context(store);

    // Cached account data dies with the session. Every sign-out path,
    // guard clears and expiry included, funnels through this signal.
    Effect::new(move |_| {
        if session.get().is_none() {
            store_reset(&store);
        }
    });

    view! {
        <Router>
            <Toaster/>
            <Routes fallback=|| view! { <Redirect path="/"/> }>
                <Route path=path!("/") view=LandingPage/>
                <Route path=path!("/login") view=LoginPage/>
                <Route path=path!("/reset-password") view=ResetPasswordPage/>
                <Route path=path!("/home") view=|| view! { <RequireAuth><HomePage/></RequireAuth> }/>
                <Route path=path!("/todo") view=|| view! { <RequireAuth><TodosPage/></RequireAuth> }/>
                <Route
                    path=path!("/admin")
                    view=|| view! { <RequireAdmin><AdminPage/></RequireAdmin> }
                />
            </Routes>
        </Router>
    }
}

/// Renders its children only while a session is live, otherwise bounces
/// to login. Reacts to the session signal, so a mid-session 401 clears
/// the screen on its own.
#[component]
fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    view! {
        <Show
            when=move || session.get().is_some()
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}

/// Admin-only wrapper. A signed-in non-admin is signed out with an
/// explanation before the bounce.
#[component]
fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();

    Effect::new(move |_| {
        if let Some(role) = session.role() {
            if !role.is_admin() {
                toast_error(toasts, "Unauthorized! Admin access required");
                session.clear();
            }
        }
    });

    view! {
        <Show
            when=move || session.role().is_some_and(Role::is_admin)
            fallback=|| view! { <Redirect path="/login"/> }
        >
            {children()}
        </Show>
    }
}
