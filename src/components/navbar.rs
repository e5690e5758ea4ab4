//! Landing Navbar Component
//!
//! Fixed public top bar: brand plus a login shortcut.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

#[component]
pub fn LandingNavbar() -> impl IntoView {
    let navigate = use_navigate();
    let go_home = navigate.clone();
    view! {
        <nav class="landing-nav">
            <span class="brand" on:click=move |_| go_home("/", Default::default())>
                "iTask"
            </span>
            <button
                class="btn-primary"
                on:click=move |_| navigate("/login", Default::default())
            >
                "Login →"
            </button>
        </nav>
    }
}
