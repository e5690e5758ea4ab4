//! Task Navbar Component
//!
//! Top bar for signed-in screens. Logout is only requested here, the
//! owning screen runs it through its confirmation gate. Admins get an
//! extra link to the console.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::models::Role;
use crate::session::use_session;

#[component]
pub fn TaskNavbar(#[prop(into)] on_logout_request: Callback<()>) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let pathname = location.pathname;
    let navigate = use_navigate();
    let go_home = navigate.clone();
    let go_brand = navigate.clone();
    let admin_nav = navigate.clone();
    let go_tasks = navigate;

    let link_class = move |path: &'static str| {
        if pathname.get() == path {
            "nav-link active"
        } else {
            "nav-link"
        }
    };

    view! {
        <nav class="task-nav">
            <span class="brand" on:click=move |_| go_brand("/home", Default::default())>
                "iTask"
            </span>
            <ul class="nav-links">
                <li
                    class=move || link_class("/home")
                    on:click=move |_| go_home("/home", Default::default())
                >
                    "Home"
                </li>
                <li
                    class=move || link_class("/todo")
                    on:click=move |_| go_tasks("/todo", Default::default())
                >
                    "Your Tasks"
                </li>
                <Show when=move || session.role().is_some_and(Role::is_admin)>
                    {
                        let go_admin = admin_nav.clone();
                        view! {
                            <li
                                class=move || link_class("/admin")
                                on:click=move |_| go_admin("/admin", Default::default())
                            >
                                "Admin"
                            </li>
                        }
                    }
                </Show>
            </ul>
            <button class="btn-danger" on:click=move |_| on_logout_request.run(())>
                "Logout"
            </button>
        </nav>
    }
}
