//! Admin Page
//!
//! Three-tab console: dashboard counters, user management, feedback
//! management. Row data lives in the shared store; all destructive
//! actions run through one confirmation gate, and a failed fetch keeps
//! whatever is already on screen.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::{toast_success, use_toasts};

use crate::api;
use crate::components::{ConfirmModal, ConfirmState, StarDisplay, StatsCard};
use crate::models::Role;
use crate::session::{handle_api_error, use_session};
use crate::store::{
    store_replace_feedbacks, store_replace_users, store_set_stats, use_app_store,
    AppStateStoreFields,
};

#[derive(Clone, Copy, PartialEq)]
enum AdminTab {
    Dashboard,
    Users,
    Feedback,
}

impl AdminTab {
    const ALL: [AdminTab; 3] = [AdminTab::Dashboard, AdminTab::Users, AdminTab::Feedback];

    fn label(self) -> &'static str {
        match self {
            AdminTab::Dashboard => "Dashboard",
            AdminTab::Users => "Users",
            AdminTab::Feedback => "Feedback",
        }
    }
}

/// Destructive actions funneled through the console's confirmation gate
#[derive(Clone, PartialEq)]
enum AdminAction {
    SetRole { id: String, role: Role },
    DeleteUser { id: String },
    DeleteFeedback { id: String },
    Logout,
}

#[component]
fn AdminNavbar(
    tab: ReadSignal<AdminTab>,
    set_tab: WriteSignal<AdminTab>,
    #[prop(into)] on_logout_request: Callback<()>,
) -> impl IntoView {
    view! {
        <nav class="admin-nav">
            <div class="admin-tabs">
                {AdminTab::ALL
                    .iter()
                    .map(|&t| {
                        view! {
                            <button
                                class=move || {
                                    if tab.get() == t { "admin-tab active" } else { "admin-tab" }
                                }
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="admin-nav-right">
                <span class="admin-role">
                    "Role: " <span class="admin-role-badge">"Admin"</span>
                </span>
                <button class="btn-danger" on:click=move |_| on_logout_request.run(())>
                    "Logout"
                </button>
            </div>
        </nav>
    }
}

#[component]
pub fn AdminPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let store = use_app_store();

    let confirm: ConfirmState<AdminAction> = ConfirmState::new();
    let (tab, set_tab) = signal(AdminTab::Dashboard);
    let (loading, set_loading) = signal(true);

    let refresh_users = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::list_users(&token).await {
                Ok(users) => store_replace_users(&store, users),
                Err(err) => {
                    handle_api_error(session, toasts, &err, "Failed to fetch users");
                }
            }
        });
    };

    let refresh_feedbacks = move || {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::list_feedbacks(&token).await {
                Ok(feedbacks) => store_replace_feedbacks(&store, feedbacks),
                Err(err) => {
                    handle_api_error(session, toasts, &err, "Failed to fetch feedbacks");
                }
            }
        });
    };

    // One sequential load on entry: stats, then users, then feedbacks.
    // A 401 anywhere aborts the rest; other failures toast and move on.
    Effect::new(move |_| {
        let Some(token) = session.token() else {
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            match api::fetch_stats(&token).await {
                Ok(stats) => store_set_stats(&store, stats),
                Err(err) => {
                    if handle_api_error(session, toasts, &err, "Failed to fetch stats") {
                        set_loading.set(false);
                        return;
                    }
                }
            }
            match api::list_users(&token).await {
                Ok(users) => store_replace_users(&store, users),
                Err(err) => {
                    if handle_api_error(session, toasts, &err, "Failed to fetch users") {
                        set_loading.set(false);
                        return;
                    }
                }
            }
            match api::list_feedbacks(&token).await {
                Ok(feedbacks) => store_replace_feedbacks(&store, feedbacks),
                Err(err) => {
                    if handle_api_error(session, toasts, &err, "Failed to fetch feedbacks") {
                        set_loading.set(false);
                        return;
                    }
                }
            }
            set_loading.set(false);
        });
    });

    let request_role_change = move |id: String, role: Role| {
        confirm.request(
            "Confirm Role Change",
            "Yes, Change",
            format!(
                "Are you sure you want to change this user's role to {}?",
                role.as_str()
            ),
            AdminAction::SetRole { id, role },
        );
    };

    let request_delete_user = move |id: String, name: String| {
        confirm.request(
            "Confirm Delete",
            "Yes, Delete",
            format!(
                "Are you sure you want to delete user \"{}\"? This action cannot be undone.",
                name
            ),
            AdminAction::DeleteUser { id },
        );
    };

    let request_delete_feedback = move |id: String| {
        confirm.request(
            "Confirm Delete",
            "Yes, Delete",
            "Are you sure you want to delete this feedback?",
            AdminAction::DeleteFeedback { id },
        );
    };

    let request_logout = move |_: ()| {
        confirm.request(
            "Confirm Logout",
            "Yes, Logout",
            "Are you sure you want to logout?",
            AdminAction::Logout,
        );
    };

    let run_confirmed = move |_: ()| {
        let Some(action) = confirm.take() else {
            return;
        };
        match action {
            AdminAction::SetRole { id, role } => {
                let Some(token) = session.token() else {
                    return;
                };
                spawn_local(async move {
                    match api::update_user_role(&token, &id, role).await {
                        Ok(()) => {
                            toast_success(toasts, "Role updated successfully ✅");
                            refresh_users();
                        }
                        Err(err) => {
                            handle_api_error(session, toasts, &err, "Failed to update role ❌");
                        }
                    }
                });
            }
            AdminAction::DeleteUser { id } => {
                let Some(token) = session.token() else {
                    return;
                };
                spawn_local(async move {
                    match api::delete_user(&token, &id).await {
                        Ok(()) => {
                            toast_success(toasts, "User deleted successfully ✅");
                            refresh_users();
                            refresh_feedbacks();
                        }
                        Err(err) => {
                            handle_api_error(session, toasts, &err, "Failed to delete user ❌");
                        }
                    }
                });
            }
            AdminAction::DeleteFeedback { id } => {
                let Some(token) = session.token() else {
                    return;
                };
                spawn_local(async move {
                    match api::delete_feedback(&token, &id).await {
                        Ok(()) => {
                            toast_success(toasts, "Feedback deleted successfully ✅");
                            refresh_feedbacks();
                        }
                        Err(err) => {
                            handle_api_error(session, toasts, &err, "Failed to delete feedback ❌");
                        }
                    }
                });
            }
            AdminAction::Logout => {
                session.clear();
                toast_success(toasts, "Logged out successfully");
            }
        }
    };

    view! {
        <div class="admin-page">
            <AdminNavbar tab=tab set_tab=set_tab on_logout_request=request_logout/>

            <div class="admin-body">
                <Show
                    when=move || !loading.get()
                    fallback=|| {
                        view! {
                            <div class="admin-loading">
                                <div class="spinner"></div>
                                <p>"Loading admin data..."</p>
                            </div>
                        }
                    }
                >
                    <Show when=move || tab.get() == AdminTab::Dashboard>
                        <h1 class="admin-heading">"Admin Dashboard"</h1>
                        <div class="stats-grid">
                            <StatsCard
                                title="Total Users"
                                value=Signal::derive(move || {
                                    store.stats().get().total_users.to_string()
                                })
                            />
                            <StatsCard
                                title="Total Admins"
                                value=Signal::derive(move || {
                                    store.stats().get().total_admins.to_string()
                                })
                            />
                            <StatsCard
                                title="Total Feedbacks"
                                value=Signal::derive(move || {
                                    store.stats().get().total_feedbacks.to_string()
                                })
                            />
                            <StatsCard
                                title="Avg Rating"
                                value=Signal::derive(move || store.stats().get().avg_rating_label())
                            />
                        </div>
                    </Show>

                    <Show when=move || tab.get() == AdminTab::Users>
                        <div class="admin-section-head">
                            <h1 class="admin-heading">"Users Management"</h1>
                            <span class="admin-count">
                                {move || format!("Total: {} users", store.users().with(Vec::len))}
                            </span>
                        </div>
                        <div class="admin-table-wrap">
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"Name"</th>
                                        <th>"Email"</th>
                                        <th>"Role"</th>
                                        <th>"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || store.users().with(Vec::is_empty)>
                                        <tr>
                                            <td colspan="4" class="empty-row">
                                                "No users found"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || store.users().get()
                                        key=|user| (user.id.clone(), user.role)
                                        children=move |user| {
                                            let toggle_id = user.id.clone();
                                            let delete_id = user.id.clone();
                                            let delete_name = user.name.clone();
                                            let role = user.role;
                                            view! {
                                                <tr>
                                                    <td>{user.name.clone()}</td>
                                                    <td>{user.email.clone()}</td>
                                                    <td>
                                                        <span class=if role.is_admin() {
                                                            "role-badge admin"
                                                        } else {
                                                            "role-badge"
                                                        }>{role.as_str().to_uppercase()}</span>
                                                    </td>
                                                    <td>
                                                        <div class="row-actions">
                                                            <button
                                                                class="btn-primary btn-small"
                                                                on:click=move |_| request_role_change(
                                                                    toggle_id.clone(),
                                                                    role.toggled(),
                                                                )
                                                            >
                                                                {if role.is_admin() { "Make User" } else { "Make Admin" }}
                                                            </button>
                                                            <button
                                                                class="btn-danger btn-small"
                                                                on:click=move |_| request_delete_user(
                                                                    delete_id.clone(),
                                                                    delete_name.clone(),
                                                                )
                                                            >
                                                                "Delete"
                                                            </button>
                                                        </div>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>

                    <Show when=move || tab.get() == AdminTab::Feedback>
                        <div class="admin-section-head">
                            <h1 class="admin-heading">"Feedback Management"</h1>
                            <span class="admin-count">
                                {move || {
                                    format!("Total: {} feedbacks", store.feedbacks().with(Vec::len))
                                }}
                            </span>
                        </div>
                        <div class="admin-table-wrap">
                            <table class="admin-table">
                                <thead>
                                    <tr>
                                        <th>"User"</th>
                                        <th>"Feedback"</th>
                                        <th>"Rating"</th>
                                        <th>"Action"</th>
                                    </tr>
                                </thead>
                                <tbody>
                                    <Show when=move || store.feedbacks().with(Vec::is_empty)>
                                        <tr>
                                            <td colspan="4" class="empty-row">
                                                "No feedbacks found"
                                            </td>
                                        </tr>
                                    </Show>
                                    <For
                                        each=move || store.feedbacks().get()
                                        key=|fb| fb.id.clone()
                                        children=move |fb| {
                                            let delete_id = fb.id.clone();
                                            view! {
                                                <tr>
                                                    <td>
                                                        <div class="feedback-author">
                                                            {fb.author_name().to_string()}
                                                        </div>
                                                        <div class="feedback-email">
                                                            {fb.author_email().to_string()}
                                                        </div>
                                                    </td>
                                                    <td class="feedback-text">{fb.text().to_string()}</td>
                                                    <td>
                                                        <StarDisplay rating=fb.rating/>
                                                    </td>
                                                    <td>
                                                        <button
                                                            class="btn-danger btn-small"
                                                            on:click=move |_| request_delete_feedback(
                                                                delete_id.clone(),
                                                            )
                                                        >
                                                            "Delete"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }
                                    />
                                </tbody>
                            </table>
                        </div>
                    </Show>
                </Show>
            </div>

            <ConfirmModal state=confirm on_confirm=run_confirmed/>
        </div>
    }
}
