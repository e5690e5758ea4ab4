//! Home Page
//!
//! Signed-in landing screen: product pitch, feature cards, and the
//! feedback modal. Logout runs through the screen's confirmation gate.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_toast::{toast_error, toast_success, use_toasts};

use crate::api::{self, FeedbackArgs};
use crate::components::{ConfirmModal, ConfirmState, StarRating, TaskNavbar};
use crate::pages::Page;
use crate::session::use_session;
use crate::validate;

const FEATURES: &[(&str, &str, &str)] = &[
    ("📝", "Easy Creation", "Create tasks in seconds"),
    ("⚡", "Fast Editing", "Update with one click"),
    ("🎯", "Smart Organization", "Stay focused and productive"),
    ("🚀", "Powerful Tools", "All features you need"),
];

const HIGHLIGHTS: &[(&str, &str)] = &[
    ("1K+", "Active Users"),
    ("10K+", "Tasks Created"),
    ("★ 4.9", "User Rating"),
    ("99%", "Satisfaction"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let navigate = use_navigate();

    let logout_confirm: ConfirmState<()> = ConfirmState::new();
    let (show_feedback, set_show_feedback) = signal(false);
    let rating = RwSignal::new(0u8);
    let (feedback_text, set_feedback_text) = signal(String::new());
    let (submitting, set_submitting) = signal(false);

    let request_logout = move |_: ()| {
        logout_confirm.request(
            "Confirm Logout",
            "Yes, Logout",
            "Are you sure you want to logout?",
            (),
        );
    };

    let run_logout = move |_: ()| {
        if logout_confirm.take().is_some() {
            session.clear();
            toast_success(toasts, "Logged out successfully");
        }
    };

    let submit_feedback = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        let text = match validate::feedback(rating.get(), &feedback_text.get()) {
            Ok(text) => text,
            Err(message) => {
                toast_error(toasts, message);
                return;
            }
        };
        let user = session.user().unwrap_or_default();
        set_submitting.set(true);
        spawn_local(async move {
            let args = FeedbackArgs {
                name: &user.name,
                email: &user.email,
                rating: rating.get_untracked(),
                feedback: &text,
            };
            let result = api::create_feedback(&args).await;
            set_submitting.set(false);
            match result {
                Ok(res) => {
                    let message = if res.message.is_empty() {
                        "Thank you for your feedback! 💖".to_string()
                    } else {
                        res.message
                    };
                    toast_success(toasts, message);
                    rating.set(0);
                    set_feedback_text.set(String::new());
                    set_show_feedback.set(false);
                }
                Err(err) => {
                    toast_error(
                        toasts,
                        err.server_message().unwrap_or("Failed to submit feedback"),
                    );
                }
            }
        });
    };

    view! {
        <div class="home-page">
            <TaskNavbar on_logout_request=request_logout/>

            <div class="home-hero">
                <h1 class="home-title">
                    "Welcome to " <span class="home-title-accent">"iTask"</span>
                </h1>
                <h2 class="home-subtitle">"Your Ultimate Task Management Solution"</h2>
                <p class="home-description">
                    "Organize your life, boost your productivity, and achieve your goals with our powerful task management system."
                </p>

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|(icon, title, blurb)| {
                            view! {
                                <div class="feature-card">
                                    <div class="feature-icon">{*icon}</div>
                                    <h3 class="feature-title">{*title}</h3>
                                    <p class="feature-blurb">{*blurb}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="home-actions">
                    <button
                        class="btn-primary home-cta"
                        on:click=move |_| navigate(Page::Todos.path(), Default::default())
                    >
                        "🚀 Start Managing Tasks"
                    </button>
                    <button
                        class="btn-accent home-cta"
                        on:click=move |_| set_show_feedback.set(true)
                    >
                        "💬 Give Feedback"
                    </button>
                </div>

                <div class="highlight-row">
                    {HIGHLIGHTS
                        .iter()
                        .map(|(value, label)| {
                            view! {
                                <div class="highlight">
                                    <div class="highlight-value">{*value}</div>
                                    <div class="highlight-label">{*label}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || show_feedback.get()>
                <div class="modal-overlay">
                    <div class="modal-card feedback-card">
                        <h2 class="modal-title">"Share Your Feedback"</h2>
                        <p class="modal-message">"We value your opinion! How was your experience?"</p>
                        <form on:submit=submit_feedback>
                            <StarRating rating=rating/>
                            <textarea
                                class="feedback-textarea"
                                rows=4
                                placeholder="What do you think about iTask? Any suggestions?"
                                prop:value=feedback_text
                                on:input=move |ev| set_feedback_text.set(event_target_value(&ev))
                            ></textarea>
                            <div class="modal-actions">
                                <button
                                    type="button"
                                    class="btn-muted"
                                    on:click=move |_| set_show_feedback.set(false)
                                >
                                    "Cancel"
                                </button>
                                <button
                                    type="submit"
                                    class="btn-primary"
                                    prop:disabled=submitting
                                >
                                    {move || if submitting.get() { "Submitting..." } else { "Submit" }}
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            </Show>

            <ConfirmModal state=logout_confirm on_confirm=run_logout/>
        </div>
    }
}
