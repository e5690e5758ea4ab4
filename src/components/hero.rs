//! Landing Hero Component
//!
//! Static welcome copy on the public page.

use leptos::prelude::*;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <div class="hero-greeting">
                <h1>"Hello Todo Master"</h1>
                <span class="hero-wave">"👋"</span>
            </div>
            <h2 class="hero-title">
                "Manage Your Daily" <br /> <span class="hero-accent">"Tasks Easily"</span>
            </h2>
            <p class="hero-text">
                "Add, organize, and complete your tasks with our simple todo app."
            </p>
            <div class="hero-stats">
                <div class="hero-stat">
                    <div class="hero-stat-icon">"+"</div>
                    <div class="hero-stat-label">"Add Task"</div>
                </div>
                <div class="hero-stat">
                    <div class="hero-stat-icon">"✓"</div>
                    <div class="hero-stat-label">"Mark Done"</div>
                </div>
                <div class="hero-stat">
                    <div class="hero-stat-icon">"📋"</div>
                    <div class="hero-stat-label">"Organize"</div>
                </div>
            </div>
            <div class="hero-divider"></div>
            <p class="hero-tagline">"Start by adding your first task"</p>
        </div>
    }
}
