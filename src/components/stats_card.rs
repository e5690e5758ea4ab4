//! Stats Card Component
//!
//! Single counter tile on the admin dashboard.

use leptos::prelude::*;

#[component]
pub fn StatsCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
) -> impl IntoView {
    view! {
        <div class="stats-card">
            <h2 class="stats-title">{title}</h2>
            <p class="stats-value">{move || value.get()}</p>
        </div>
    }
}
