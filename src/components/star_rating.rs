//! Star Rating Components
//!
//! Five-star picker for the feedback form, plus a read-only row for
//! the admin table.

use leptos::prelude::*;

/// Clickable 1..5 picker bound to a rating signal
#[component]
pub fn StarRating(rating: RwSignal<u8>) -> impl IntoView {
    view! {
        <div class="star-row">
            {(1..=5u8)
                .map(|star| {
                    view! {
                        <button
                            type="button"
                            class=move || {
                                if star <= rating.get() { "star selected" } else { "star" }
                            }
                            on:click=move |_| rating.set(star)
                        >
                            {move || if star <= rating.get() { "★" } else { "☆" }}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Fixed display with an `n/5` caption
#[component]
pub fn StarDisplay(rating: u8) -> impl IntoView {
    view! {
        <span class="star-row">
            {(1..=5u8)
                .map(|star| {
                    view! {
                        <span class=if star <= rating {
                            "star selected"
                        } else {
                            "star"
                        }>"★"</span>
                    }
                })
                .collect_view()}
            <span class="star-count">{format!("{}/5", rating)}</span>
        </span>
    }
}
