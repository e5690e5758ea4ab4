//! Landing Page
//!
//! Public welcome screen shown before login.

use leptos::prelude::*;

use crate::components::{Hero, LandingNavbar};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <LandingNavbar />
            <Hero />
        </div>
    }
}
