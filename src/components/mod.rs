//! UI Components
//!
//! Reusable Leptos components.

mod confirm_modal;
mod hero;
mod navbar;
mod star_rating;
mod stats_card;
mod task_navbar;

pub use confirm_modal::{ConfirmModal, ConfirmState};
pub use hero::Hero;
pub use navbar::LandingNavbar;
pub use star_rating::{StarDisplay, StarRating};
pub use stats_card::StatsCard;
pub use task_navbar::TaskNavbar;
