//! Confirm Modal Component
//!
//! Reusable modal gate for destructive actions. Each screen owns one
//! `ConfirmState` and routes every dangerous click through it.

use leptos::prelude::*;

/// A destructive action waiting for the user's yes/no
#[derive(Clone, Debug, PartialEq)]
pub struct PendingAction<A> {
    pub title: &'static str,
    pub confirm_label: &'static str,
    pub message: String,
    pub action: A,
}

/// Holds at most one pending action. Requesting a confirmation while one
/// is pending replaces it, there is no queue.
pub struct ConfirmState<A: Send + Sync + 'static> {
    pending: RwSignal<Option<PendingAction<A>>>,
}

impl<A: Send + Sync + 'static> Clone for ConfirmState<A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: Send + Sync + 'static> Copy for ConfirmState<A> {}

impl<A: Clone + Send + Sync + 'static> ConfirmState<A> {
    pub fn new() -> Self {
        Self {
            pending: RwSignal::new(None),
        }
    }

    pub fn request(
        &self,
        title: &'static str,
        confirm_label: &'static str,
        message: impl Into<String>,
        action: A,
    ) {
        self.pending.set(Some(PendingAction {
            title,
            confirm_label,
            message: message.into(),
            action,
        }));
    }

    pub fn is_open(&self) -> bool {
        self.pending.with(Option::is_some)
    }

    pub fn title(&self) -> &'static str {
        self.pending.with(|p| p.as_ref().map(|p| p.title).unwrap_or(""))
    }

    pub fn confirm_label(&self) -> &'static str {
        self.pending
            .with(|p| p.as_ref().map(|p| p.confirm_label).unwrap_or("Confirm"))
    }

    pub fn message(&self) -> String {
        self.pending
            .with(|p| p.as_ref().map(|p| p.message.clone()).unwrap_or_default())
    }

    /// Close the gate and hand back the confirmed action
    pub fn take(&self) -> Option<A> {
        self.pending
            .try_update(|pending| pending.take().map(|p| p.action))
            .flatten()
    }

    pub fn cancel(&self) {
        self.pending.set(None);
    }
}

/// Overlay rendered while a confirmation is pending. Cancel closes the
/// gate here, confirm is left to the owning screen via the callback.
#[component]
pub fn ConfirmModal<A: Clone + Send + Sync + 'static>(
    state: ConfirmState<A>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || state.is_open()>
            <div class="modal-overlay">
                <div class="modal-card">
                    <h2 class="modal-title">{move || state.title()}</h2>
                    <p class="modal-message">{move || state.message()}</p>
                    <div class="modal-actions">
                        <button class="btn-danger" on:click=move |_| on_confirm.run(())>
                            {move || state.confirm_label()}
                        </button>
                        <button class="btn-muted" on:click=move |_| state.cancel()>
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_nothing_to_take() {
        let state: ConfirmState<u32> = ConfirmState::new();
        assert!(!state.is_open());
        assert_eq!(state.take(), None);
    }

    #[test]
    fn request_opens_and_take_hands_back_the_action() {
        let state: ConfirmState<u32> = ConfirmState::new();
        state.request("Confirm Delete", "Yes, Delete", "Delete item 7?", 7);
        assert!(state.is_open());
        assert_eq!(state.title(), "Confirm Delete");
        assert_eq!(state.message(), "Delete item 7?");
        assert_eq!(state.take(), Some(7));
        assert!(!state.is_open());
    }

    #[test]
    fn cancel_discards_the_pending_action() {
        let state: ConfirmState<u32> = ConfirmState::new();
        state.request("Confirm Delete", "Yes, Delete", "Delete item 7?", 7);
        state.cancel();
        assert!(!state.is_open());
        assert_eq!(state.take(), None);
    }

    #[test]
    fn requesting_again_overwrites_the_held_target() {
        let state: ConfirmState<u32> = ConfirmState::new();
        state.request("Confirm Delete", "Yes, Delete", "Delete item 7?", 7);
        state.request("Confirm Delete", "Yes, Delete", "Delete item 9?", 9);
        assert_eq!(state.message(), "Delete item 9?");
        assert_eq!(state.take(), Some(9));
        assert_eq!(state.take(), None, "overwritten target must not linger");
    }
}
