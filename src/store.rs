//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{AdminStats, FeedbackEntry, TodoItem, UserRecord};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The signed-in user's todo list
    pub todos: Vec<TodoItem>,
    /// Admin console: all accounts
    pub users: Vec<UserRecord>,
    /// Admin console: all feedback rows
    pub feedbacks: Vec<FeedbackEntry>,
    /// Admin console: dashboard counters
    pub stats: AdminStats,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the todo collection wholesale after a fetch
pub fn store_replace_todos(store: &AppStore, todos: Vec<TodoItem>) {
    store.todos().set(todos);
}

/// Append a server-confirmed todo
pub fn store_add_todo(store: &AppStore, todo: TodoItem) {
    store.todos().write().push(todo);
}

/// Patch a todo in place by id, keeping the local selection flag
pub fn store_patch_todo(store: &AppStore, updated: TodoItem) {
    store.todos().write().iter_mut()
        .find(|todo| todo.id == updated.id)
        .map(|todo| {
            let selected = todo.selected;
            *todo = updated;
            todo.selected = selected;
        });
}

/// Overwrite just the title (the edit endpoint returns an empty body)
pub fn store_set_todo_title(store: &AppStore, id: &str, title: &str) {
    store.todos().write().iter_mut()
        .find(|todo| todo.id == id)
        .map(|todo| todo.title = title.to_string());
}

/// Remove a todo from the store by id
pub fn store_remove_todo(store: &AppStore, id: &str) {
    store.todos().write().retain(|todo| todo.id != id);
}

/// Flip one selection checkbox
pub fn store_toggle_selected(store: &AppStore, id: &str) {
    store.todos().write().iter_mut()
        .find(|todo| todo.id == id)
        .map(|todo| todo.selected = !todo.selected);
}

/// Select or deselect every todo at once; never touches the server
pub fn store_select_all(store: &AppStore, selected: bool) {
    store.todos().write().iter_mut()
        .for_each(|todo| todo.selected = selected);
}

/// Ids of the selected todos in display order, the bulk-delete call order
pub fn selected_todo_ids(todos: &[TodoItem]) -> Vec<String> {
    todos
        .iter()
        .filter(|todo| todo.selected)
        .map(|todo| todo.id.clone())
        .collect()
}

/// Replace the admin user list after a fetch
pub fn store_replace_users(store: &AppStore, users: Vec<UserRecord>) {
    store.users().set(users);
}

/// Replace the admin feedback list after a fetch
pub fn store_replace_feedbacks(store: &AppStore, feedbacks: Vec<FeedbackEntry>) {
    store.feedbacks().set(feedbacks);
}

/// Replace the dashboard counters after a fetch
pub fn store_set_stats(store: &AppStore, stats: AdminStats) {
    store.stats().set(stats);
}

/// Drop every account-scoped collection. Runs when the session ends so
/// nothing fetched for one account is ever shown to the next.
pub fn store_reset(store: &AppStore) {
    store.todos().set(Vec::new());
    store.users().set(Vec::new());
    store.feedbacks().set(Vec::new());
    store.stats().set(AdminStats::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;

    fn todo(id: &str, title: &str, selected: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            title: title.to_string(),
            completed: false,
            selected,
        }
    }

    #[test]
    fn patch_keeps_local_selection() {
        let store = Store::new(AppState::default());
        store_add_todo(&store, todo("a", "Buy milk", true));
        store_patch_todo(
            &store,
            TodoItem {
                id: "a".to_string(),
                title: "Buy milk".to_string(),
                completed: true,
                selected: false,
            },
        );
        let todos = store.todos().get_untracked();
        assert!(todos[0].completed);
        assert!(todos[0].selected, "server patch must not clear the checkbox");
    }

    #[test]
    fn set_title_touches_only_the_target() {
        let store = Store::new(AppState::default());
        store_add_todo(&store, todo("a", "Buy milk", false));
        store_add_todo(&store, todo("b", "Walk dog", false));
        store_set_todo_title(&store, "b", "Walk the dog");
        let todos = store.todos().get_untracked();
        assert_eq!(todos[0].title, "Buy milk");
        assert_eq!(todos[1].title, "Walk the dog");
    }

    #[test]
    fn select_all_then_none_is_pure_local_state() {
        let store = Store::new(AppState::default());
        store_add_todo(&store, todo("a", "One", false));
        store_add_todo(&store, todo("b", "Two", false));
        store_select_all(&store, true);
        assert!(store.todos().get_untracked().iter().all(|t| t.selected));
        store_select_all(&store, false);
        assert!(store.todos().get_untracked().iter().all(|t| !t.selected));
    }

    #[test]
    fn selected_ids_follow_display_order() {
        let todos = vec![
            todo("a", "One", true),
            todo("b", "Two", false),
            todo("c", "Three", true),
        ];
        assert_eq!(selected_todo_ids(&todos), vec!["a", "c"]);
    }

    #[test]
    fn bulk_delete_failure_partway_leaves_the_rest() {
        // Deletes are issued in plan order and applied per success, so a
        // failure at item k leaves items 1..k-1 gone and k..N present.
        let store = Store::new(AppState::default());
        store_add_todo(&store, todo("a", "One", true));
        store_add_todo(&store, todo("b", "Two", true));
        store_add_todo(&store, todo("c", "Three", true));
        let plan = selected_todo_ids(&store.todos().get_untracked());
        assert_eq!(plan.len(), 3);

        // First two calls succeed, third fails before removal
        store_remove_todo(&store, &plan[0]);
        store_remove_todo(&store, &plan[1]);

        let left: Vec<String> = store
            .todos()
            .get_untracked()
            .iter()
            .map(|t| t.id.clone())
            .collect();
        assert_eq!(left, vec!["c"]);
    }

    #[test]
    fn toggle_selected_flips_one_row() {
        let store = Store::new(AppState::default());
        store_add_todo(&store, todo("a", "One", false));
        store_add_todo(&store, todo("b", "Two", false));
        store_toggle_selected(&store, "b");
        let todos = store.todos().get_untracked();
        assert!(!todos[0].selected);
        assert!(todos[1].selected);
    }

    #[test]
    fn reset_leaves_nothing_for_the_next_account() {
        let store = Store::new(AppState::default());
        store_add_todo(&store, todo("a", "Buy milk", true));
        store_replace_users(
            &store,
            vec![UserRecord {
                id: "u1".to_string(),
                name: "Ada".to_string(),
                email: "a@b.com".to_string(),
                role: Role::Admin,
            }],
        );
        store_replace_feedbacks(
            &store,
            vec![FeedbackEntry {
                id: "f1".to_string(),
                user: None,
                name: Some("Ada".to_string()),
                email: None,
                rating: 4,
                feedback: Some("Nice".to_string()),
                suggestion: None,
            }],
        );
        store_set_stats(
            &store,
            AdminStats {
                total_users: 2,
                total_admins: 1,
                total_feedbacks: 1,
                avg_rating: 4.0,
            },
        );

        store_reset(&store);

        assert!(store.todos().get_untracked().is_empty());
        assert!(store.users().get_untracked().is_empty());
        assert!(store.feedbacks().get_untracked().is_empty());
        assert_eq!(store.stats().get_untracked(), AdminStats::default());
    }
}
