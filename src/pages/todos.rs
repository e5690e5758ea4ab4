//! Todos Page
//!
//! The task editor: fetch on entry, add with a duplicate guard, per-row
//! completion toggle, edit modal, and single or bulk delete behind the
//! confirmation gate. Every mutation waits for the server before it
//! touches local state.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_toast::{toast_error, toast_info, toast_success, toast_warning, use_toasts};

use crate::api;
use crate::components::{ConfirmModal, ConfirmState, TaskNavbar};
use crate::session::{handle_api_error, use_session};
use crate::store::{
    selected_todo_ids, store_add_todo, store_patch_todo, store_remove_todo, store_replace_todos,
    store_select_all, store_set_todo_title, store_toggle_selected, use_app_store,
    AppStateStoreFields,
};
use crate::validate;

/// Destructive actions funneled through the page's confirmation gate
#[derive(Clone, PartialEq)]
enum TodoAction {
    DeleteOne(String),
    DeleteSelected,
    Logout,
}

#[component]
pub fn TodosPage() -> impl IntoView {
    let session = use_session();
    let toasts = use_toasts();
    let store = use_app_store();

    let confirm: ConfirmState<TodoAction> = ConfirmState::new();
    let (draft, set_draft) = signal(String::new());
    let (select_all, set_select_all) = signal(false);

    // Edit modal state
    let (editing, set_editing) = signal(Option::<String>::None);
    let (edit_title, set_edit_title) = signal(String::new());

    // Initial fetch, re-run if the token changes
    Effect::new(move |_| {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::list_todos(&token).await {
                Ok(todos) => store_replace_todos(&store, todos),
                Err(err) => {
                    handle_api_error(session, toasts, &err, "Error fetching todos!");
                }
            }
        });
    });

    let add_todo = move |_| {
        let title = match validate::new_todo_title(&draft.get(), &store.todos().get()) {
            Ok(title) => title,
            Err(message) => {
                toast_error(toasts, message);
                return;
            }
        };
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::add_todo(&token, &title).await {
                Ok(todo) => {
                    store_add_todo(&store, todo);
                    set_draft.set(String::new());
                    toast_success(toasts, "Todo Added Successfully!");
                }
                Err(err) => {
                    handle_api_error(session, toasts, &err, "Error adding todo!");
                }
            }
        });
    };

    let toggle_completed = move |id: String, completed: bool| {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::set_todo_completed(&token, &id, completed).await {
                Ok(updated) => {
                    store_patch_todo(&store, updated);
                    toast_info(toasts, "Todo Updated!");
                }
                Err(err) => {
                    handle_api_error(session, toasts, &err, "Error updating todo!");
                }
            }
        });
    };

    let open_edit = move |id: String, title: String| {
        set_editing.set(Some(id));
        set_edit_title.set(title);
    };

    let close_edit = move || {
        set_editing.set(None);
        set_edit_title.set(String::new());
    };

    let save_edit = move |_| {
        let Some(id) = editing.get() else {
            return;
        };
        let title = match validate::edit_todo_title(&edit_title.get()) {
            Ok(title) => title,
            Err(message) => {
                toast_warning(toasts, message);
                return;
            }
        };
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::edit_todo(&token, &id, &title).await {
                Ok(()) => {
                    store_set_todo_title(&store, &id, &title);
                    close_edit();
                    toast_info(toasts, "Todo Updated!");
                }
                Err(err) => {
                    handle_api_error(session, toasts, &err, "Error updating todo!");
                }
            }
        });
    };

    let delete_one = move |id: String| {
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            match api::delete_todo(&token, &id).await {
                Ok(()) => {
                    store_remove_todo(&store, &id);
                    toast_error(toasts, "Todo Deleted!");
                }
                Err(err) => {
                    handle_api_error(session, toasts, &err, "Error deleting todo!");
                }
            }
        });
    };

    // One delete call per selected id, in display order, each awaited
    // before the next. A failure stops the loop and leaves the rest.
    let delete_selected = move || {
        let plan = selected_todo_ids(&store.todos().get());
        let Some(token) = session.token() else {
            return;
        };
        spawn_local(async move {
            for id in plan {
                match api::delete_todo(&token, &id).await {
                    Ok(()) => store_remove_todo(&store, &id),
                    Err(err) => {
                        handle_api_error(session, toasts, &err, "Error deleting selected todos!");
                        return;
                    }
                }
            }
            set_select_all.set(false);
            toast_error(toasts, "Selected Todos Deleted!");
        });
    };

    let request_delete_one = move |id: String| {
        confirm.request(
            "Confirm Delete",
            "Yes, Delete",
            "Are you sure you want to delete this todo?",
            TodoAction::DeleteOne(id),
        );
    };

    let request_delete_selected = move |_| {
        if selected_todo_ids(&store.todos().get()).is_empty() {
            toast_warning(toasts, "No todos selected!");
            return;
        }
        confirm.request(
            "Confirm Delete",
            "Yes, Delete",
            "Are you sure you want to delete the selected todos?",
            TodoAction::DeleteSelected,
        );
    };

    let request_logout = move |_: ()| {
        confirm.request(
            "Confirm Logout",
            "Yes, Logout",
            "Are you sure you want to logout?",
            TodoAction::Logout,
        );
    };

    let run_confirmed = move |_: ()| match confirm.take() {
        Some(TodoAction::DeleteOne(id)) => delete_one(id),
        Some(TodoAction::DeleteSelected) => delete_selected(),
        Some(TodoAction::Logout) => {
            session.clear();
            toast_success(toasts, "Logged out successfully");
        }
        None => {}
    };

    let toggle_select_all = move |ev: web_sys::Event| {
        let checked = event_target_checked(&ev);
        set_select_all.set(checked);
        store_select_all(&store, checked);
    };

    view! {
        <div class="todos-page">
            <TaskNavbar on_logout_request=request_logout/>

            <div class="todo-panel">
                <h1 class="todo-heading">"iTask - Manage your todos"</h1>

                <div class="add-todo">
                    <h2 class="todo-section-title">"Add a Todo"</h2>
                    <div class="add-todo-row">
                        <input
                            type="text"
                            class="add-todo-input"
                            placeholder="Add a todo"
                            prop:value=draft
                            on:input=move |ev| set_draft.set(event_target_value(&ev))
                        />
                        <button
                            class="btn-primary"
                            prop:disabled=move || draft.get().trim().chars().count() < 3
                            on:click=add_todo
                        >
                            "Save"
                        </button>
                    </div>
                </div>

                <div class="bulk-row">
                    <label class="select-all">
                        <input type="checkbox" prop:checked=select_all on:change=toggle_select_all/>
                        "Select All"
                    </label>
                    <button class="btn-danger" on:click=request_delete_selected>
                        "Delete All"
                    </button>
                </div>

                <h2 class="todo-section-title">"Your Todos"</h2>
                <div class="todo-list">
                    <Show when=move || store.todos().with(|todos| todos.is_empty())>
                        <div class="todo-empty">"No Todos to display"</div>
                    </Show>

                    <For
                        each=move || store.todos().get()
                        key=|todo| (todo.id.clone(), todo.title.clone(), todo.completed, todo.selected)
                        children=move |todo| {
                            let select_id = todo.id.clone();
                            let toggle_id = todo.id.clone();
                            let edit_id = todo.id.clone();
                            let edit_value = todo.title.clone();
                            let delete_id = todo.id.clone();
                            let completed = todo.completed;
                            view! {
                                <div class="todo-row">
                                    <input
                                        type="checkbox"
                                        class="todo-select"
                                        checked=todo.selected
                                        on:change=move |_| store_toggle_selected(&store, &select_id)
                                    />
                                    <input
                                        type="checkbox"
                                        class="todo-done"
                                        checked=completed
                                        on:change=move |_| toggle_completed(toggle_id.clone(), !completed)
                                    />
                                    <span class=if completed {
                                        "todo-title completed"
                                    } else {
                                        "todo-title"
                                    }>{todo.title.clone()}</span>
                                    <div class="todo-actions">
                                        <button
                                            class="btn-icon"
                                            title="Edit"
                                            on:click=move |_| open_edit(
                                                edit_id.clone(),
                                                edit_value.clone(),
                                            )
                                        >
                                            "✎"
                                        </button>
                                        <button
                                            class="btn-icon"
                                            title="Delete"
                                            on:click=move |_| request_delete_one(delete_id.clone())
                                        >
                                            "🗑"
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <Show when=move || editing.get().is_some()>
                <div class="modal-overlay">
                    <div class="modal-card">
                        <h2 class="modal-title">"Edit Todo"</h2>
                        <input
                            type="text"
                            class="modal-input"
                            prop:value=edit_title
                            on:input=move |ev| set_edit_title.set(event_target_value(&ev))
                        />
                        <div class="modal-actions">
                            <button class="btn-primary" on:click=save_edit>
                                "Save"
                            </button>
                            <button class="btn-muted" on:click=move |_| close_edit()>
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>

            <ConfirmModal state=confirm on_confirm=run_confirmed/>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TodoItem;
    use crate::store::AppState;
    use reactive_stores::Store;

    fn todo(id: &str, title: &str, selected: bool) -> TodoItem {
        TodoItem {
            id: id.to_string(),
            title: title.to_string(),
            completed: false,
            selected,
        }
    }

    #[test]
    fn add_guard_checks_against_the_rows_in_the_store() {
        let store = Store::new(AppState::default());
        store_add_todo(&store, todo("a", "Buy milk", false));
        assert_eq!(
            validate::new_todo_title("buy milk", &store.todos().get_untracked()),
            Err("Todo already exists!")
        );
        assert!(validate::new_todo_title("Walk dog", &store.todos().get_untracked()).is_ok());
    }

    #[test]
    fn bulk_plan_comes_from_the_store_selection() {
        let store = Store::new(AppState::default());
        store_add_todo(&store, todo("a", "One", true));
        store_add_todo(&store, todo("b", "Two", false));
        store_add_todo(&store, todo("c", "Three", true));
        assert_eq!(
            selected_todo_ids(&store.todos().get_untracked()),
            vec!["a", "c"]
        );
    }
}
