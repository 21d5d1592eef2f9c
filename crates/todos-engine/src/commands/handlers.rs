//! Request handlers
//!
//! Recoverable conditions (validation, duplicate titles, bad credentials)
//! become flash messages here. Missing lists and todos, and every other
//! failure, are returned as errors for the top-level handler.

use todos_core::errors::{is_duplicate_title_error, Result, TodosError};
use todos_core::model::{ListId, TodoId, TodoList};
use todos_core::ops::TodoStore;
use todos_core::rules::{validate_title, TitleField};
use todos_core_types::Sensitive;

use super::request::Request;
use super::response::{ListSummary, Response, View};
use crate::session::{Flash, SessionState};

pub const SIGN_IN_PATH: &str = "/users/signin";
pub const LISTS_PATH: &str = "/lists";

const MSG_PLEASE_SIGN_IN: &str = "Please sign in.";
const MSG_INVALID_CREDENTIALS: &str = "Invalid credentials.";
const MSG_WELCOME: &str = "Welcome!";
const MSG_LIST_CREATED: &str = "The todo list has been created.";
const MSG_LIST_TITLE_TAKEN: &str = "The todo list title must be unique";
const MSG_RENAME_TITLE_TAKEN: &str = "Todo List title must be unique";
const MSG_RENAME_NAME_TAKEN: &str = "Todo list name must be unique";
const MSG_LIST_UPDATED: &str = "Todo list updated.";
const MSG_LIST_DELETED: &str = "Todo list deleted.";
const MSG_TODO_CREATED: &str = "The todo has been created.";
const MSG_TODO_DELETED: &str = "The todo has been deleted.";
const MSG_ALL_DONE: &str = "All todos have been marked as done.";

fn list_path(list_id: ListId) -> String {
    format!("/lists/{}", list_id)
}

/// Run one request against `store` on behalf of the session in `state`
///
/// # Errors
///
/// `ListNotFound`/`TodoNotFound` when the addressed list or todo does not
/// exist for the signed-in owner; any unexpected store failure.
pub fn handle_request(
    request: Request,
    state: &mut SessionState,
    store: &mut dyn TodoStore,
) -> Result<Response> {
    let owner = match state.owner() {
        Some(owner) => owner.to_string(),
        None if request.requires_auth() => return Ok(Response::redirect(SIGN_IN_PATH)),
        None => String::new(),
    };

    match request {
        Request::Home => Ok(Response::redirect(LISTS_PATH)),
        Request::SignInForm => {
            state.push_flash(Flash::info(MSG_PLEASE_SIGN_IN));
            Ok(render_sign_in(state, String::new()))
        }
        Request::SignIn { username, password } => sign_in(state, store, &username, &password),
        Request::SignOut => {
            state.sign_out();
            Ok(Response::redirect(SIGN_IN_PATH))
        }
        Request::Lists => lists(state, store, &owner),
        Request::NewListForm => Ok(render_new_list(state, String::new())),
        Request::CreateList { title } => create_list(state, store, &owner, title),
        Request::ShowList { list_id } => {
            let list = load_list(store, &owner, list_id)?;
            Ok(render_list(state, store, list))
        }
        Request::EditListForm { list_id } => {
            let list = load_list(store, &owner, list_id)?;
            let title = list.title.clone();
            Ok(render_edit_list(state, list, title))
        }
        Request::RenameList { list_id, title } => rename_list(state, store, &owner, list_id, title),
        Request::DeleteList { list_id } => {
            if !store.delete_list(&owner, list_id)? {
                return Err(TodosError::ListNotFound { list_id });
            }
            state.push_flash(Flash::success(MSG_LIST_DELETED));
            Ok(Response::redirect(LISTS_PATH))
        }
        Request::CreateTodo { list_id, title } => create_todo(state, store, &owner, list_id, title),
        Request::ToggleTodo { list_id, todo_id } => {
            toggle_todo(state, store, &owner, list_id, todo_id)
        }
        Request::DeleteTodo { list_id, todo_id } => {
            load_todo_title(store, &owner, list_id, todo_id)?;
            store.delete_todo(&owner, list_id, todo_id)?;
            state.push_flash(Flash::success(MSG_TODO_DELETED));
            Ok(Response::redirect(list_path(list_id)))
        }
        Request::CompleteAll { list_id } => {
            load_list(store, &owner, list_id)?;
            store.mark_all_done(&owner, list_id)?;
            state.push_flash(Flash::success(MSG_ALL_DONE));
            Ok(Response::redirect(list_path(list_id)))
        }
    }
}

fn load_list(store: &dyn TodoStore, owner: &str, list_id: ListId) -> Result<TodoList> {
    store
        .get_list(owner, list_id)?
        .ok_or(TodosError::ListNotFound { list_id })
}

fn load_todo_title(
    store: &dyn TodoStore,
    owner: &str,
    list_id: ListId,
    todo_id: TodoId,
) -> Result<(String, bool)> {
    store
        .get_todo(owner, list_id, todo_id)?
        .map(|todo| (todo.title, todo.done))
        .ok_or(TodosError::TodoNotFound { list_id, todo_id })
}

/// Validate a submitted title, flashing the failure reason
///
/// `Ok(None)` means the title was rejected and the caller should re-render.
fn validated_title(
    state: &mut SessionState,
    raw: &str,
    field: TitleField,
) -> Result<Option<String>> {
    match validate_title(raw, field) {
        Ok(title) => Ok(Some(title)),
        Err(TodosError::InvalidTitle { reason }) => {
            state.push_flash(Flash::error(reason));
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn render_sign_in(state: &mut SessionState, username: String) -> Response {
    Response::Render(View::SignIn {
        username,
        flash: state.drain_flash(),
    })
}

fn render_new_list(state: &mut SessionState, title: String) -> Response {
    Response::Render(View::NewList {
        title,
        flash: state.drain_flash(),
    })
}

fn render_list(state: &mut SessionState, store: &dyn TodoStore, list: TodoList) -> Response {
    Response::Render(View::List {
        is_done: store.is_list_done(&list),
        has_undone: store.has_undone_todos(&list),
        list,
        flash: state.drain_flash(),
    })
}

fn render_edit_list(state: &mut SessionState, list: TodoList, title: String) -> Response {
    Response::Render(View::EditList {
        list,
        title,
        flash: state.drain_flash(),
    })
}

fn sign_in(
    state: &mut SessionState,
    store: &dyn TodoStore,
    username: &str,
    password: &Sensitive<String>,
) -> Result<Response> {
    let username = username.trim();

    if !store.authenticate(username, password)? {
        state.push_flash(Flash::error(MSG_INVALID_CREDENTIALS));
        return Ok(render_sign_in(state, username.to_string()));
    }

    state.sign_in(username);
    state.push_flash(Flash::success(MSG_WELCOME));
    Ok(Response::redirect(LISTS_PATH))
}

fn lists(state: &mut SessionState, store: &dyn TodoStore, owner: &str) -> Result<Response> {
    let lists = store
        .all_lists(owner)?
        .into_iter()
        .map(|list| {
            let is_done = store.is_list_done(&list);
            ListSummary::new(list, is_done)
        })
        .collect();

    Ok(Response::Render(View::Lists {
        lists,
        flash: state.drain_flash(),
    }))
}

fn create_list(
    state: &mut SessionState,
    store: &mut dyn TodoStore,
    owner: &str,
    raw_title: String,
) -> Result<Response> {
    let Some(title) = validated_title(state, &raw_title, TitleField::List)? else {
        return Ok(render_new_list(state, raw_title));
    };

    match store.create_list(owner, &title) {
        Ok(_) => {
            state.push_flash(Flash::success(MSG_LIST_CREATED));
            Ok(Response::redirect(LISTS_PATH))
        }
        Err(err) if is_duplicate_title_error(&err) => {
            state.push_flash(Flash::error(MSG_LIST_TITLE_TAKEN));
            Ok(Response::redirect("/lists/new"))
        }
        Err(err) => Err(err),
    }
}

fn rename_list(
    state: &mut SessionState,
    store: &mut dyn TodoStore,
    owner: &str,
    list_id: ListId,
    raw_title: String,
) -> Result<Response> {
    let list = load_list(store, owner, list_id)?;

    let Some(title) = validated_title(state, &raw_title, TitleField::List)? else {
        return Ok(render_edit_list(state, list, raw_title));
    };

    if store.exists_list_title(owner, &title)? {
        state.push_flash(Flash::error(MSG_RENAME_TITLE_TAKEN));
        return Ok(render_edit_list(state, list, raw_title));
    }

    match store.rename_list(owner, list_id, &title) {
        Ok(true) => {
            state.push_flash(Flash::success(MSG_LIST_UPDATED));
            Ok(Response::redirect(list_path(list_id)))
        }
        Ok(false) => Err(TodosError::ListNotFound { list_id }),
        Err(err) if is_duplicate_title_error(&err) => {
            state.push_flash(Flash::error(MSG_RENAME_NAME_TAKEN));
            Ok(Response::redirect(list_path(list_id)))
        }
        Err(err) => Err(err),
    }
}

fn create_todo(
    state: &mut SessionState,
    store: &mut dyn TodoStore,
    owner: &str,
    list_id: ListId,
    raw_title: String,
) -> Result<Response> {
    let list = load_list(store, owner, list_id)?;

    let Some(title) = validated_title(state, &raw_title, TitleField::Todo)? else {
        return Ok(render_list(state, store, list));
    };

    store.create_todo(owner, list_id, &title)?;
    state.push_flash(Flash::success(MSG_TODO_CREATED));
    Ok(Response::redirect(list_path(list_id)))
}

fn toggle_todo(
    state: &mut SessionState,
    store: &mut dyn TodoStore,
    owner: &str,
    list_id: ListId,
    todo_id: TodoId,
) -> Result<Response> {
    let (title, done) = load_todo_title(store, owner, list_id, todo_id)?;

    store.set_todo_done(owner, list_id, todo_id, !done)?;
    let message = if done {
        format!("\"{}\" marked as NOT done!", title)
    } else {
        format!("\"{}\" marked done.", title)
    };
    state.push_flash(Flash::success(message));
    Ok(Response::redirect(list_path(list_id)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use todos_core::auth::UserDirectory;
    use todos_core::model::Todo;
    use todos_core::ops::{SessionData, SessionStore};

    /// Session store whose title lookup misses a concurrently taken title
    struct StaleTitleLookup<'a>(SessionStore<'a>);

    impl TodoStore for StaleTitleLookup<'_> {
        fn authenticate(&self, username: &str, password: &Sensitive<String>) -> Result<bool> {
            self.0.authenticate(username, password)
        }

        fn all_lists(&self, owner: &str) -> Result<Vec<TodoList>> {
            self.0.all_lists(owner)
        }

        fn get_list(&self, owner: &str, list_id: ListId) -> Result<Option<TodoList>> {
            self.0.get_list(owner, list_id)
        }

        fn get_todo(&self, owner: &str, list_id: ListId, todo_id: TodoId) -> Result<Option<Todo>> {
            self.0.get_todo(owner, list_id, todo_id)
        }

        fn exists_list_title(&self, _owner: &str, _title: &str) -> Result<bool> {
            Ok(false)
        }

        fn create_list(&mut self, owner: &str, title: &str) -> Result<ListId> {
            self.0.create_list(owner, title)
        }

        fn rename_list(&mut self, owner: &str, list_id: ListId, title: &str) -> Result<bool> {
            self.0.rename_list(owner, list_id, title)
        }

        fn delete_list(&mut self, owner: &str, list_id: ListId) -> Result<bool> {
            self.0.delete_list(owner, list_id)
        }

        fn create_todo(&mut self, owner: &str, list_id: ListId, title: &str) -> Result<TodoId> {
            self.0.create_todo(owner, list_id, title)
        }

        fn delete_todo(&mut self, owner: &str, list_id: ListId, todo_id: TodoId) -> Result<bool> {
            self.0.delete_todo(owner, list_id, todo_id)
        }

        fn set_todo_done(
            &mut self,
            owner: &str,
            list_id: ListId,
            todo_id: TodoId,
            done: bool,
        ) -> Result<bool> {
            self.0.set_todo_done(owner, list_id, todo_id, done)
        }

        fn mark_all_done(&mut self, owner: &str, list_id: ListId) -> Result<usize> {
            self.0.mark_all_done(owner, list_id)
        }
    }

    #[test]
    fn test_rename_rejected_by_store_redirects_to_list() {
        let mut data = SessionData::new();
        let users = UserDirectory::new();
        let mut store = StaleTitleLookup(SessionStore::new(&mut data, &users));
        let groceries = store.create_list("alice", "Groceries").unwrap();
        store.create_list("alice", "Work").unwrap();

        let mut state = SessionState::default();
        state.sign_in("alice");
        let request = Request::RenameList {
            list_id: groceries,
            title: "Work".to_string(),
        };

        let response = handle_request(request, &mut state, &mut store).unwrap();
        assert_eq!(response, Response::redirect(format!("/lists/{}", groceries)));
        assert_eq!(
            state.drain_flash(),
            vec![Flash::error("Todo list name must be unique")]
        );
        assert_eq!(
            store.get_list("alice", groceries).unwrap().unwrap().title,
            "Groceries"
        );
    }
}
