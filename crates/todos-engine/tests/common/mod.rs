use std::collections::HashMap;

use todos_core::auth::{hash_password_with_cost, UserDirectory};
use todos_core_types::Sensitive;
use todos_engine::commands::Method;
use todos_engine::{Backend, Response, Session, TodoApp};
use todos_store::users::insert_user;
use todos_store::SqliteStore;

pub const USERNAME: &str = "alice";
pub const PASSWORD: &str = "secret";

fn alice_hash() -> String {
    hash_password_with_cost(&Sensitive::from(PASSWORD), 4).unwrap()
}

/// Relational app over an in-memory database with `alice` provisioned
#[allow(dead_code)]
pub fn relational_app() -> TodoApp {
    let store = SqliteStore::open_in_memory().unwrap();
    insert_user(store.connection(), USERNAME, &alice_hash()).unwrap();
    TodoApp::new(Backend::Relational(store))
}

/// Session-memory app knowing `alice`
#[allow(dead_code)]
pub fn session_app() -> TodoApp {
    let mut users = UserDirectory::new();
    users.insert(USERNAME, alice_hash());
    TodoApp::new(Backend::SessionMemory(users))
}

#[allow(dead_code)]
pub fn form(fields: &[(&str, &str)]) -> HashMap<String, String> {
    fields
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[allow(dead_code)]
pub fn get(app: &mut TodoApp, session: &mut Session, path: &str) -> Response {
    app.dispatch(session, Method::Get, path, &HashMap::new())
}

#[allow(dead_code)]
pub fn post(
    app: &mut TodoApp,
    session: &mut Session,
    path: &str,
    fields: &[(&str, &str)],
) -> Response {
    app.dispatch(session, Method::Post, path, &form(fields))
}

/// A session already signed in as `alice`, with the welcome flash consumed
#[allow(dead_code)]
pub fn signed_in(app: &mut TodoApp) -> Session {
    let mut session = Session::new();
    let response = post(
        app,
        &mut session,
        "/users/signin",
        &[("username", USERNAME), ("password", PASSWORD)],
    );
    assert_eq!(response, Response::Redirect("/lists".to_string()));
    session.state.drain_flash();
    session
}

/// Create a list through the request layer and return its id
#[allow(dead_code)]
pub fn create_list(app: &mut TodoApp, session: &mut Session, title: &str) -> i64 {
    let response = post(app, session, "/lists", &[("todoListTitle", title)]);
    assert_eq!(response, Response::Redirect("/lists".to_string()));
    session.state.drain_flash();

    match get(app, session, "/lists") {
        Response::Render(todos_engine::View::Lists { lists, .. }) => {
            lists
                .iter()
                .find(|summary| summary.list.title == title)
                .expect("created list should be listed")
                .list
                .id
        }
        other => panic!("unexpected response: {:?}", other),
    }
}
