//! Handler output

use serde::Serialize;
use todos_core::model::TodoList;

use crate::session::Flash;

/// Per-list figures shown on the lists overview
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListSummary {
    pub list: TodoList,
    pub count_all: usize,
    pub count_done: usize,
    pub is_done: bool,
}

impl ListSummary {
    pub fn new(list: TodoList, is_done: bool) -> Self {
        Self {
            count_all: list.count_all(),
            count_done: list.count_done(),
            is_done,
            list,
        }
    }
}

/// A page to render, with the data it displays
///
/// Every view carries the flash messages drained from the session when it
/// was rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum View {
    SignIn {
        username: String,
        flash: Vec<Flash>,
    },
    Lists {
        lists: Vec<ListSummary>,
        flash: Vec<Flash>,
    },
    NewList {
        title: String,
        flash: Vec<Flash>,
    },
    List {
        list: TodoList,
        is_done: bool,
        has_undone: bool,
        flash: Vec<Flash>,
    },
    EditList {
        list: TodoList,
        title: String,
        flash: Vec<Flash>,
    },
}

impl View {
    pub fn flash(&self) -> &[Flash] {
        match self {
            View::SignIn { flash, .. }
            | View::Lists { flash, .. }
            | View::NewList { flash, .. }
            | View::List { flash, .. }
            | View::EditList { flash, .. } => flash,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "body", rename_all = "snake_case")]
pub enum Response {
    Render(View),
    Redirect(String),
    Failure { status: u16, message: String },
}

impl Response {
    pub fn redirect(location: impl Into<String>) -> Self {
        Response::Redirect(location.into())
    }

    /// Status line equivalent: 200 for renders, 302 for redirects
    pub fn status(&self) -> u16 {
        match self {
            Response::Render(_) => 200,
            Response::Redirect(_) => 302,
            Response::Failure { status, .. } => *status,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match self {
            Response::Redirect(location) => Some(location),
            _ => None,
        }
    }

    pub fn view(&self) -> Option<&View> {
        match self {
            Response::Render(view) => Some(view),
            _ => None,
        }
    }
}
