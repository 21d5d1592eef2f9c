//! Typed requests and path routing

use std::collections::HashMap;
use std::str::FromStr;

use todos_core::model::{ListId, TodoId};
use todos_core_types::Sensitive;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl FromStr for Method {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "GET" => Ok(Method::Get),
            "POST" => Ok(Method::Post),
            other => Err(format!("unsupported method: {}", other)),
        }
    }
}

/// One request, with its path parameters parsed and form fields extracted
#[derive(Debug, Clone)]
pub enum Request {
    Home,
    SignInForm,
    SignIn {
        username: String,
        password: Sensitive<String>,
    },
    SignOut,
    Lists,
    NewListForm,
    CreateList {
        title: String,
    },
    ShowList {
        list_id: ListId,
    },
    EditListForm {
        list_id: ListId,
    },
    RenameList {
        list_id: ListId,
        title: String,
    },
    DeleteList {
        list_id: ListId,
    },
    CreateTodo {
        list_id: ListId,
        title: String,
    },
    ToggleTodo {
        list_id: ListId,
        todo_id: TodoId,
    },
    DeleteTodo {
        list_id: ListId,
        todo_id: TodoId,
    },
    CompleteAll {
        list_id: ListId,
    },
}

fn field(form: &HashMap<String, String>, name: &str) -> String {
    form.get(name).cloned().unwrap_or_default()
}

fn id(segment: &str) -> Option<i64> {
    segment.parse().ok()
}

impl Request {
    /// Map a method, path and form body onto a request
    ///
    /// Returns `None` for unknown paths and for non-numeric ids. A query
    /// string and a trailing slash are ignored. Missing form fields read as
    /// empty strings and are rejected later by validation.
    pub fn route(method: Method, path: &str, form: &HashMap<String, String>) -> Option<Request> {
        let path = path.split('?').next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        let request = match (method, segments.as_slice()) {
            (Method::Get, []) => Request::Home,
            (Method::Get, ["users", "signin"]) => Request::SignInForm,
            (Method::Post, ["users", "signin"]) => Request::SignIn {
                username: field(form, "username"),
                password: Sensitive::new(field(form, "password")),
            },
            (Method::Post, ["users", "signout"]) => Request::SignOut,
            (Method::Get, ["lists"]) => Request::Lists,
            (Method::Get, ["lists", "new"]) => Request::NewListForm,
            (Method::Post, ["lists"]) => Request::CreateList {
                title: field(form, "todoListTitle"),
            },
            (Method::Get, ["lists", list]) => Request::ShowList { list_id: id(list)? },
            (Method::Get, ["lists", list, "edit"]) => Request::EditListForm { list_id: id(list)? },
            (Method::Post, ["lists", list, "edit"]) => Request::RenameList {
                list_id: id(list)?,
                title: field(form, "todoListTitle"),
            },
            (Method::Post, ["lists", list, "destroy"]) => Request::DeleteList { list_id: id(list)? },
            (Method::Post, ["lists", list, "todos"]) => Request::CreateTodo {
                list_id: id(list)?,
                title: field(form, "todoTitle"),
            },
            (Method::Post, ["lists", list, "todos", todo, "toggle"]) => Request::ToggleTodo {
                list_id: id(list)?,
                todo_id: id(todo)?,
            },
            (Method::Post, ["lists", list, "todos", todo, "destroy"]) => Request::DeleteTodo {
                list_id: id(list)?,
                todo_id: id(todo)?,
            },
            (Method::Post, ["lists", list, "complete_all"]) => {
                Request::CompleteAll { list_id: id(list)? }
            }
            _ => return None,
        };

        Some(request)
    }

    /// Operation name used in lifecycle logs
    pub fn op(&self) -> &'static str {
        match self {
            Request::Home => "home",
            Request::SignInForm => "sign_in_form",
            Request::SignIn { .. } => "sign_in",
            Request::SignOut => "sign_out",
            Request::Lists => "lists",
            Request::NewListForm => "new_list_form",
            Request::CreateList { .. } => "create_list",
            Request::ShowList { .. } => "show_list",
            Request::EditListForm { .. } => "edit_list_form",
            Request::RenameList { .. } => "rename_list",
            Request::DeleteList { .. } => "delete_list",
            Request::CreateTodo { .. } => "create_todo",
            Request::ToggleTodo { .. } => "toggle_todo",
            Request::DeleteTodo { .. } => "delete_todo",
            Request::CompleteAll { .. } => "complete_all",
        }
    }

    /// Whether the request may only be served to a signed-in session
    pub fn requires_auth(&self) -> bool {
        !matches!(
            self,
            Request::SignInForm | Request::SignIn { .. } | Request::SignOut
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_form() -> HashMap<String, String> {
        HashMap::new()
    }

    #[test]
    fn test_routes_nested_todo_paths() {
        let request = Request::route(Method::Post, "/lists/3/todos/17/toggle", &no_form());
        assert!(matches!(
            request,
            Some(Request::ToggleTodo {
                list_id: 3,
                todo_id: 17
            })
        ));
    }

    #[test]
    fn test_new_is_not_a_list_id() {
        assert!(matches!(
            Request::route(Method::Get, "/lists/new", &no_form()),
            Some(Request::NewListForm)
        ));
    }

    #[test]
    fn test_non_numeric_id_does_not_route() {
        assert!(Request::route(Method::Get, "/lists/abc", &no_form()).is_none());
        assert!(Request::route(Method::Post, "/lists/1/todos/x/destroy", &no_form()).is_none());
    }

    #[test]
    fn test_method_matters() {
        assert!(Request::route(Method::Get, "/lists/1/destroy", &no_form()).is_none());
        assert!(Request::route(Method::Get, "/users/signout", &no_form()).is_none());
    }

    #[test]
    fn test_form_fields_are_extracted() {
        let mut form = HashMap::new();
        form.insert("todoListTitle".to_string(), "  Groceries ".to_string());

        match Request::route(Method::Post, "/lists/", &form) {
            Some(Request::CreateList { title }) => assert_eq!(title, "  Groceries "),
            other => panic!("unexpected route: {:?}", other),
        }
    }

    #[test]
    fn test_query_string_is_ignored() {
        assert!(matches!(
            Request::route(Method::Get, "/lists?page=2", &no_form()),
            Some(Request::Lists)
        ));
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let mut form = HashMap::new();
        form.insert("username".to_string(), "alice".to_string());
        form.insert("password".to_string(), "secret".to_string());

        let request = Request::route(Method::Post, "/users/signin", &form).unwrap();
        assert!(!format!("{:?}", request).contains("secret"));
    }

    #[test]
    fn test_only_sign_in_routes_skip_auth() {
        assert!(!Request::SignInForm.requires_auth());
        assert!(!Request::SignOut.requires_auth());
        assert!(Request::Lists.requires_auth());
        assert!(Request::Home.requires_auth());
    }

    #[test]
    fn test_method_from_str() {
        assert_eq!("post".parse::<Method>(), Ok(Method::Post));
        assert!("DELETE".parse::<Method>().is_err());
    }
}
