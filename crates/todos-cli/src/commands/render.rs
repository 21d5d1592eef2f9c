//! Plain-text rendering of responses

use std::fmt::Write;

use todos_core::model::TodoList;
use todos_engine::{Flash, FlashKind, Response, View};

fn flash_line(out: &mut String, flash: &Flash) {
    let tag = match flash.kind {
        FlashKind::Info => "info",
        FlashKind::Success => "success",
        FlashKind::Error => "error",
    };
    let _ = writeln!(out, "[{}] {}", tag, flash.message);
}

fn check(done: bool) -> &'static str {
    if done {
        "[x]"
    } else {
        "[ ]"
    }
}

fn list_body(out: &mut String, list: &TodoList) {
    if list.todos.is_empty() {
        let _ = writeln!(out, "  (no todos)");
    }
    for todo in &list.todos {
        let _ = writeln!(out, "  {} {}  #{}", check(todo.done), todo.title, todo.id);
    }
}

fn render_view(out: &mut String, view: &View) {
    for flash in view.flash() {
        flash_line(out, flash);
    }

    match view {
        View::SignIn { username, .. } => {
            let _ = writeln!(out, "Sign in (username: {})", username);
        }
        View::Lists { lists, .. } => {
            let _ = writeln!(out, "Todo lists:");
            for summary in lists {
                let _ = writeln!(
                    out,
                    "  {} {} ({}/{})  #{}",
                    check(summary.is_done),
                    summary.list.title,
                    summary.count_done,
                    summary.count_all,
                    summary.list.id
                );
            }
        }
        View::NewList { title, .. } => {
            let _ = writeln!(out, "New list (title: {})", title);
        }
        View::List {
            list,
            is_done,
            has_undone,
            ..
        } => {
            let _ = writeln!(out, "{} {}  #{}", check(*is_done), list.title, list.id);
            list_body(out, list);
            if *has_undone {
                let _ = writeln!(out, "  (complete all available)");
            }
        }
        View::EditList { list, title, .. } => {
            let _ = writeln!(out, "Edit list #{} (title: {})", list.id, title);
        }
    }
}

/// Render a response plus flash left pending by a redirect
pub fn render_response(response: &Response, pending: &[Flash]) -> String {
    let mut out = String::new();

    match response {
        Response::Render(view) => render_view(&mut out, view),
        Response::Redirect(location) => {
            for flash in pending {
                flash_line(&mut out, flash);
            }
            let _ = writeln!(out, "→ {}", location);
        }
        Response::Failure { status, message } => {
            let _ = writeln!(out, "{} {}", status, message);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use todos_core::model::Todo;
    use todos_engine::ListSummary;

    #[test]
    fn test_render_lists() {
        let mut list = TodoList::new(3, "Groceries");
        let mut milk = Todo::new(4, "Milk");
        milk.mark_done();
        list.todos.push(milk);

        let response = Response::Render(View::Lists {
            lists: vec![ListSummary::new(list, true)],
            flash: vec![Flash::success("Welcome!")],
        });

        assert_eq!(
            render_response(&response, &[]),
            "[success] Welcome!\nTodo lists:\n  [x] Groceries (1/1)  #3\n"
        );
    }

    #[test]
    fn test_render_redirect_with_pending_flash() {
        let response = Response::Redirect("/lists/3".to_string());
        let rendered = render_response(&response, &[Flash::success("The todo has been created.")]);
        assert_eq!(rendered, "[success] The todo has been created.\n→ /lists/3\n");
    }
}
