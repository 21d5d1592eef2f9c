//! Ordering shared by every store backend
//!
//! Both backends load lists and todos in whatever order their storage yields
//! and pass them through these functions before handing them out, so the
//! observable order never depends on the backend.

use std::cmp::Ordering;

use crate::model::{Todo, TodoList};

fn by_title(a: &str, b: &str) -> Ordering {
    a.cmp(b)
}

/// Sort todos: undone before done, each partition by title ascending
///
/// The sort is stable, so todos with equal titles keep their input order.
pub fn sort_todos(mut todos: Vec<Todo>) -> Vec<Todo> {
    todos.sort_by(|a, b| a.done.cmp(&b.done).then_with(|| by_title(&a.title, &b.title)));
    todos
}

/// Sort todo lists: not-done lists before done lists, each partition by title
///
/// Lists are first ordered by title, then stably partitioned on
/// [`TodoList::is_done`]. The todos of every list are sorted with
/// [`sort_todos`] as well.
pub fn sort_todo_lists(lists: Vec<TodoList>) -> Vec<TodoList> {
    let mut lists: Vec<TodoList> = lists.into_iter().map(sort_list_todos).collect();
    lists.sort_by(|a, b| by_title(&a.title, &b.title));

    let (undone, done): (Vec<TodoList>, Vec<TodoList>) =
        lists.into_iter().partition(|list| !list.is_done());

    undone.into_iter().chain(done).collect()
}

/// Sort the todos of a single list in place of the list value
pub fn sort_list_todos(mut list: TodoList) -> TodoList {
    list.todos = sort_todos(std::mem::take(&mut list.todos));
    list
}
