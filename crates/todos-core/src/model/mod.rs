pub mod todo;
pub mod todo_list;

pub use todo::{Todo, TodoId};
pub use todo_list::{ListId, TodoList};
