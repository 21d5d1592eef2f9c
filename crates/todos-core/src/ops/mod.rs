pub mod session_store;
pub mod sort;
pub mod store;

pub use session_store::{OwnerLists, SessionData, SessionStore};
pub use sort::{sort_list_todos, sort_todo_lists, sort_todos};
pub use store::TodoStore;
