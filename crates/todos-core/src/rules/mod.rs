pub mod validation;

pub use validation::{validate_title, TitleField, MAX_TITLE_CHARS};
