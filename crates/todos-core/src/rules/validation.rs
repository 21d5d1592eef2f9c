use crate::errors::{Result, TodosError};

/// Longest accepted title, counted in characters
pub const MAX_TITLE_CHARS: usize = 100;

/// Which form field a title came from; selects the user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleField {
    List,
    Todo,
}

impl TitleField {
    fn required_message(self) -> &'static str {
        match self {
            TitleField::List => "The list title is required.",
            TitleField::Todo => "The todo title is required.",
        }
    }

    fn length_message(self) -> &'static str {
        match self {
            TitleField::List => "List title must be between 1 and 100 characters.",
            TitleField::Todo => "Todo title must be between 1 and 100 characters.",
        }
    }
}

/// Trim and validate a submitted title
///
/// Returns the trimmed title. The error reason is the message shown to the user.
///
/// # Errors
///
/// `InvalidTitle` if the trimmed title is empty or longer than
/// [`MAX_TITLE_CHARS`].
pub fn validate_title(raw: &str, field: TitleField) -> Result<String> {
    let title = raw.trim();

    if title.is_empty() {
        return Err(TodosError::InvalidTitle {
            reason: field.required_message().to_string(),
        });
    }

    if title.chars().count() > MAX_TITLE_CHARS {
        return Err(TodosError::InvalidTitle {
            reason: field.length_message().to_string(),
        });
    }

    Ok(title.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reason(result: Result<String>) -> String {
        match result {
            Err(TodosError::InvalidTitle { reason }) => reason,
            other => panic!("Expected InvalidTitle, got {:?}", other),
        }
    }

    #[test]
    fn test_title_is_trimmed() {
        assert_eq!(
            validate_title("  Groceries \n", TitleField::List).unwrap(),
            "Groceries"
        );
    }

    #[test]
    fn test_whitespace_only_title_is_required() {
        assert_eq!(
            reason(validate_title("   \t", TitleField::List)),
            "The list title is required."
        );
        assert_eq!(
            reason(validate_title("", TitleField::Todo)),
            "The todo title is required."
        );
    }

    #[test]
    fn test_length_limit_counts_characters() {
        let exactly = "é".repeat(MAX_TITLE_CHARS);
        assert!(validate_title(&exactly, TitleField::Todo).is_ok());

        let too_long = "x".repeat(MAX_TITLE_CHARS + 1);
        assert_eq!(
            reason(validate_title(&too_long, TitleField::Todo)),
            "Todo title must be between 1 and 100 characters."
        );
    }
}
