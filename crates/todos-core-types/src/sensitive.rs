//! Sensitive data marker for automatic redaction
//!
//! Passwords travel from the sign-in form to the password hash comparison
//! wrapped in `Sensitive<T>`, so they never show up in logs or error output.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use todos_core_types::Sensitive;
///
/// let password = Sensitive::new("hunter2".to_string());
/// assert_eq!(format!("{:?}", password), "***REDACTED***");
/// assert_eq!(password.expose(), "hunter2");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying value
    ///
    /// Only the password verification path should need this.
    pub fn expose(&self) -> &T {
        &self.0
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl From<String> for Sensitive<String> {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Sensitive<String> {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_password_is_redacted() {
        let password: Sensitive<String> = "correct horse".into();
        assert_eq!(format!("{:?}", password), "***REDACTED***");
        assert_eq!(format!("{}", password), "***REDACTED***");
    }

    #[test]
    fn test_expose_returns_value() {
        let password = Sensitive::new(String::from("secret"));
        assert_eq!(password.expose(), "secret");
        assert_eq!(password.clone().into_inner(), "secret");
    }

    #[test]
    fn test_redaction_inside_struct() {
        #[derive(Debug)]
        #[allow(dead_code)]
        struct SignInForm {
            username: String,
            password: Sensitive<String>,
        }

        let form = SignInForm {
            username: "alice".to_string(),
            password: Sensitive::from("secret123"),
        };

        let debug_str = format!("{:?}", form);
        assert!(debug_str.contains("alice"));
        assert!(!debug_str.contains("secret123"));
    }
}
