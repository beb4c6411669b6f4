//! The greeting value object

use serde::{Deserialize, Serialize};

use crate::Result;

/// A title and a message, fixed at construction.
///
/// Two greetings are equal when their text is equal. Fields are private
/// so a constructed greeting never changes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Greeting {
    title: String,
    message: String,
}

impl Greeting {
    /// Create a greeting from a title and a message, in that order.
    ///
    /// Any text is accepted, including empty strings.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    /// The title exactly as it was passed to [`Greeting::new`]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// The message exactly as it was passed to [`Greeting::new`]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Pretty-printed JSON form: `{"title": ..., "message": ...}`
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Consume the greeting, returning `(title, message)`
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.message)
    }
}

impl std::fmt::Display for Greeting {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.title.is_empty() {
            write!(f, "{}", self.message)
        } else {
            write!(f, "{}\n{}", self.title, self.message)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abarcloud() -> Greeting {
        Greeting::new("Welcome to AbarCloud", "Hello World!")
    }

    #[test]
    fn test_returns_title() {
        assert_eq!(abarcloud().title(), "Welcome to AbarCloud");
    }

    #[test]
    fn test_returns_message() {
        assert_eq!(abarcloud().message(), "Hello World!");
    }

    #[test]
    fn test_empty_strings_accepted() {
        let greeting = Greeting::new("", "");
        assert_eq!(greeting.title(), "");
        assert_eq!(greeting.message(), "");
    }

    #[test]
    fn test_argument_order() {
        let greeting = Greeting::new("A", "B");
        assert_eq!(greeting.title(), "A");
        assert_eq!(greeting.message(), "B");
        assert_ne!(greeting, Greeting::new("B", "A"));
    }

    #[test]
    fn test_accessors_are_stable() {
        let greeting = abarcloud();
        let first = greeting.title().to_string();
        for _ in 0..3 {
            assert_eq!(greeting.title(), first);
            assert_eq!(greeting.message(), "Hello World!");
        }
    }

    #[test]
    fn test_text_is_not_trimmed() {
        let greeting = Greeting::new("  padded\t", "\nline\r\n");
        assert_eq!(greeting.title(), "  padded\t");
        assert_eq!(greeting.message(), "\nline\r\n");
    }

    #[test]
    fn test_into_parts() {
        let (title, message) = Greeting::new("t", "m").into_parts();
        assert_eq!(title, "t");
        assert_eq!(message, "m");
    }

    #[test]
    fn test_display() {
        assert_eq!(abarcloud().to_string(), "Welcome to AbarCloud\nHello World!");
        assert_eq!(Greeting::new("", "just this").to_string(), "just this");
    }

    #[test]
    fn test_display_of_empty_greeting_is_empty() {
        assert_eq!(Greeting::new("", "").to_string(), "");
        assert_eq!(Greeting::new("title only", "").to_string(), "title only\n");
    }

    #[test]
    fn test_to_json() {
        let rendered = abarcloud().to_json().unwrap();
        assert!(rendered.contains('\n'));
        let back: Greeting = serde_json::from_str(&rendered).unwrap();
        assert_eq!(back, abarcloud());
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(abarcloud()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "title": "Welcome to AbarCloud",
                "message": "Hello World!"
            })
        );
    }

    #[test]
    fn test_shared_across_threads() {
        let greeting = std::sync::Arc::new(abarcloud());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let greeting = greeting.clone();
                std::thread::spawn(move || greeting.title().to_string())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), "Welcome to AbarCloud");
        }
    }
}
