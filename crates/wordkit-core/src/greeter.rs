//! Greeting formatting.

/// Format the greeting line for `name`.
///
/// ```
/// assert_eq!(wordkit_core::greet("Universe"), "Hello, Universe!");
/// ```
pub fn greet(name: &str) -> String {
    format!("Hello, {}!", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_NAME;

    #[test]
    fn test_greet_default_name() {
        assert_eq!(greet(DEFAULT_NAME), "Hello, World!");
    }

    #[test]
    fn test_greet_custom_names() {
        assert_eq!(greet("Universe"), "Hello, Universe!");
        assert_eq!(greet("Multiverse"), "Hello, Multiverse!");
    }

    #[test]
    fn test_greet_keeps_name_verbatim() {
        assert_eq!(greet(""), "Hello, !");
        assert_eq!(greet("Ada Lovelace"), "Hello, Ada Lovelace!");
    }
}
