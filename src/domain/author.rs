//! Author value

use std::fmt;

/// The named attribution on a post.
///
/// Compared by value: two posts written by "Jane" carry equal authors even
/// though each owns its own copy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Author {
    name: String,
}

impl Author {
    pub fn new(name: impl Into<String>) -> Self {
        Author { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_by_value() {
        assert_eq!(Author::new("Jane"), Author::new("Jane".to_string()));
        assert_ne!(Author::new("Jane"), Author::new("John"));
    }

    #[test]
    fn test_display_is_name() {
        assert_eq!(Author::new("Azeez Adams").to_string(), "Azeez Adams");
    }
}
