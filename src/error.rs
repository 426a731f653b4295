//! Error types for azblog

use std::fmt;
use thiserror::Error;

/// A single failed form check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        FieldError {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Main error type for the blog application
#[derive(Debug, Error)]
pub enum BlogError {
    #[error("Post not found: {0}")]
    PostNotFound(String),

    #[error("Invalid post: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl BlogError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            BlogError::Usage(_) => 2,
            BlogError::Validation(_) => 3,
            BlogError::PostNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            BlogError::PostNotFound(id) => {
                format!(
                    "Post not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'list' to see the ids of all posts\n\
                    • Posts live in memory only and are gone after a restart",
                    id
                )
            }
            BlogError::Validation(errors) => {
                let mut msg = String::from("The post could not be saved:\n");
                for error in errors {
                    msg.push_str(&format!("• {}\n", error.message));
                }
                msg.push_str(
                    "\nRequirements: title 5+ characters, author 2+ characters, content 50+ characters",
                );
                msg
            }
            BlogError::Config(msg) => {
                if msg.contains("Unknown config key") {
                    format!(
                        "{}\n\n\
                        Valid keys: seed_samples, confirm_delete, list_date_format, \
                        detail_date_format, log_filter",
                        msg
                    )
                } else if msg.contains("No config file") {
                    format!(
                        "{}\n\n\
                        Pass --config <PATH> or set AZBLOG_CONFIG to choose a file",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using BlogError
pub type Result<T> = std::result::Result<T, BlogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(BlogError::PostNotFound("x".into()).exit_code(), 4);
        assert_eq!(BlogError::Usage("show <id>".into()).exit_code(), 2);
        assert_eq!(BlogError::Validation(vec![]).exit_code(), 3);
        assert_eq!(BlogError::Config("bad".into()).exit_code(), 1);
    }

    #[test]
    fn test_validation_display_joins_messages() {
        let err = BlogError::Validation(vec![
            FieldError::new("title", "Title is required"),
            FieldError::new("content", "Content is required"),
        ]);
        assert_eq!(
            err.to_string(),
            "Invalid post: Title is required; Content is required"
        );
    }

    #[test]
    fn test_post_not_found_suggestions() {
        let err = BlogError::PostNotFound("abc".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("abc"));
        assert!(msg.contains("'list'"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_validation_suggestions_list_each_field() {
        let err = BlogError::Validation(vec![FieldError::new(
            "author_name",
            "Author name must be at least 2 characters",
        )]);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("• Author name must be at least 2 characters"));
        assert!(msg.contains("Requirements"));
    }

    #[test]
    fn test_config_unknown_key_suggestions() {
        let err = BlogError::Config("Unknown config key: 'colour'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("seed_samples"));
        assert!(msg.contains("log_filter"));
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = BlogError::Config("Something odd".to_string());
        assert_eq!(err.display_with_suggestions(), "Something odd");
    }
}
