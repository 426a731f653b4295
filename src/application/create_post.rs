//! Create post use case

use crate::domain::{Post, PostForm};
use crate::error::{BlogError, FieldError, Result};
use crate::infrastructure::PostRepository;
use tracing::info;

const MIN_TITLE: usize = 5;
const MIN_AUTHOR: usize = 2;
const MIN_CONTENT: usize = 50;

/// Check a form before it reaches the repository.
///
/// All fields are checked; every failure is reported at once.
pub fn validate_form(form: &PostForm) -> Result<()> {
    let checks = [
        ("title", "Title", form.title.as_str(), MIN_TITLE),
        ("author_name", "Author name", form.author_name.as_str(), MIN_AUTHOR),
        ("content", "Content", form.content.as_str(), MIN_CONTENT),
    ];

    let errors: Vec<FieldError> = checks
        .into_iter()
        .filter_map(|(field, label, value, min)| check_field(field, label, value, min))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(BlogError::Validation(errors))
    }
}

fn check_field(field: &'static str, label: &str, value: &str, min: usize) -> Option<FieldError> {
    let value = value.trim();
    if value.is_empty() {
        Some(FieldError::new(field, format!("{} is required", label)))
    } else if value.chars().count() < min {
        Some(FieldError::new(
            field,
            format!("{} must be at least {} characters", label, min),
        ))
    } else {
        None
    }
}

/// Validate the form and store the new post.
pub fn create_post(repository: &mut impl PostRepository, form: &PostForm) -> Result<Post> {
    validate_form(form)?;

    let post = repository.create(form);
    info!(id = %post.id(), "post published");
    Ok(post)
}
