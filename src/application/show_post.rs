//! Show post use case

use crate::domain::{Post, PostId};
use crate::error::{BlogError, Result};
use crate::infrastructure::PostRepository;

/// Fetch one post for the detail view.
pub fn show_post(repository: &impl PostRepository, id: &PostId) -> Result<Post> {
    repository
        .get(id)
        .ok_or_else(|| BlogError::PostNotFound(id.to_string()))
}
