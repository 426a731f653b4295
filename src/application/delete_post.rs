//! Delete post use case

use crate::domain::PostId;
use crate::error::{BlogError, Result};
use crate::infrastructure::PostRepository;
use tracing::info;

/// Remove a post. Asking the user for confirmation is the caller's job.
pub fn delete_post(repository: &mut impl PostRepository, id: &PostId) -> Result<()> {
    if !repository.delete(id) {
        return Err(BlogError::PostNotFound(id.to_string()));
    }

    info!(%id, "post deleted");
    Ok(())
}
