//! Update post use case

use crate::domain::{Post, PostId, PostPatch};
use crate::error::{BlogError, Result};
use crate::infrastructure::PostRepository;
use tracing::info;

/// Apply a partial update to an existing post.
pub fn update_post(
    repository: &mut impl PostRepository,
    id: &PostId,
    patch: &PostPatch,
) -> Result<Post> {
    let post = repository
        .update(id, patch)
        .ok_or_else(|| BlogError::PostNotFound(id.to_string()))?;

    info!(%id, "post updated");
    Ok(post)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryRepository;

    #[test]
    fn test_update_existing_post() {
        let mut repo = InMemoryRepository::seeded();
        let id = PostId::new("post-1");

        let post = update_post(&mut repo, &id, &PostPatch::new().author_name("Jane")).unwrap();

        assert_eq!(post.author().name(), "Jane");
        assert_eq!(repo.get(&id).unwrap().author().name(), "Jane");
    }

    #[test]
    fn test_update_missing_post() {
        let mut repo = InMemoryRepository::seeded();
        let result = update_post(&mut repo, &PostId::new("gone"), &PostPatch::new().title("New"));
        assert!(matches!(result, Err(BlogError::PostNotFound(_))));
    }
}
