//! List posts use case

use crate::domain::Post;
use crate::infrastructure::PostRepository;

/// All posts, newest first.
pub fn list_posts(repository: &impl PostRepository) -> Vec<Post> {
    repository.list_all()
}

/// Number of stored posts.
pub fn count_posts(repository: &impl PostRepository) -> usize {
    repository.count()
}
