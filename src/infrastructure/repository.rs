//! In-memory post repository

use crate::domain::{Author, Post, PostForm, PostId, PostPatch};
use chrono::Utc;
use tracing::debug;

/// CRUD access to the post collection.
///
/// "Not found" is an ordinary outcome here: lookups return `Option`, delete
/// returns `bool`. Input is trimmed but otherwise taken as given; form
/// validation happens before these calls.
pub trait PostRepository {
    /// All posts, newest first. The returned vector is a snapshot.
    fn list_all(&self) -> Vec<Post>;

    /// Look up a post by exact id.
    fn get(&self, id: &PostId) -> Option<Post>;

    /// Store a new post with a fresh id and the current time.
    fn create(&mut self, form: &PostForm) -> Post;

    /// Replace a post with its revision under `patch`.
    fn update(&mut self, id: &PostId, patch: &PostPatch) -> Option<Post>;

    /// Remove a post. Returns whether anything was removed.
    fn delete(&mut self, id: &PostId) -> bool;

    /// Number of stored posts.
    fn count(&self) -> usize;
}

/// Process-local implementation of PostRepository. Nothing survives a
/// restart.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRepository {
    posts: Vec<Post>,
}

impl InMemoryRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding the given posts
    pub fn with_posts(posts: Vec<Post>) -> Self {
        InMemoryRepository { posts }
    }

    /// Create a repository holding the sample posts
    pub fn seeded() -> Self {
        Self::with_posts(super::seed::sample_posts())
    }

    fn position(&self, id: &PostId) -> Option<usize> {
        self.posts.iter().position(|post| post.id() == id)
    }
}

impl PostRepository for InMemoryRepository {
    fn list_all(&self) -> Vec<Post> {
        let mut posts = self.posts.clone();
        // Stable sort keeps insertion order among equal dates
        posts.sort_by(|a, b| b.date().cmp(&a.date()));
        posts
    }

    fn get(&self, id: &PostId) -> Option<Post> {
        self.posts.iter().find(|post| post.id() == id).cloned()
    }

    fn create(&mut self, form: &PostForm) -> Post {
        let post = Post::new(
            PostId::generate(),
            form.title.trim(),
            form.content.trim(),
            Author::new(form.author_name.trim()),
            Utc::now(),
        );

        debug!(id = %post.id(), title = post.title(), "created post");
        self.posts.insert(0, post.clone());
        post
    }

    fn update(&mut self, id: &PostId, patch: &PostPatch) -> Option<Post> {
        let index = self.position(id)?;
        let updated = self.posts[index].revise(patch);

        debug!(id = %updated.id(), title = updated.title(), "updated post");
        self.posts[index] = updated.clone();
        Some(updated)
    }

    fn delete(&mut self, id: &PostId) -> bool {
        let before = self.posts.len();
        self.posts.retain(|post| post.id() != id);
        let removed = self.posts.len() < before;

        if removed {
            debug!(%id, "deleted post");
        }
        removed
    }

    fn count(&self) -> usize {
        self.posts.len()
    }
}
