//! Domain layer - Posts, authors and derived fields

pub mod author;
pub mod id;
pub mod post;

pub use author::Author;
pub use id::PostId;
pub use post::{derive, Derived, Post, PostForm, PostPatch};
