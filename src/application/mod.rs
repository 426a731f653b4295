//! Application layer - Use cases driven by the presentation layer

pub mod create_post;
pub mod delete_post;
pub mod list_posts;
pub mod show_post;
pub mod update_post;

pub use create_post::{create_post, validate_form};
pub use delete_post::delete_post;
pub use list_posts::{count_posts, list_posts};
pub use show_post::show_post;
pub use update_post::update_post;
