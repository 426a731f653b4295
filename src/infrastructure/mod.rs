//! Infrastructure layer - Storage, configuration and logging

pub mod config;
pub mod logging;
pub mod repository;
pub mod seed;

pub use config::Config;
pub use logging::init_logging;
pub use repository::{InMemoryRepository, PostRepository};
