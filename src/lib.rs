//! azblog - In-memory blog
//!
//! Posts with derived excerpts and reading-time estimates, held in a
//! process-local repository and driven from the terminal. Nothing is
//! persisted; every run starts from the sample posts (or empty).

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::BlogError;
