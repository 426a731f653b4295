//! CLI layer - Command-line interface

pub mod commands;
pub mod output;
pub mod session;

pub use commands::{Cli, Commands};
pub use output::{format_post_detail, format_post_list};
pub use session::Session;
