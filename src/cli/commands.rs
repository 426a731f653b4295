//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "azblog")]
#[command(about = "In-memory blog: list, read, write and delete posts", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (default: $AZBLOG_CONFIG, else built-in defaults)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all posts, newest first
    List,

    /// Show one post in full
    Show {
        /// Post id
        id: String,
    },

    /// Print the number of posts
    Count,

    /// Publish a post and print it
    New {
        #[arg(short, long)]
        title: String,

        #[arg(short, long)]
        author: String,

        #[arg(short, long)]
        content: String,
    },

    /// Start an interactive session (the default)
    Shell,

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
