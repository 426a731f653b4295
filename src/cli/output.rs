//! Output formatting utilities

use crate::domain::Post;
use crate::infrastructure::Config;
use chrono::{DateTime, Utc};
use std::fmt::Write;

/// Format a date with a user-supplied chrono pattern, falling back to ISO
/// dates when the pattern is invalid.
pub fn format_date(date: DateTime<Utc>, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

fn reading_time(post: &Post) -> String {
    format!("{} min read", post.reading_time())
}

/// Format posts as cards for the list view
pub fn format_post_list(posts: &[Post], config: &Config) -> String {
    if posts.is_empty() {
        return "No posts yet\n".to_string();
    }

    let mut output = String::new();
    for post in posts {
        // Excerpts keep the content's line breaks; cards show one line
        let excerpt = post.excerpt().split_whitespace().collect::<Vec<_>>().join(" ");

        output.push_str(&format!(
            "{}\n  {} · {} · {} · {}\n  {}\n\n",
            post.title(),
            post.id(),
            post.author(),
            format_date(post.date(), &config.list_date_format),
            reading_time(post),
            excerpt
        ));
    }
    output
}

/// Format a single post for the detail view
pub fn format_post_detail(post: &Post, config: &Config) -> String {
    let mut output = format!(
        "{}\nBy {} · {} · {}\n",
        post.title(),
        post.author(),
        format_date(post.date(), &config.detail_date_format),
        reading_time(post)
    );

    for paragraph in post.paragraphs() {
        output.push('\n');
        output.push_str(paragraph);
        output.push('\n');
    }
    output
}
