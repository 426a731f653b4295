//! Post entity and its derived display fields

use super::{Author, PostId};
use chrono::{DateTime, Utc};

/// Maximum excerpt length, in characters, before truncation kicks in.
pub const EXCERPT_LENGTH: usize = 150;

/// Reading speed used for the reading-time estimate.
pub const WORDS_PER_MINUTE: usize = 200;

/// Fields computed from a post's content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Derived {
    pub excerpt: String,
    /// Minutes, never below 1.
    pub reading_time: u32,
}

/// Compute the excerpt and reading time for `content`.
pub fn derive(content: &str) -> Derived {
    Derived {
        excerpt: excerpt(content),
        reading_time: reading_time(content),
    }
}

/// Raw character cut, not word-boundary aware.
fn excerpt(content: &str) -> String {
    match content.char_indices().nth(EXCERPT_LENGTH) {
        None => content.to_string(),
        Some((cut, _)) => format!("{}...", content[..cut].trim()),
    }
}

fn reading_time(content: &str) -> u32 {
    let words = content.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    u32::try_from(minutes).unwrap_or(u32::MAX)
}

/// A single blog article.
///
/// The excerpt and reading time are derived when the post is built and have
/// no setters; changing the content means building a new post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    id: PostId,
    title: String,
    content: String,
    excerpt: String,
    author: Author,
    date: DateTime<Utc>,
    reading_time: u32,
}

impl Post {
    pub fn new(
        id: PostId,
        title: impl Into<String>,
        content: impl Into<String>,
        author: Author,
        date: DateTime<Utc>,
    ) -> Self {
        let content = content.into();
        let Derived {
            excerpt,
            reading_time,
        } = derive(&content);

        Post {
            id,
            title: title.into(),
            content,
            excerpt,
            author,
            date,
            reading_time,
        }
    }

    /// Build the replacement for this post after applying `patch`.
    ///
    /// Supplied fields are trimmed; a field that is missing or empty after
    /// trimming keeps its current value. Id and date never change.
    pub fn revise(&self, patch: &PostPatch) -> Post {
        let title = pick(patch.title.as_deref(), &self.title);
        let content = pick(patch.content.as_deref(), &self.content);
        let author = match non_blank(patch.author_name.as_deref()) {
            Some(name) => Author::new(name),
            None => self.author.clone(),
        };

        Post::new(self.id.clone(), title, content, author, self.date)
    }

    pub fn id(&self) -> &PostId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn excerpt(&self) -> &str {
        &self.excerpt
    }

    pub fn author(&self) -> &Author {
        &self.author
    }

    pub fn date(&self) -> DateTime<Utc> {
        self.date
    }

    pub fn reading_time(&self) -> u32 {
        self.reading_time
    }

    /// Content split on blank lines, with empty paragraphs dropped.
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.content
            .split("\n\n")
            .map(str::trim)
            .filter(|p| !p.is_empty())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

fn pick(value: Option<&str>, current: &str) -> String {
    non_blank(value).unwrap_or(current).to_string()
}

/// Input for creating a post, as collected by a form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub author_name: String,
    pub content: String,
}

impl PostForm {
    pub fn new(
        title: impl Into<String>,
        author_name: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        PostForm {
            title: title.into(),
            author_name: author_name.into(),
            content: content.into(),
        }
    }
}

/// Partial update of a post. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_name: Option<String>,
}

impl PostPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn author_name(mut self, name: impl Into<String>) -> Self {
        self.author_name = Some(name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none() && self.author_name.is_none()
    }
}
