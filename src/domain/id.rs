//! Post identifiers

use std::fmt;
use uuid::Uuid;

/// Opaque, process-unique post identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PostId(String);

impl PostId {
    /// Wrap an existing identifier (e.g. a seed id like `post-1`).
    pub fn new(id: impl Into<String>) -> Self {
        PostId(id.into())
    }

    /// Generate a fresh identifier.
    ///
    /// UUIDv7 packs a millisecond timestamp with 74 random bits. Collisions
    /// are not checked for.
    pub fn generate() -> Self {
        PostId(Uuid::now_v7().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for PostId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        PostId::new(id)
    }
}

impl From<String> for PostId {
    fn from(id: String) -> Self {
        PostId(id)
    }
}
