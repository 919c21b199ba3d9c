/// Data models for post-service
///
/// A `Post` is stored and returned verbatim; the service never rewrites the
/// payload it was given.
use serde::{Deserialize, Serialize};

/// A post record keyed by its caller-supplied id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Primary key, supplied in the request path
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
}

impl Post {
    pub fn new(id: u64, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
        }
    }
}
