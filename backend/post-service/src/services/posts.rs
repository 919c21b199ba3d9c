/// Post client - the storage backend behind the HTTP handlers
use crate::models::Post;
use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::RwLock;

/// Errors reported by a [`PostClient`].
///
/// The display strings are part of the public API: the create conflict text is
/// returned verbatim to HTTP callers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error("Post not found")]
    NotFound,

    #[error("Post id already exists")]
    AlreadyExists,
}

/// Client for the external post store.
///
/// Handlers only ever see this trait, so the backing store can be swapped for
/// a test double without touching the routing layer.
#[async_trait]
pub trait PostClient: Send + Sync {
    /// Fetch the post stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if nothing is stored under `id`.
    async fn fetch(&self, id: u64) -> Result<Post, ClientError>;

    /// Store `post` under `id` if the id is free, returning the stored post.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::AlreadyExists`] if `id` is taken. The existing
    /// record is left untouched.
    async fn create(&self, id: u64, post: Post) -> Result<Post, ClientError>;
}

/// Map-backed [`PostClient`] that lives for the process lifetime
#[derive(Debug, Default)]
pub struct InMemoryPostClient {
    posts: RwLock<HashMap<u64, Post>>,
}

impl InMemoryPostClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored posts
    pub async fn len(&self) -> usize {
        self.posts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.posts.read().await.is_empty()
    }
}

#[async_trait]
impl PostClient for InMemoryPostClient {
    async fn fetch(&self, id: u64) -> Result<Post, ClientError> {
        let posts = self.posts.read().await;
        posts.get(&id).cloned().ok_or(ClientError::NotFound)
    }

    async fn create(&self, id: u64, post: Post) -> Result<Post, ClientError> {
        // Check and insert under one guard so concurrent creates cannot both win.
        let mut posts = self.posts.write().await;
        if posts.contains_key(&id) {
            return Err(ClientError::AlreadyExists);
        }
        posts.insert(id, post.clone());
        tracing::debug!(post_id = id, "post stored");
        Ok(post)
    }
}
