//! Call-counting PostClient for integration tests
//!
//! Wraps the real in-memory store and records every call so tests can assert
//! how many times the handlers reached the backend.

use async_trait::async_trait;
use post_service::{ClientError, InMemoryPostClient, Post, PostClient};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

#[derive(Default)]
pub struct CountingPostClient {
    inner: InMemoryPostClient,
    fetch_calls: AtomicUsize,
    create_calls: AtomicUsize,
    /// Ids passed to `create`, in call order
    created_ids: Mutex<Vec<u64>>,
}

impl CountingPostClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn created_ids(&self) -> Vec<u64> {
        self.created_ids.lock().unwrap().clone()
    }
}

#[async_trait]
impl PostClient for CountingPostClient {
    async fn fetch(&self, id: u64) -> Result<Post, ClientError> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        self.inner.fetch(id).await
    }

    async fn create(&self, id: u64, post: Post) -> Result<Post, ClientError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        self.created_ids.lock().unwrap().push(id);
        self.inner.create(id, post).await
    }
}
