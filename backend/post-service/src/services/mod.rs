/// Business logic layer for post-service
///
/// - Post client: the storage capability the HTTP handlers delegate to
pub mod posts;

pub use posts::{ClientError, InMemoryPostClient, PostClient};
