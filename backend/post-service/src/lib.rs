/// Post Service Library
///
/// HTTP façade over a pluggable post store. Requests to `/api/posts/{id}`
/// are translated into [`services::PostClient`] calls and every outcome is
/// written back as a `{code, message, path}` JSON envelope.
///
/// # Modules
///
/// - `handlers`: Post HTTP request handlers and route registration
/// - `models`: The `Post` record
/// - `services`: The `PostClient` capability and its in-memory store
/// - `middleware`: Request logging
/// - `response`: JSON envelope rendering
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod response;
pub mod services;

pub use config::Config;
pub use error::{ApiError, Result};
pub use models::Post;
pub use services::{ClientError, InMemoryPostClient, PostClient};
