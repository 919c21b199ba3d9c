/// Post handlers - HTTP endpoints for post operations
use crate::error::{ApiError, Result, BAD_REQUEST};
use crate::models::Post;
use crate::response;
use crate::services::PostClient;
use actix_web::{http::StatusCode, web, HttpRequest, HttpResponse};

/// Largest url-encoded body accepted on create (10 MiB)
pub const FORM_LIMIT: usize = 10 * 1024 * 1024;

/// Canonical path of a post, echoed back in every envelope
pub fn post_path(id: u64) -> String {
    format!("/api/posts/{}", id)
}

/// Envelope path for a request: canonical when the id segment parses,
/// the raw request path otherwise.
pub fn request_path(req: &HttpRequest) -> String {
    req.match_info()
        .get("id")
        .and_then(|raw| raw.parse::<u64>().ok())
        .map(post_path)
        .unwrap_or_else(|| req.path().to_string())
}

/// Fields read from the `POST /api/posts/{id}` form body
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CreatePostForm {
    pub title: String,
    pub description: String,
}

impl CreatePostForm {
    /// Pick `title` and `description` out of decoded pairs.
    ///
    /// A repeated key keeps its first value; absent keys stay empty.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        let mut title = None;
        let mut description = None;

        for (key, value) in pairs {
            match key.as_str() {
                "title" if title.is_none() => title = Some(value),
                "description" if description.is_none() => description = Some(value),
                _ => {}
            }
        }

        Self {
            title: title.unwrap_or_default(),
            description: description.unwrap_or_default(),
        }
    }
}

/// Get a post by ID
///
/// Client failures are reported as a generic "Bad Request"; the actual error
/// only goes to the debug log.
pub async fn get_post(client: web::Data<dyn PostClient>, id: web::Path<u64>) -> Result<HttpResponse> {
    let id = id.into_inner();
    let path = post_path(id);

    let post = client.fetch(id).await.map_err(|e| {
        tracing::debug!(post_id = id, error = %e, "post fetch failed");
        ApiError::bad_request(BAD_REQUEST, &path)
    })?;

    Ok(response::envelope(StatusCode::OK, &post, &path))
}

/// Create a new post under the ID from the path
pub async fn create_post(
    client: web::Data<dyn PostClient>,
    id: web::Path<u64>,
    form: web::Form<Vec<(String, String)>>,
) -> Result<HttpResponse> {
    let id = id.into_inner();
    let path = post_path(id);
    let CreatePostForm { title, description } = CreatePostForm::from_pairs(form.into_inner());

    let saved = client
        .create(id, Post { id, title, description })
        .await
        .map_err(|e| {
            tracing::info!(post_id = id, error = %e, "post create rejected");
            ApiError::bad_request(e.to_string(), &path)
        })?;

    Ok(response::envelope(StatusCode::CREATED, &saved, &path))
}

/// Fallback for methods other than GET/POST on a post resource
pub async fn method_not_allowed(req: HttpRequest) -> Result<HttpResponse> {
    Err(ApiError::MethodNotAllowed {
        path: request_path(&req),
    })
}

/// Fallback for unknown paths
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse> {
    Err(ApiError::NotFound {
        path: req.path().to_string(),
    })
}

/// Path extractor settings: an id that overflows `u64` becomes a 400 envelope
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, req| {
        tracing::debug!(path = %req.path(), error = %err, "invalid post id");
        ApiError::bad_request(BAD_REQUEST, request_path(req)).into()
    })
}

/// Form extractor settings: bodies up to [`FORM_LIMIT`], undecodable ones
/// become a 400 envelope
pub fn form_config() -> web::FormConfig {
    web::FormConfig::default().limit(FORM_LIMIT).error_handler(|err, req| {
        tracing::debug!(path = %req.path(), error = %err, "invalid post form");
        ApiError::bad_request(BAD_REQUEST, request_path(req)).into()
    })
}
