/// JSON response envelope shared by every endpoint
///
/// Success and failure bodies have the same shape:
/// `{"code": <status>, "message": <string|object>, "path": <string>}`.
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

/// Content type sent with every envelope
pub const JSON_UTF8: &str = "application/json; charset=UTF-8";

#[derive(Debug, Serialize)]
pub struct Envelope<'a, T: Serialize + ?Sized> {
    pub code: u16,
    pub message: &'a T,
    pub path: &'a str,
}

/// Build an HTTP response carrying `message` inside the envelope
pub fn envelope<T: Serialize + ?Sized>(status: StatusCode, message: &T, path: &str) -> HttpResponse {
    let body = Envelope {
        code: status.as_u16(),
        message,
        path,
    };

    match serde_json::to_string(&body) {
        Ok(json) => HttpResponse::build(status).content_type(JSON_UTF8).body(json),
        Err(e) => {
            tracing::error!(%path, "envelope serialization failed: {}", e);
            HttpResponse::InternalServerError().finish()
        }
    }
}
