//! Shared fixtures for post-service integration tests
#![allow(dead_code)]

pub mod counting_client;

use actix_web::dev::{Service, ServiceResponse};
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{test, web, App};
use post_service::handlers;
use post_service::middleware::RequestLogging;
use post_service::PostClient;
use std::sync::Arc;

pub use counting_client::CountingPostClient;

pub const HELLO_FORM: &[(&str, &str)] = &[
    ("title", "Hello World!"),
    ("description", "Lorem Ipsum Dolor Sit Amen."),
];

/// Build the service the same way `main` does, minus the tracing span layer
pub async fn init_app(
    client: Arc<dyn PostClient>,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = actix_web::Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::from(client))
            .wrap(RequestLogging)
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found)),
    )
    .await
}
