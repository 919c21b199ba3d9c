/// HTTP handlers for post endpoints
///
/// Routes:
/// - `GET  /api/posts/{id}`: fetch a stored post
/// - `POST /api/posts/{id}`: create a post from a form body
pub mod posts;

use actix_web::web;

pub use posts::{create_post, get_post, method_not_allowed, not_found};

/// Register the post routes and their extractor settings.
///
/// The caller supplies the `web::Data<dyn PostClient>` and the app-level
/// default service.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(posts::path_config())
        .app_data(posts::form_config())
        .service(
            web::resource(r"/api/posts/{id:\d+}")
                .name("post")
                .route(web::get().to(get_post))
                .route(web::post().to(create_post))
                .default_service(web::to(method_not_allowed)),
        );
}
