use actix_web::{
    middleware::{NormalizePath, TrailingSlash},
    web, App, HttpServer,
};
use anyhow::Context;
use post_service::handlers;
use post_service::middleware::RequestLogging;
use post_service::services::{InMemoryPostClient, PostClient};
use post_service::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,actix_web=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Post Service
///
/// Serves `GET` and `POST` on `/api/posts/{id}` in front of an in-memory
/// post store. The store is created here and handed to every worker, so all
/// workers share one map for the process lifetime.
///
/// Listens on 0.0.0.0:8080 unless `POST_SERVICE_HOST` / `POST_SERVICE_PORT`
/// say otherwise. SIGINT and SIGTERM trigger actix's graceful shutdown.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = Config::from_env().context("Failed to load configuration")?;

    tracing::info!("Starting post-service v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {}", config.app.env);

    let store = Arc::new(InMemoryPostClient::new());
    tracing::info!("In-memory post store ready ({} posts)", store.len().await);

    let client: Arc<dyn PostClient> = store;
    let client = web::Data::from(client);

    let bind_address = config.app.bind_address();
    tracing::info!("Starting HTTP server at {}", bind_address);

    let mut server = HttpServer::new(move || {
        App::new()
            .app_data(client.clone())
            .wrap(RequestLogging)
            .wrap(tracing_actix_web::TracingLogger::default())
            .wrap(NormalizePath::new(TrailingSlash::Trim))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    });

    if let Some(workers) = config.app.workers {
        tracing::info!("HTTP workers: {}", workers);
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("Failed to bind {}", bind_address))?
        .run()
        .await
        .context("HTTP server terminated with error")?;

    tracing::info!("post-service shutting down");
    Ok(())
}
