/// HTTP middleware for post-service
///
/// Access logging: method, URI, matched route pattern, status and latency,
/// emitted at `info` after the inner service has produced a response.
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::{Method, StatusCode};
use actix_web::Error;
use futures::future::LocalBoxFuture;
use std::future::{ready, Ready};
use std::time::Instant;

/// Wrap an `App` with this to get one access-log line per request
#[derive(Clone, Copy, Debug, Default)]
pub struct RequestLogging;

impl<S, B> Transform<S, ServiceRequest> for RequestLogging
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = RequestLoggingService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequestLoggingService { service }))
    }
}

/// Service produced by [`RequestLogging`] around the inner app service
pub struct RequestLoggingService<S> {
    service: S,
}

/// What is known about a request before it is dispatched
struct RequestLine {
    method: Method,
    uri: String,
    started: Instant,
}

impl RequestLine {
    fn capture(req: &ServiceRequest) -> Self {
        Self {
            method: req.method().clone(),
            uri: req.uri().to_string(),
            started: Instant::now(),
        }
    }

    fn log(&self, route: Option<String>, status: StatusCode) {
        tracing::info!(
            method = %self.method,
            uri = %self.uri,
            route = %route.as_deref().unwrap_or("-"),
            status = status.as_u16(),
            duration_ms = self.started.elapsed().as_millis() as u64,
            "request served"
        );
    }
}

impl<S, B> Service<ServiceRequest> for RequestLoggingService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let line = RequestLine::capture(&req);
        let fut = self.service.call(req);

        Box::pin(async move {
            let res = fut.await?;
            // Routing has run by now, so the matched pattern is available.
            line.log(res.request().match_pattern(), res.status());
            Ok(res)
        })
    }
}
