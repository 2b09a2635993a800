use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::not_found;
use crate::http::{cors_layer_from_env, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{Level, info, warn};
use utoipa_swagger_ui::SwaggerUi;

/// Path of the raw OpenAPI document
pub const OPENAPI_JSON_PATH: &str = "/swagger.json";

/// Path of the Swagger UI
pub const SWAGGER_UI_PATH: &str = "/api-docs";

/// Creates the application router with common middleware and documentation.
///
/// - `/swagger.json` serves the OpenAPI document, `/api-docs` the Swagger UI
/// - API routes are nested under `/api`
/// - unknown routes fall back to a JSON 404
/// - request tracing, security headers, CORS and compression layers
///
/// `CORS_ALLOWED_ORIGIN` must be set (comma-separated origins); startup fails
/// otherwise.
pub fn create_router_with_docs(
    apis: Router,
    openapi: utoipa::openapi::OpenApi,
) -> io::Result<Router> {
    let cors = cors_layer_from_env()?;
    Ok(build_router(apis, openapi, cors))
}

/// Assemble the router from already-built parts.
pub fn build_router(apis: Router, openapi: utoipa::openapi::OpenApi, cors: CorsLayer) -> Router {
    Router::new()
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_JSON_PATH, openapi))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors)
        .layer(CompressionLayer::new())
}

/// Serve `router` until SIGINT/SIGTERM, then run `cleanup`.
///
/// In-flight requests are drained before `cleanup` starts; `cleanup` itself is
/// bounded by `shutdown_timeout`.
///
/// ```ignore
/// create_production_app(router, &config.server, Duration::from_secs(30), async move {
///     close_postgres(db, "shop").await;
/// })
/// .await?;
/// ```
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    serve_with_coordinator(
        router,
        listener,
        ShutdownCoordinator::new(),
        shutdown_timeout,
        cleanup,
    )
    .await
}

/// [`create_production_app`] on an already bound listener and an external
/// coordinator, so shutdown can also be triggered programmatically.
pub async fn serve_with_coordinator<F>(
    router: Router,
    listener: TcpListener,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let signal = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { signal.wait_for_signal().await })
        .await
        .inspect_err(|e| tracing::error!("Server encountered an error: {:?}", e));

    info!("Starting cleanup tasks (timeout: {:?})", shutdown_timeout);
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(_) => info!("Cleanup completed successfully"),
        Err(_) => warn!(
            "Cleanup exceeded timeout of {:?}, forcing shutdown",
            shutdown_timeout
        ),
    }

    serve_result
}
