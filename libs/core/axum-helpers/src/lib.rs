//! # Axum Helpers
//!
//! Shared building blocks for the HTTP services in this workspace.
//!
//! - **[`server`]**: router assembly with API docs, health endpoints, graceful shutdown
//! - **[`http`]**: CORS and security header middleware
//! - **[`errors`]**: [`AppError`] and the JSON error body every failure renders to
//! - **[`extractors`]**: integer id path and JSON body extractors with JSON rejections
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router_with_docs, health_router};
//!
//! let router = create_router_with_docs(api_routes, ApiDoc::openapi())?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod errors;
pub mod extractors;
pub mod http;
pub mod server;

pub use errors::{AppError, ErrorCode, ErrorResponse};
pub use extractors::{AppJson, IdPath};
pub use http::{create_cors_layer, security_headers};
pub use server::{
    HealthCheckFuture, HealthResponse, ShutdownCoordinator, build_router, create_production_app,
    create_router_with_docs, health_router, run_health_checks, shutdown_signal,
};
