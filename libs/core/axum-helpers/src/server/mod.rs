//! Server infrastructure: router assembly with API docs, health endpoints,
//! graceful shutdown and connection cleanup.
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router_with_docs, health_router};
//! use core_config::app_info;
//!
//! let router = create_router_with_docs(api_routes, ApiDoc::openapi())?;
//! let app = router.merge(health_router(app_info!()));
//! create_production_app(app, &config.server, Duration::from_secs(30), async {}).await?;
//! ```

pub mod app;
pub mod cleanup;
pub mod health;
pub mod shutdown;

pub use app::{build_router, create_production_app, create_router_with_docs, serve_with_coordinator};
pub use cleanup::close_postgres;
pub use health::{HealthCheckFuture, HealthResponse, health_router, run_health_checks};
pub use shutdown::{ShutdownCoordinator, shutdown_signal};
