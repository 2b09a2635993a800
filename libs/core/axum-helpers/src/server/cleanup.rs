//! Connection cleanup run during graceful shutdown.

use tracing::{error, info};

/// Close a SeaORM connection pool, logging the outcome.
///
/// ```ignore
/// close_postgres(db, "shop").await;
/// ```
pub async fn close_postgres(db: sea_orm::DatabaseConnection, name: &str) {
    match db.close().await {
        Ok(_) => info!("PostgreSQL connection '{}' closed successfully", name),
        Err(e) => error!("Error closing PostgreSQL connection '{}': {}", name, e),
    }
}
