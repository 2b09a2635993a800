use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::{info, instrument, warn};

use super::{PostgresConfig, TlsMode};

/// Open the connection pool described by `config`.
///
/// The pool is created once at startup and shared by cloning the returned
/// handle. There is no retry: a failure here is returned to the caller, and
/// later connection failures surface from the query that hit them.
///
/// # Example
/// ```ignore
/// use core_config::FromEnv;
/// use database::postgres::{PostgresConfig, connect_from_config};
///
/// let db = connect_from_config(PostgresConfig::from_env()?).await?;
/// ```
#[instrument(skip_all, fields(tls = ?config.tls, max_connections = config.max_connections))]
pub async fn connect_from_config(config: PostgresConfig) -> Result<DatabaseConnection, DbErr> {
    if config.tls == TlsMode::Unverified {
        warn!("PostgreSQL TLS certificate verification is disabled (DB_ACCEPT_INVALID_CERTS)");
    }

    connect_with_options(config.into_connect_options()).await
}

/// Connect with custom connection options
pub async fn connect_with_options(options: ConnectOptions) -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect(options).await?;
    info!("Successfully connected to PostgreSQL database");
    Ok(db)
}
