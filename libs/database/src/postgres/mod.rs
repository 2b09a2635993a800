//! PostgreSQL connection pool and helpers

mod config;
mod connector;
mod health;
mod numeric;

pub use config::{PostgresConfig, TlsMode};
pub use connector::{connect_from_config, connect_with_options};
pub use health::check_health;
pub use numeric::Numeric;

// Re-export SeaORM types for convenience
pub use sea_orm::{ConnectOptions, DatabaseConnection, DbErr};
