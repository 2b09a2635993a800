//! Configuration for the Shop API

use core_config::{app_info, server::ServerConfig, AppInfo, FromEnv};
use database::postgres::PostgresConfig;

pub use core_config::Environment;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub database: PostgresConfig,
    pub server: ServerConfig,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let environment = Environment::from_env();
        let database = PostgresConfig::from_env()?;
        let server = ServerConfig::from_env()?;

        Ok(Self {
            app: app_info!(),
            database,
            server,
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_env_development_defaults() {
        temp_env::with_vars(
            [
                ("APP_ENV", None),
                ("DATABASE_URL", None),
                ("PGHOST", Some("db")),
                ("PORT", Some("3000")),
            ],
            || {
                let config = Config::from_env().unwrap();
                assert!(config.environment.is_development());
                assert_eq!(config.server.port, 3000);
                assert!(config.database.url().contains("@db:5432/"));
                assert_eq!(config.app.name, "shop_api");
            },
        );
    }

    #[test]
    fn test_from_env_production_needs_database_url() {
        temp_env::with_vars(
            [("APP_ENV", Some("production")), ("DATABASE_URL", None)],
            || {
                assert!(Config::from_env().is_err());
            },
        );
    }
}
