use sea_orm::ConnectOptions;
use std::time::Duration;
use tracing::log::LevelFilter;

#[cfg(feature = "config")]
use core_config::{ConfigError, Environment, FromEnv, env_or_default, env_parse, env_required};

/// How the pool negotiates TLS with the server.
///
/// Certificate verification is a separate decision from requiring TLS: only
/// [`TlsMode::Unverified`] accepts a server certificate that does not verify.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TlsMode {
    /// Leave the URL untouched (any `sslmode` it carries applies)
    FromUrl,
    /// Plain TCP
    Disabled,
    /// TLS required, certificate and host name verified
    Verified,
    /// TLS required, certificate not verified
    Unverified,
}

impl TlsMode {
    /// Resolve the mode from the two configuration flags
    pub fn resolve(ssl: bool, accept_invalid_certs: bool) -> Self {
        match (ssl, accept_invalid_certs) {
            (false, _) => TlsMode::Disabled,
            (true, false) => TlsMode::Verified,
            (true, true) => TlsMode::Unverified,
        }
    }

    /// The libpq `sslmode` value for this mode
    pub fn sslmode(&self) -> Option<&'static str> {
        match self {
            TlsMode::FromUrl => None,
            TlsMode::Disabled => Some("disable"),
            TlsMode::Verified => Some("verify-full"),
            TlsMode::Unverified => Some("require"),
        }
    }
}

/// PostgreSQL connection pool configuration
///
/// Construct it manually with [`PostgresConfig::new`] or
/// [`PostgresConfig::from_parts`], or load it from the environment with the
/// `config` feature.
///
/// # Example
///
/// ```ignore
/// use database::postgres::{PostgresConfig, TlsMode};
///
/// let config = PostgresConfig::from_parts("localhost", 5432, "shop", "secret", "shop")
///     .with_tls(TlsMode::Disabled);
/// let options = config.into_connect_options();
/// ```
#[derive(Clone, Debug)]
pub struct PostgresConfig {
    /// Database connection URL
    pub url: String,

    /// TLS negotiation applied on top of the URL
    pub tls: TlsMode,

    /// Maximum number of connections in the pool
    pub max_connections: u32,

    /// Minimum number of idle connections kept open
    pub min_connections: u32,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// Connection acquire timeout in seconds
    pub acquire_timeout_secs: u64,

    /// Connection idle timeout in seconds
    pub idle_timeout_secs: u64,

    /// Connection max lifetime in seconds
    pub max_lifetime_secs: u64,

    /// Enable SQL statement logging
    pub sqlx_logging: bool,

    /// SQL logging level
    pub sqlx_logging_level: LevelFilter,
}

impl PostgresConfig {
    /// Create a config for a connection URL with default pool settings
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Self::default()
        }
    }

    /// Build the URL from discrete connection parameters.
    ///
    /// User and password are percent-encoded so reserved characters survive.
    pub fn from_parts(host: &str, port: u16, user: &str, password: &str, database: &str) -> Self {
        Self::new(format!(
            "postgres://{}:{}@{}:{}/{}",
            urlencoding::encode(user),
            urlencoding::encode(password),
            host,
            port,
            database
        ))
    }

    pub fn with_tls(mut self, tls: TlsMode) -> Self {
        self.tls = tls;
        self
    }

    pub fn with_pool_size(mut self, max_connections: u32, min_connections: u32) -> Self {
        self.max_connections = max_connections;
        self.min_connections = min_connections;
        self
    }

    /// The URL handed to the driver, with `sslmode` set from [`TlsMode`].
    ///
    /// Any `sslmode` already present in the URL is replaced.
    pub fn connection_url(&self) -> String {
        let Some(mode) = self.tls.sslmode() else {
            return self.url.clone();
        };

        let sslmode = format!("sslmode={}", mode);
        let (base, query) = match self.url.split_once('?') {
            Some((base, query)) => (base, query),
            None => (self.url.as_str(), ""),
        };

        let mut params: Vec<&str> = query
            .split('&')
            .filter(|param| !param.is_empty() && !param.starts_with("sslmode="))
            .collect();
        params.push(&sslmode);

        format!("{}?{}", base, params.join("&"))
    }

    /// Convert this config into SeaORM ConnectOptions
    pub fn into_connect_options(self) -> ConnectOptions {
        let mut opt = ConnectOptions::new(self.connection_url());
        opt.max_connections(self.max_connections)
            .min_connections(self.min_connections)
            .connect_timeout(Duration::from_secs(self.connect_timeout_secs))
            .acquire_timeout(Duration::from_secs(self.acquire_timeout_secs))
            .idle_timeout(Duration::from_secs(self.idle_timeout_secs))
            .max_lifetime(Duration::from_secs(self.max_lifetime_secs))
            .sqlx_logging(self.sqlx_logging)
            .sqlx_logging_level(self.sqlx_logging_level);
        opt
    }

    /// Get a reference to the configured URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Default for PostgresConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            tls: TlsMode::FromUrl,
            max_connections: 10,
            min_connections: 0,
            connect_timeout_secs: 30,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            max_lifetime_secs: 1800,
            sqlx_logging: true,
            sqlx_logging_level: LevelFilter::Debug,
        }
    }
}

/// Load PostgresConfig from environment variables
///
/// Connection target:
/// - production (`APP_ENV=production`): `DATABASE_URL` (required)
/// - development: `PGHOST` (localhost), `PGPORT` (5432), `PGUSER` (postgres),
///   `PGPASSWORD` (empty), `PGDATABASE` (postgres)
///
/// TLS:
/// - `DB_SSL` (default: true in production, false in development)
/// - `DB_ACCEPT_INVALID_CERTS` (default: false) - skip server certificate
///   verification when TLS is on
///
/// Pool:
/// - `DB_MAX_CONNECTIONS` (10), `DB_MIN_CONNECTIONS` (0)
/// - `DB_CONNECT_TIMEOUT_SECS` (30), `DB_ACQUIRE_TIMEOUT_SECS` (30)
/// - `DB_IDLE_TIMEOUT_SECS` (600), `DB_MAX_LIFETIME_SECS` (1800)
/// - `DB_SQLX_LOGGING` (true)
#[cfg(feature = "config")]
impl FromEnv for PostgresConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let environment = Environment::from_env();

        let base = if environment.is_production() {
            Self::new(env_required("DATABASE_URL")?)
        } else {
            Self::from_parts(
                &env_or_default("PGHOST", "localhost"),
                env_parse("PGPORT", "5432")?,
                &env_or_default("PGUSER", "postgres"),
                &env_or_default("PGPASSWORD", ""),
                &env_or_default("PGDATABASE", "postgres"),
            )
        };

        let ssl_default = if environment.is_production() { "true" } else { "false" };
        let ssl = env_parse("DB_SSL", ssl_default)?;
        let accept_invalid_certs = env_parse("DB_ACCEPT_INVALID_CERTS", "false")?;

        let defaults = Self::default();
        Ok(Self {
            tls: TlsMode::resolve(ssl, accept_invalid_certs),
            max_connections: env_parse(
                "DB_MAX_CONNECTIONS",
                &defaults.max_connections.to_string(),
            )?,
            min_connections: env_parse(
                "DB_MIN_CONNECTIONS",
                &defaults.min_connections.to_string(),
            )?,
            connect_timeout_secs: env_parse(
                "DB_CONNECT_TIMEOUT_SECS",
                &defaults.connect_timeout_secs.to_string(),
            )?,
            acquire_timeout_secs: env_parse(
                "DB_ACQUIRE_TIMEOUT_SECS",
                &defaults.acquire_timeout_secs.to_string(),
            )?,
            idle_timeout_secs: env_parse(
                "DB_IDLE_TIMEOUT_SECS",
                &defaults.idle_timeout_secs.to_string(),
            )?,
            max_lifetime_secs: env_parse(
                "DB_MAX_LIFETIME_SECS",
                &defaults.max_lifetime_secs.to_string(),
            )?,
            sqlx_logging: env_parse("DB_SQLX_LOGGING", "true")?,
            ..base
        })
    }
}
