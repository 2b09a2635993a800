//! Database library providing the PostgreSQL connection pool and helpers
//!
//! # Features
//!
//! - `postgres` (default) - PostgreSQL support with SeaORM
//! - `config` - Configuration support with `core_config::FromEnv`
//! - `all` - All features
//!
//! The crate's own tests always build with `config` enabled.
//!
//! # Numeric columns
//!
//! Row structs decode `NUMERIC`/`DECIMAL` columns as native floats by declaring
//! the field as [`postgres::Numeric`] instead of a decimal type.
//!
//! # Example
//!
//! ```ignore
//! use core_config::FromEnv;
//! use database::postgres::{self, PostgresConfig};
//!
//! let config = PostgresConfig::from_env()?;
//! let db = postgres::connect_from_config(config).await?;
//! postgres::check_health(&db).await?;
//! ```

pub mod common;

#[cfg(feature = "postgres")]
pub mod postgres;

pub use common::DatabaseError;
