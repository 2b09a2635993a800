use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product {0} not found")]
    NotFound(i32),

    #[error("No products in category '{0}'")]
    CategoryNotFound(String),

    #[error("No products match '{0}'")]
    NoMatches(String),

    #[error("No products found")]
    Empty,

    #[error("Database connection error: {0}")]
    Connection(String),

    #[error("Database query error: {0}")]
    Query(String),
}

impl ProductError {
    /// Whether retrying the same call later may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, ProductError::Connection(_))
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        match err {
            DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => ProductError::Connection(err.to_string()),
            other => ProductError::Query(other.to_string()),
        }
    }
}

/// Convert ProductError to AppError for standardized error responses
impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::NotFound(_)
            | ProductError::CategoryNotFound(_)
            | ProductError::NoMatches(_)
            | ProductError::Empty => AppError::NotFound(err.to_string()),
            ProductError::Connection(cause) => {
                tracing::error!(%cause, "product repository connection failure");
                AppError::InternalServerError("Product catalog is unavailable".to_string())
            }
            ProductError::Query(cause) => {
                tracing::error!(%cause, "product repository query failure");
                AppError::InternalServerError("Product query failed".to_string())
            }
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        let app_error: AppError = self.into();
        app_error.into_response()
    }
}
