//! API routes module

pub mod health;
pub mod products;

use axum::Router;

use crate::state::AppState;

/// Routes served under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/products", products::router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use database::postgres::PostgresConfig;
    use http_body_util::BodyExt;
    use sea_orm::prelude::DateTime;
    use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, MockDatabase, Value};
    use std::collections::BTreeMap;
    use tower::ServiceExt;

    fn state(db: DatabaseConnection) -> AppState {
        AppState {
            config: Config {
                app: app_info!(),
                database: PostgresConfig::default(),
                server: ServerConfig::default(),
                environment: Environment::Development,
            },
            db,
        }
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .nest("/api", routes(&state))
            .merge(health::router(state))
    }

    async fn json_body(response: axum::response::Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_product_route_reads_from_postgres() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([
                ("id", Value::from(5)),
                ("description", Value::from("Desk lamp")),
                ("category", Value::from("home")),
                ("quantity", Value::from(0)),
                ("modified", Value::from(None::<DateTime>)),
                ("in_stock", Value::from(false)),
            ])]])
            .into_connection();

        let response = app(state(db))
            .oneshot(Request::get("/api/products/5").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_body(response).await;
        assert_eq!(body["id"], 5);
        assert_eq!(body["in_stock"], false);
    }

    #[tokio::test]
    async fn test_query_failure_is_500_without_cause() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("relation \"products\" does not exist".into())])
            .into_connection();

        let response = app(state(db))
            .oneshot(Request::get("/api/products").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = json_body(response).await;
        assert_eq!(body["message"], "Product query failed");
    }

    #[tokio::test]
    async fn test_ready_reports_database() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![BTreeMap::from([("?column?", Value::from(1i32))])]])
            .into_connection();

        let response = app(state(db))
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(json_body(response).await["database"], "connected");
    }

    #[tokio::test]
    async fn test_ready_fails_when_database_is_down() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection reset".into())])
            .into_connection();

        let response = app(state(db))
            .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
