//! PostgreSQL implementation of [`ProductRepository`].
//!
//! Each operation is a single parameterized statement. `in_stock` is derived
//! in the projection so every path computes it the same way. Search text is
//! matched literally with `strpos`, so `%` and `_` are ordinary characters.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use sea_orm::{DatabaseConnection, DbBackend, FromQueryResult, Statement, Value};
use tracing::instrument;

use crate::error::ProductResult;
use crate::models::Product;
use crate::repository::ProductRepository;

pub(crate) const FIND_BY_ID_SQL: &str =
    "SELECT id, description, category, quantity, modified, quantity > 0 AS in_stock \
     FROM products WHERE id = $1";

pub(crate) const FIND_BY_CATEGORY_SQL: &str =
    "SELECT id, description, category, quantity, modified, quantity > 0 AS in_stock \
     FROM products WHERE category = $1 ORDER BY id";

pub(crate) const FIND_BY_QUERY_SQL: &str =
    "SELECT id, description, category, quantity, modified, quantity > 0 AS in_stock \
     FROM products WHERE strpos(LOWER(description), LOWER($1)) > 0 ORDER BY id";

pub(crate) const GET_ALL_SQL: &str =
    "SELECT id, description, category, quantity, modified, quantity > 0 AS in_stock \
     FROM products ORDER BY id";

pub(crate) const UPDATE_QUANTITY_SQL: &str =
    "UPDATE products SET quantity = quantity + $2, modified = now() WHERE id = $1 \
     RETURNING id, description, category, quantity, modified, quantity > 0 AS in_stock";

#[derive(Debug, FromQueryResult)]
struct ProductRow {
    id: i32,
    description: String,
    category: String,
    quantity: i32,
    modified: Option<NaiveDateTime>,
    in_stock: bool,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Self {
            id: row.id,
            description: row.description,
            category: row.category,
            quantity: row.quantity,
            modified: row.modified,
            in_stock: row.in_stock,
        }
    }
}

/// Product repository backed by the shared connection pool.
#[derive(Clone)]
pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn fetch_one(&self, sql: &str, values: Vec<Value>) -> ProductResult<Option<Product>> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, values);
        let row = ProductRow::find_by_statement(stmt).one(&self.db).await?;
        Ok(row.map(Product::from))
    }

    async fn fetch_many(&self, sql: &str, values: Vec<Value>) -> ProductResult<Option<Vec<Product>>> {
        let stmt = Statement::from_sql_and_values(DbBackend::Postgres, sql, values);
        let rows = ProductRow::find_by_statement(stmt).all(&self.db).await?;

        if rows.is_empty() {
            return Ok(None);
        }
        Ok(Some(rows.into_iter().map(Product::from).collect()))
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        self.fetch_one(FIND_BY_ID_SQL, vec![id.into()]).await
    }

    #[instrument(skip(self))]
    async fn find_by_category(&self, category: &str) -> ProductResult<Option<Vec<Product>>> {
        self.fetch_many(FIND_BY_CATEGORY_SQL, vec![category.into()]).await
    }

    #[instrument(skip(self))]
    async fn find_by_query(&self, query: &str) -> ProductResult<Option<Vec<Product>>> {
        self.fetch_many(FIND_BY_QUERY_SQL, vec![query.into()]).await
    }

    #[instrument(skip(self))]
    async fn get_all(&self) -> ProductResult<Option<Vec<Product>>> {
        self.fetch_many(GET_ALL_SQL, Vec::new()).await
    }

    #[instrument(skip(self))]
    async fn update_quantity(&self, id: i32, delta: i32) -> ProductResult<Option<Product>> {
        let product = self
            .fetch_one(UPDATE_QUANTITY_SQL, vec![id.into(), delta.into()])
            .await?;

        if let Some(product) = &product {
            tracing::debug!(product_id = id, quantity = product.quantity, "Updated quantity");
        }
        Ok(product)
    }
}
