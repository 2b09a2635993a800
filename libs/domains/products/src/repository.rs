use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;

/// Repository trait for Product persistence
///
/// Every lookup returns `None` when nothing matches, sequences included: a
/// returned `Vec` is never empty. Sequences are ordered by `id`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Get a product by ID
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>>;

    /// Products whose category equals `category` exactly
    async fn find_by_category(&self, category: &str) -> ProductResult<Option<Vec<Product>>>;

    /// Products whose description contains `query`, ignoring case.
    ///
    /// `query` is matched literally; `%` and `_` are not wildcards.
    async fn find_by_query(&self, query: &str) -> ProductResult<Option<Vec<Product>>>;

    /// Every product
    async fn get_all(&self) -> ProductResult<Option<Vec<Product>>>;

    /// Add `delta` to the quantity of product `id` and stamp `modified`.
    ///
    /// Returns the updated product, or `None` if no row has that id.
    async fn update_quantity(&self, id: i32, delta: i32) -> ProductResult<Option<Product>>;
}

/// In-memory implementation of ProductRepository (for testing and demos)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<i32, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_products(products: impl IntoIterator<Item = Product>) -> Self {
        let products = products.into_iter().map(|p| (p.id, p)).collect();
        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }

    /// Insert or replace a product row.
    pub async fn insert(&self, product: Product) {
        self.products.write().await.insert(product.id, product);
    }

    async fn select<F>(&self, predicate: F) -> Option<Vec<Product>>
    where
        F: Fn(&Product) -> bool,
    {
        let products = self.products.read().await;
        let mut result: Vec<Product> = products
            .values()
            .filter(|p| predicate(*p))
            .cloned()
            .map(with_stock_flag)
            .collect();

        if result.is_empty() {
            return None;
        }
        result.sort_by_key(|p| p.id);
        Some(result)
    }
}

fn with_stock_flag(mut product: Product) -> Product {
    product.in_stock = product.quantity > 0;
    product
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn find_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned().map(with_stock_flag))
    }

    async fn find_by_category(&self, category: &str) -> ProductResult<Option<Vec<Product>>> {
        Ok(self.select(|p| p.category == category).await)
    }

    async fn find_by_query(&self, query: &str) -> ProductResult<Option<Vec<Product>>> {
        let needle = query.to_lowercase();
        Ok(self
            .select(|p| p.description.to_lowercase().contains(&needle))
            .await)
    }

    async fn get_all(&self) -> ProductResult<Option<Vec<Product>>> {
        Ok(self.select(|_| true).await)
    }

    async fn update_quantity(&self, id: i32, delta: i32) -> ProductResult<Option<Product>> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(&id) else {
            return Ok(None);
        };

        product.quantity = product
            .quantity
            .checked_add(delta)
            .ok_or_else(|| ProductError::Query("integer out of range".to_string()))?;
        product.modified = Some(Utc::now().naive_utc());
        product.in_stock = product.quantity > 0;

        tracing::info!(product_id = id, delta, quantity = product.quantity, "Updated quantity");
        Ok(Some(product.clone()))
    }
}
