//! Product Service - turns absent repository results into not-found errors

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::repository::ProductRepository;

/// Product service used by the HTTP layer
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new ProductService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: i32) -> ProductResult<Product> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self) -> ProductResult<Vec<Product>> {
        self.repository.get_all().await?.ok_or(ProductError::Empty)
    }

    #[instrument(skip(self))]
    pub async fn list_by_category(&self, category: &str) -> ProductResult<Vec<Product>> {
        self.repository
            .find_by_category(category)
            .await?
            .ok_or_else(|| ProductError::CategoryNotFound(category.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn search_products(&self, query: &str) -> ProductResult<Vec<Product>> {
        self.repository
            .find_by_query(query)
            .await?
            .ok_or_else(|| ProductError::NoMatches(query.to_string()))
    }

    /// Apply a signed quantity change and return the updated product
    #[instrument(skip(self))]
    pub async fn adjust_quantity(&self, id: i32, delta: i32) -> ProductResult<Product> {
        let product = self
            .repository
            .update_quantity(id, delta)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        tracing::info!(
            product_id = id,
            quantity = product.quantity,
            in_stock = product.in_stock,
            "Adjusted product quantity"
        );
        Ok(product)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockProductRepository;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_get_product_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_id()
            .with(eq(1))
            .returning(|id| Ok(Some(Product::new(id, "Widget", "misc", 3))));

        let service = ProductService::new(mock_repo);
        let product = service.get_product(1).await.unwrap();

        assert_eq!(product.id, 1);
    }

    #[tokio::test]
    async fn test_get_product_missing_is_not_found() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_find_by_id().returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.get_product(9).await.unwrap_err();

        assert!(matches!(err, ProductError::NotFound(9)));
    }

    #[tokio::test]
    async fn test_list_products_empty_catalog() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_get_all().times(1).returning(|| Ok(None));

        let service = ProductService::new(mock_repo);

        assert!(matches!(
            service.list_products().await.unwrap_err(),
            ProductError::Empty
        ));
    }

    #[tokio::test]
    async fn test_list_by_category_passes_category_through() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_category()
            .withf(|category| category == "Toys")
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.list_by_category("Toys").await.unwrap_err();

        assert!(matches!(err, ProductError::CategoryNotFound(ref c) if c == "Toys"));
    }

    #[tokio::test]
    async fn test_search_products_no_matches() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_find_by_query()
            .withf(|query| query == "teapot")
            .returning(|_| Ok(None));

        let service = ProductService::new(mock_repo);
        let err = service.search_products("teapot").await.unwrap_err();

        assert!(matches!(err, ProductError::NoMatches(_)));
    }

    #[tokio::test]
    async fn test_adjust_quantity_forwards_delta() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_update_quantity()
            .with(eq(4), eq(-2))
            .times(1)
            .returning(|id, _| Ok(Some(Product::new(id, "Widget", "misc", 0))));

        let service = ProductService::new(mock_repo);
        let product = service.adjust_quantity(4, -2).await.unwrap();

        assert!(!product.in_stock);
    }

    #[tokio::test]
    async fn test_adjust_quantity_missing_product() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo.expect_update_quantity().returning(|_, _| Ok(None));

        let service = ProductService::new(mock_repo);

        assert!(matches!(
            service.adjust_quantity(4, 1).await.unwrap_err(),
            ProductError::NotFound(4)
        ));
    }

    #[tokio::test]
    async fn test_repository_errors_propagate() {
        let mut mock_repo = MockProductRepository::new();
        mock_repo
            .expect_get_all()
            .returning(|| Err(ProductError::Connection("pool timed out".into())));

        let service = ProductService::new(mock_repo);
        let err = service.list_products().await.unwrap_err();

        assert!(err.is_transient());
    }
}
