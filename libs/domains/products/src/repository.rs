use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{ProductError, ProductResult};
use crate::models::Product;
use crate::pagination::PageRequest;

/// Persistence for products.
///
/// Every storage engine implements all five operations. `update` is a full
/// overwrite of an existing record and `delete` of a missing id succeeds.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Insert a new product
    async fn create(&self, product: Product) -> ProductResult<Product>;

    /// Fetch a product, `NotFound` if absent
    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product>;

    /// Overwrite an existing product, `NotFound` if absent
    async fn update(&self, product: Product) -> ProductResult<Product>;

    /// Remove a product
    async fn delete(&self, id: Uuid) -> ProductResult<()>;

    /// One page of products ordered by creation time
    async fn find_all(&self, page: PageRequest) -> ProductResult<Vec<Product>>;
}

/// In-memory implementation of ProductRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryProductRepository {
    products: Arc<RwLock<HashMap<Uuid, Product>>>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let mut products = self.products.write().await;

        if products.contains_key(&product.id) {
            return Err(ProductError::Storage(format!(
                "product {} already exists",
                product.id
            )));
        }

        products.insert(product.id, product.clone());
        tracing::info!(product_id = %product.id, "Created product");
        Ok(product)
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        let products = self.products.read().await;
        products.get(&id).cloned().ok_or(ProductError::NotFound(id))
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        self.find_by_id(product.id).await?;

        let mut products = self.products.write().await;
        products.insert(product.id, product.clone());
        tracing::info!(product_id = %product.id, "Updated product");
        Ok(product)
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let mut products = self.products.write().await;
        if products.remove(&id).is_some() {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> ProductResult<Vec<Product>> {
        let products = self.products.read().await;
        Ok(page.slice(products.values().cloned().collect()))
    }
}
