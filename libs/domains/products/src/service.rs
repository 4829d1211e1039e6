use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use crate::error::ProductResult;
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::pagination::PageRequest;
use crate::repository::ProductRepository;

/// Service layer for Product business logic
#[derive(Clone)]
pub struct ProductService<R: ProductRepository> {
    repository: Arc<R>,
}

impl<R: ProductRepository> ProductService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self))]
    pub async fn create_product(&self, input: CreateProduct) -> ProductResult<Product> {
        let product = Product::new(input.name, input.price)?;
        self.repository.create(product).await
    }

    #[instrument(skip(self))]
    pub async fn get_product(&self, id: Uuid) -> ProductResult<Product> {
        self.repository.find_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_products(&self, page: PageRequest) -> ProductResult<Vec<Product>> {
        self.repository.find_all(page).await
    }

    /// Replace name and price. Identity and `created_at` come from the stored record.
    #[instrument(skip(self))]
    pub async fn update_product(&self, id: Uuid, input: UpdateProduct) -> ProductResult<Product> {
        let existing = self.repository.find_by_id(id).await?;

        let product = Product {
            name: input.name,
            price: input.price,
            ..existing
        };
        product.validate()?;

        self.repository.update(product).await
    }

    #[instrument(skip(self))]
    pub async fn delete_product(&self, id: Uuid) -> ProductResult<()> {
        self.repository.find_by_id(id).await?;
        self.repository.delete(id).await
    }
}
