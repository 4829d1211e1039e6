use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Order, QueryOrder, QuerySelect,
};
use uuid::Uuid;

use crate::{
    entity,
    error::{ProductError, ProductResult},
    models::Product,
    pagination::PageRequest,
    repository::ProductRepository,
};

/// Postgres bounds LIMIT/OFFSET to a signed 64-bit value.
const MAX_SQL_ROWS: u64 = i64::MAX as u64;

pub struct PgProductRepository {
    db: DatabaseConnection,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, product: Product) -> ProductResult<Product> {
        let model = entity::ActiveModel::from(&product).insert(&self.db).await?;

        tracing::info!(product_id = %model.id, "Created product");
        Ok(model.into())
    }

    async fn find_by_id(&self, id: Uuid) -> ProductResult<Product> {
        entity::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .map(Into::into)
            .ok_or(ProductError::NotFound(id))
    }

    async fn update(&self, product: Product) -> ProductResult<Product> {
        self.find_by_id(product.id).await?;

        let model = entity::ActiveModel::from(&product)
            .update(&self.db)
            .await
            .map_err(|e| match e {
                // Deleted between the existence check and the write
                DbErr::RecordNotUpdated => ProductError::NotFound(product.id),
                other => other.into(),
            })?;

        tracing::info!(product_id = %model.id, "Updated product");
        Ok(model.into())
    }

    async fn delete(&self, id: Uuid) -> ProductResult<()> {
        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;

        if result.rows_affected > 0 {
            tracing::info!(product_id = %id, "Deleted product");
        }
        Ok(())
    }

    async fn find_all(&self, page: PageRequest) -> ProductResult<Vec<Product>> {
        let order: Order = page.sort.into();

        let models = entity::Entity::find()
            .order_by(entity::Column::CreatedAt, order.clone())
            .order_by(entity::Column::Id, order)
            .limit(page.limit.min(MAX_SQL_ROWS))
            .offset(page.offset().min(MAX_SQL_ROWS))
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }
}
