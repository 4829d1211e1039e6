use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use sea_orm::DbErr;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("name is required")]
    NameRequired,

    #[error("price is required")]
    PriceRequired,

    #[error("invalid price")]
    InvalidPrice,

    #[error("product {0} not found")]
    NotFound(Uuid),

    #[error("storage error: {0}")]
    Storage(String),
}

impl ProductError {
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ProductError::NameRequired | ProductError::PriceRequired | ProductError::InvalidPrice
        )
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<DbErr> for ProductError {
    fn from(err: DbErr) -> Self {
        ProductError::Storage(err.to_string())
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            e if e.is_validation() => AppError::BadRequest(e.to_string()),
            ProductError::NotFound(id) => AppError::NotFound(format!("product {id} not found")),
            e => AppError::InternalServerError(e.to_string()),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
