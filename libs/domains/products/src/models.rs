use chrono::{DateTime, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::error::{ProductError, ProductResult};

/// Product entity.
///
/// Every instance satisfies `!name.is_empty() && price > 0`. `created_at` is
/// set once at construction and carried unchanged through updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub created_at: DateTime<Utc>,
}

impl Product {
    /// Build a new product with a fresh v7 id and the current time.
    pub fn new(name: impl Into<String>, price: f64) -> ProductResult<Self> {
        let name = name.into();
        check(&name, price)?;

        Ok(Self {
            id: Uuid::now_v7(),
            name,
            price,
            // timestamptz precision
            created_at: Utc::now().trunc_subsecs(6),
        })
    }

    /// Re-apply the construction rules to an instance built some other way.
    pub fn validate(&self) -> ProductResult<()> {
        check(&self.name, self.price)
    }
}

fn check(name: &str, price: f64) -> ProductResult<()> {
    if name.is_empty() {
        return Err(ProductError::NameRequired);
    }
    if price == 0.0 {
        return Err(ProductError::PriceRequired);
    }
    if !price.is_finite() || price < 0.0 {
        return Err(ProductError::InvalidPrice);
    }
    Ok(())
}

/// Request body for `POST /products`.
///
/// Missing fields default to empty values so they surface as the entity's
/// own `name is required` / `price is required` errors.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Request body for `PUT /products/{id}`. Replaces name and price.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateProduct {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub price: f64,
}

/// Query string for `GET /products`.
///
/// Values are kept as raw strings; unparsable ones fall back to the defaults
/// when converted into a [`PageRequest`](crate::pagination::PageRequest).
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListProductsQuery {
    /// Zero-based page index (default 0)
    pub page: Option<String>,
    /// Page size (default 10)
    pub limit: Option<String>,
    /// `asc` (default) or `desc`, by creation time
    pub sort: Option<String>,
}
