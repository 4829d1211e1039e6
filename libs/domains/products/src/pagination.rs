//! Offset/limit pagination over products ordered by creation time.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use utoipa::ToSchema;

use crate::models::{ListProductsQuery, Product};

pub const DEFAULT_PAGE: u64 = 0;
pub const DEFAULT_LIMIT: u64 = 10;

/// Direction of the `created_at` ordering.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Exact, case-sensitive match on `asc`/`desc`; anything else is ascending.
    pub fn from_query(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl From<SortOrder> for sea_orm::Order {
    fn from(order: SortOrder) -> Self {
        match order {
            SortOrder::Asc => sea_orm::Order::Asc,
            SortOrder::Desc => sea_orm::Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u64,
    pub limit: u64,
    pub sort: SortOrder,
}

impl PageRequest {
    pub fn new(page: u64, limit: u64, sort: SortOrder) -> Self {
        Self { page, limit, sort }
    }

    /// Index of the first record on this page.
    pub fn offset(&self) -> u64 {
        self.page.saturating_mul(self.limit)
    }

    /// Order `products` by `(created_at, id)` in the requested direction and
    /// cut out this page.
    pub fn slice(&self, mut products: Vec<Product>) -> Vec<Product> {
        products.sort_by(|a, b| (a.created_at, a.id).cmp(&(b.created_at, b.id)));
        if self.sort == SortOrder::Desc {
            products.reverse();
        }

        let offset = usize::try_from(self.offset()).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);

        products.into_iter().skip(offset).take(limit).collect()
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE, DEFAULT_LIMIT, SortOrder::Asc)
    }
}

impl From<ListProductsQuery> for PageRequest {
    fn from(query: ListProductsQuery) -> Self {
        let page = query
            .page
            .as_deref()
            .and_then(parse_saturating)
            .unwrap_or(DEFAULT_PAGE);

        let limit = query
            .limit
            .as_deref()
            .and_then(parse_saturating)
            .filter(|&l| l > 0)
            .unwrap_or(DEFAULT_LIMIT);

        let sort = query
            .sort
            .as_deref()
            .map(SortOrder::from_query)
            .unwrap_or_default();

        Self::new(page, limit, sort)
    }
}

/// Numbers too large for `u64` clamp to `u64::MAX` so they land past the end.
fn parse_saturating(raw: &str) -> Option<u64> {
    match raw.trim().parse::<u64>() {
        Ok(value) => Some(value),
        Err(e) if *e.kind() == IntErrorKind::PosOverflow => Some(u64::MAX),
        Err(_) => None,
    }
}
