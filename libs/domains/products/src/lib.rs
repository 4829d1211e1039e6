//! Products Domain
//!
//! CRUD over a product catalogue with offset/limit listing.
//!
//! ```text
//! handlers ─► ProductService ─► ProductRepository ─┬─ InMemoryProductRepository
//!                                                  └─ PgProductRepository
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//!
//! let service = ProductService::new(InMemoryProductRepository::new());
//! let router = handlers::router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pagination;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{ProductError, ProductResult};
pub use models::{CreateProduct, ListProductsQuery, Product, UpdateProduct};
pub use pagination::{PageRequest, SortOrder};
pub use postgres::PgProductRepository;
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use service::ProductService;
