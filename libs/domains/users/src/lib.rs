//! Users Domain
//!
//! Registration with Argon2 password hashing and login that issues HS256
//! access tokens.
//!
//! ```rust,no_run
//! use axum_helpers::{JwtAuth, JwtConfig};
//! use domain_users::{handlers, InMemoryUserRepository, UserService};
//!
//! let jwt = JwtAuth::new(&JwtConfig::new("a-secret-of-at-least-thirty-two-chars", 300).unwrap());
//! let service = UserService::new(InMemoryUserRepository::new(), jwt);
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

pub use error::{UserError, UserResult};
pub use models::{AccessToken, CreateUser, LoginRequest, User, UserResponse};
pub use postgres::PgUserRepository;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
