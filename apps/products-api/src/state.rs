//! Application state management

use axum_helpers::JwtAuth;
use sea_orm::DatabaseConnection;

use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db: DatabaseConnection,
    pub jwt_auth: JwtAuth,
}

impl AppState {
    pub fn new(config: Config, db: DatabaseConnection) -> Self {
        let jwt_auth = JwtAuth::new(&config.jwt);
        Self {
            config,
            db,
            jwt_auth,
        }
    }
}
