//! API routes module

pub mod health;
pub mod products;
pub mod users;

use axum::Router;
use axum_helpers::server::health_router;

use crate::openapi::ApiDoc;
use crate::state::AppState;

/// Routes nested under `/api`
pub fn routes(state: &AppState) -> Router {
    Router::new()
        .nest("/products", products::router(state))
        .nest("/users", users::router(state))
}

/// The complete application: API, docs, shared layers, `/health` and `/ready`.
pub fn app(state: &AppState) -> std::io::Result<Router> {
    let router = axum_helpers::create_router::<ApiDoc>(routes(state))?;

    Ok(router
        .merge(health_router(state.config.app.clone()))
        .merge(health::router(state.clone())))
}
