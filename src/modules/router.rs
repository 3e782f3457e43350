use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(super::auth::routes::get_router())
        .merge(super::user::routes::get_router())
        .merge(super::city::routes::get_router())
        .merge(super::cafe::routes::get_router())
        .merge(super::like::routes::get_router())
}
