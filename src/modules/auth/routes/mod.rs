mod sign_in;
mod sign_out;
mod sign_up;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest(
        "/auth",
        Router::new()
            .merge(sign_up::get_router())
            .merge(sign_in::get_router())
            .merge(sign_out::get_router()),
    )
}
