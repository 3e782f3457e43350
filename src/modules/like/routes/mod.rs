mod like;
mod status;
mod unlike;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(status::get_router())
        .merge(like::get_router())
        .merge(unlike::get_router())
}
