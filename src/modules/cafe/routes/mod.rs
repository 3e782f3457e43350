mod create;
mod get;
mod list;
mod payload;
mod update;

use crate::types::Context;
use axum::routing::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new().nest(
        "/cafes",
        Router::new()
            .merge(list::get_router())
            .merge(create::get_router())
            .merge(get::get_router())
            .merge(update::get_router()),
    )
}
