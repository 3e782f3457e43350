use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::extract::{Query, State};
use std::sync::Arc;

pub async fn handler(
    auth: request::Auth,
    State(ctx): State<Arc<Context>>,
    Query(query): Query<request::Query>,
) -> response::Response {
    service(
        ctx,
        request::Payload {
            cafe_id: query.cafe_id,
            auth,
        },
    )
    .await
}
