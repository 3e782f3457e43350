use super::{
    service::service,
    types::{request, response},
};
use crate::types::Context;
use axum::{extract::State, Json};
use std::sync::Arc;

pub async fn handler(
    auth: request::Auth,
    State(ctx): State<Arc<Context>>,
    Json(body): Json<request::Body>,
) -> response::Response {
    service(ctx, request::Payload { body, auth }).await
}
