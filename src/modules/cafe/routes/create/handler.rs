use super::{
    service::service,
    types::{request, response},
};
use crate::{modules::auth::middleware::AdminAuth, types::Context};
use axum::{extract::State, Json};
use std::sync::Arc;

pub async fn handler(
    _: AdminAuth,
    State(ctx): State<Arc<Context>>,
    Json(body): Json<request::Body>,
) -> response::Response {
    service(ctx, request::Payload { body }).await
}
