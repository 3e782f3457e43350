use super::super::super::super::repository;
use super::types::{request, response};
use crate::types::Context;
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.body.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    let update_payload = repository::UpdateUserPayload {
        email: payload.body.email,
        first_name: payload.body.first_name,
        last_name: payload.body.last_name,
        description: payload.body.description.unwrap_or_default(),
        image_url: payload
            .body
            .image_url
            .unwrap_or_else(|| repository::DEFAULT_USER_IMAGE.to_string()),
    };

    repository::update_by_id(&ctx.db_conn.pool, payload.auth.user.id, update_payload)
        .await
        .map_err(|_| response::Error::FailedToUpdateUser)
        .map(response::Success::ProfileEdited)
}
