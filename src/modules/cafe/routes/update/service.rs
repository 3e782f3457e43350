use super::super::payload::Error as PayloadError;
use super::types::{request, response};
use crate::{modules::cafe::repository, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cafe_payload = payload
        .body
        .into_cafe_payload(ctx.clone())
        .await
        .map_err(|err| match err {
            PayloadError::FailedToValidate(errors) => response::Error::FailedToValidate(errors),
            PayloadError::InvalidCity => response::Error::InvalidCity,
            PayloadError::FailedToFetchCity => response::Error::FailedToFetchCity,
        })?;

    let cafe = repository::update_by_id(&ctx.db_conn.pool, payload.id, cafe_payload)
        .await
        .map_err(|_| response::Error::FailedToEditCafe)?
        .ok_or(response::Error::CafeNotFound)?;

    tracing::info!("{} edited", cafe.name);

    Ok(response::Success::CafeEdited(cafe.into()))
}
