use super::types::{request, response};
use crate::{
    modules::{cafe, like::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cafe = cafe::repository::find_by_id(&ctx.db_conn.pool, payload.body.cafe_id)
        .await
        .map_err(|_| response::Error::FailedToFetchCafe)?
        .ok_or(response::Error::CafeNotFound)?;

    repository::like_by_id(&ctx.db_conn.pool, cafe.id.clone(), payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToLikeCafe)?;

    tracing::debug!("User {} liked cafe {}", payload.auth.user.username, cafe.id);

    Ok(response::Success::CafeLiked(cafe.id))
}
