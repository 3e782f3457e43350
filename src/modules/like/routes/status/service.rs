use super::types::{request, response};
use crate::{
    modules::{cafe, like::repository},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cafe = cafe::repository::find_by_id(&ctx.db_conn.pool, payload.cafe_id)
        .await
        .map_err(|_| response::Error::FailedToFetchCafe)?
        .ok_or(response::Error::CafeNotFound)?;

    repository::has_liked(&ctx.db_conn.pool, cafe.id, payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToFetchLikeStatus)
        .map(response::Success::LikeStatus)
}
