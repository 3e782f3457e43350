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

    repository::unlike_by_id(&ctx.db_conn.pool, cafe.id.clone(), payload.auth.user.id)
        .await
        .map_err(|_| response::Error::FailedToUnlikeCafe)?;

    tracing::debug!("User {} unliked cafe {}", payload.auth.user.username, cafe.id);

    Ok(response::Success::CafeUnliked(cafe.id))
}
