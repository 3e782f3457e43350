use super::types::{request, response};
use crate::{modules::cafe, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = payload.auth.user;
    let liked_cafes = cafe::repository::find_many_liked_by_user(&ctx.db_conn.pool, user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchLikedCafes)?;

    Ok(response::Success::Profile {
        user,
        liked_cafes: liked_cafes.into_iter().map(Into::into).collect(),
    })
}
