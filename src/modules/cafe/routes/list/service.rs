use super::types::{request, response};
use crate::{modules::cafe::repository, types::Context, utils::pagination::Paginated};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cafes = repository::find_many(&ctx.db_conn.pool, payload.pagination)
        .await
        .map_err(|_| response::Error::FailedToFetchCafes)?;

    Ok(response::Success::Cafes(Paginated {
        items: cafes.items.into_iter().map(Into::into).collect(),
        meta: cafes.meta,
    }))
}
