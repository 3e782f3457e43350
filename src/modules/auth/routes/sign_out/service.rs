use super::types::{request, response};
use crate::{modules::auth::service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    service::auth::end_session(ctx, payload.auth.session)
        .await
        .map_err(|_| response::Error::FailedToSignOut)
        .map(|_| response::Success::SignedOut)
}
