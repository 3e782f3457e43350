use super::types::{request, response};
use crate::{
    modules::{auth::service, user},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let user = user::repository::find_by_username(&ctx.db_conn.pool, payload.username.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or_else(|| {
            tracing::debug!("Sign in attempted for unknown user {}", payload.username);
            response::Error::InvalidCredentials
        })?;

    if !service::password::verify(payload.password, user.password_hash.clone()).await {
        tracing::debug!("Wrong password supplied for user {}", user.username);
        return Err(response::Error::InvalidCredentials);
    }

    let session = service::auth::create_session(&ctx.db_conn.pool, user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateSession)?;

    Ok(response::Success::SignedIn { session, user })
}
