use super::types::{request, response};
use crate::{
    modules::{auth::service, user},
    types::Context,
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if user::repository::find_by_username(&ctx.db_conn.pool, payload.username.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::UsernameAlreadyTaken);
    }

    let password_hash = service::password::hash(payload.password)
        .await
        .map_err(|_| response::Error::SignupFailed)?;

    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::SignupFailed
    })?;

    let user = user::repository::create(
        &mut *tx,
        user::repository::CreateUserPayload {
            username: payload.username,
            email: payload.email,
            first_name: payload.first_name,
            last_name: payload.last_name,
            description: payload.description.unwrap_or_default(),
            image_url: payload
                .image_url
                .unwrap_or_else(|| user::repository::DEFAULT_USER_IMAGE.to_string()),
            password_hash,
        },
    )
    .await
    .map_err(|err| match err {
        user::repository::Error::UsernameTaken => response::Error::UsernameAlreadyTaken,
        user::repository::Error::UnexpectedError => response::Error::SignupFailed,
    })?;

    // Dropping `tx` on failure rolls the user back with it.
    let session = service::auth::create_session(&mut *tx, user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateSession)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::SignupFailed
    })?;

    tracing::info!("User {} signed up", user.username);

    Ok(response::Success::SignedUp { session, user })
}
