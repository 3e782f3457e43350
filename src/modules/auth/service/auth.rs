use chrono::Utc;
use sqlx::PgExecutor;
use ulid::Ulid;

use super::super::repository;
use crate::{modules::auth::repository::session::Session, types::Context};
use std::sync::Arc;

#[derive(Debug)]
pub enum Error {
    UnexpectedError,
    InvalidSession,
    ExpiredToken,
}

type Result<T> = std::result::Result<T, Error>;

pub async fn create_session<'e, E: PgExecutor<'e>>(e: E, user_id: String) -> Result<Session> {
    let access_token = Ulid::new().to_string();
    repository::session::create(
        e,
        repository::session::SessionCreationPayload {
            user_id,
            access_token,
        },
    )
    .await
    .map_err(|_| Error::UnexpectedError)
}

pub async fn verify_access_token(ctx: Arc<Context>, access_token: String) -> Result<Session> {
    let session = repository::session::find_by_access_token(&ctx.db_conn.pool, access_token)
        .await
        .map_err(|_| Error::UnexpectedError)?
        .ok_or(Error::InvalidSession)?;

    if session.expires_at < Utc::now().naive_utc() {
        return Err(Error::ExpiredToken);
    };

    Ok(session)
}

pub async fn end_session(ctx: Arc<Context>, session: Session) -> Result<()> {
    repository::session::delete_by_id(&ctx.db_conn.pool, session.id)
        .await
        .map_err(|_| Error::UnexpectedError)
}
