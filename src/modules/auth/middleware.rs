use super::repository::session::Session;
use super::service;
use crate::modules::user;
use crate::modules::user::repository::User;
use crate::types::Context;
use axum::extract::{Extension, FromRequestParts};
use axum::http::{self, request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json, RequestPartsExt};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

pub const NOT_LOGGED_IN: &str = "Not logged in";

#[derive(Debug, PartialEq)]
enum Error {
    InvalidSession,
}

fn get_session_id_from_header(header: &str) -> Result<String, Error> {
    let mut parts = header.split_whitespace();

    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), Some(token), None) if scheme.eq_ignore_ascii_case("bearer") => {
            Ok(token.to_string())
        }
        _ => Err(Error::InvalidSession),
    }
}

async fn get_auth_from_header(ctx: Arc<Context>, header: &str) -> Result<Auth, Error> {
    let session_id = get_session_id_from_header(header)?;
    let session = service::auth::verify_access_token(ctx.clone(), session_id)
        .await
        .map_err(|_| Error::InvalidSession)?;

    let user = user::repository::find_by_id(&ctx.db_conn.pool, session.user_id.clone())
        .await
        .map_err(|_| Error::InvalidSession)?
        .ok_or(Error::InvalidSession)?;

    Ok(Auth { user, session })
}

#[derive(Serialize, Clone)]
pub struct Auth {
    pub user: User,
    #[serde(skip)]
    pub session: Session,
}

fn not_logged_in() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "error": NOT_LOGGED_IN })),
    )
        .into_response()
}

async fn get_auth_from_request(parts: &mut Parts) -> Result<Auth, Response> {
    let Extension(ctx) = parts
        .extract::<Extension<Arc<Context>>>()
        .await
        .map_err(|err| {
            tracing::error!("Application context missing from request: {}", err);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "error": "Sorry an error occurred" })),
            )
                .into_response()
        })?;

    let auth_header = parts
        .headers
        .get(http::header::AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .ok_or_else(not_logged_in)?;

    get_auth_from_header(ctx, auth_header)
        .await
        .map_err(|_| not_logged_in())
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        get_auth_from_request(parts).await
    }
}

#[derive(Serialize, Clone)]
pub struct AdminAuth {
    pub user: User,
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for AdminAuth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Auth { user, .. } = get_auth_from_request(parts).await?;

        if !user::repository::is_admin(&user) {
            tracing::warn!("User {} attempted an admin-only action", user.username);
            return Err((
                StatusCode::FORBIDDEN,
                Json(json!({ "error": "Unauthorized" })),
            )
                .into_response());
        }

        Ok(Self { user })
    }
}
