pub mod request {
    pub use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::{cafe::repository::CafeWithLocation, user::repository::User};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Profile {
            user: User,
            liked_cafes: Vec<CafeWithLocation>,
        },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Profile { user, liked_cafes } => {
                    let full_name = user.full_name();
                    (
                        StatusCode::OK,
                        Json(json!({
                            "user": user,
                            "full_name": full_name,
                            "liked_cafes": liked_cafes,
                        })),
                    )
                        .into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchLikedCafes,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToFetchLikedCafes => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch liked cafes" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
