pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Query {
        pub cafe_id: String,
    }

    pub struct Payload {
        pub cafe_id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        LikeStatus(bool),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::LikeStatus(likes) => {
                    (StatusCode::OK, Json(json!({ "likes": likes }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        CafeNotFound,
        FailedToFetchCafe,
        FailedToFetchLikeStatus,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CafeNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Cafe not found" })),
                )
                    .into_response(),
                Self::FailedToFetchCafe => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch cafe" })),
                )
                    .into_response(),
                Self::FailedToFetchLikeStatus => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch like status" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
