pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub cafe_id: String,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        CafeLiked(String),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CafeLiked(cafe_id) => {
                    (StatusCode::OK, Json(json!({ "liked": cafe_id }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        CafeNotFound,
        FailedToFetchCafe,
        FailedToLikeCafe,
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
                Self::FailedToLikeCafe => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to like cafe" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
