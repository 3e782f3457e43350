pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::cafe::repository::CafeWithLocation;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Cafe(CafeWithLocation),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Cafe(cafe) => (StatusCode::OK, Json(json!(cafe))).into_response(),
            }
        }
    }

    pub enum Error {
        CafeNotFound,
        FailedToFetchCafe,
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
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
