pub mod request {
    pub use super::super::super::payload::Body;

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::{modules::cafe::repository::CafeWithLocation, utils};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        CafeAdded(CafeWithLocation),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::CafeAdded(cafe) => (StatusCode::CREATED, Json(json!(cafe))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        InvalidCity,
        FailedToFetchCity,
        FailedToAddCafe,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::InvalidCity => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "error": "Invalid city" })),
                )
                    .into_response(),
                Self::FailedToFetchCity => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch city" })),
                )
                    .into_response(),
                Self::FailedToAddCafe => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to add cafe" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
