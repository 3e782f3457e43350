pub mod request {
    pub use crate::modules::auth::middleware::Auth;
    use crate::utils::validation::empty_string_as_none;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Body {
        #[validate(
            email(code = "INVALID_USER_EMAIL", message = "Invalid email address"),
            length(max = 50, code = "INVALID_USER_EMAIL", message = "Email is too long")
        )]
        pub email: String,
        #[validate(length(
            min = 1,
            max = 30,
            code = "INVALID_FIRST_NAME",
            message = "First name is required and must be at most 30 characters"
        ))]
        pub first_name: String,
        #[validate(length(
            min = 1,
            max = 30,
            code = "INVALID_LAST_NAME",
            message = "Last name is required and must be at most 30 characters"
        ))]
        pub last_name: String,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        pub description: Option<String>,
        #[serde(default, deserialize_with = "empty_string_as_none")]
        #[validate(url(code = "INVALID_IMAGE_URL", message = "Invalid image URL"))]
        pub image_url: Option<String>,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        ProfileEdited(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ProfileEdited(user) => (
                    StatusCode::OK,
                    Json(json!({ "message": "Profile edited", "user": user })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToUpdateUser,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::FailedToUpdateUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to update user" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod test {
    use super::request::Body;
    use serde_json::json;
    use validator::Validate;

    #[test]
    fn blank_image_url_is_allowed() {
        let body = serde_json::from_value::<Body>(json!({
            "email": "ada@example.com",
            "first_name": "Ada",
            "last_name": "Lovelace",
            "image_url": "",
        }))
        .unwrap();

        assert!(body.validate().is_ok());
        assert_eq!(body.image_url, None);
        assert_eq!(body.description, None);
    }

    #[test]
    fn rejects_overlong_names() {
        let body = serde_json::from_value::<Body>(json!({
            "email": "ada@example.com",
            "first_name": "A".repeat(31),
            "last_name": "Lovelace",
        }))
        .unwrap();
        let errors = body.validate().unwrap_err();

        assert!(errors.field_errors().contains_key("first_name"));
    }
}
