pub mod request {
    use crate::utils::validation::empty_string_as_none;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize, Validate)]
    pub struct Payload {
        #[validate(length(
            min = 1,
            max = 20,
            code = "INVALID_USERNAME",
            message = "Username is required and must be at most 20 characters"
        ))]
        pub username: String,
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
        #[validate(length(
            min = 6,
            code = "INVALID_PASSWORD",
            message = "Password must be at least 6 characters"
        ))]
        pub password: String,
    }
}

pub mod response {
    use crate::modules::{auth::repository::session::Session, user::repository::User};
    use crate::utils;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        SignedUp { session: Session, user: User },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedUp { session, user } => (
                    StatusCode::CREATED,
                    Json(json!({
                        "access_token": session.access_token,
                        "expires_at": session.expires_at,
                        "user": user,
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        UsernameAlreadyTaken,
        SignupFailed,
        FailedToCreateSession,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToValidate(errors) => {
                    utils::validation::into_response(errors).into_response()
                }
                Self::FailedToFetchUser => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch user" })),
                )
                    .into_response(),
                Self::UsernameAlreadyTaken => (
                    StatusCode::CONFLICT,
                    Json(json!({ "error": "Username already taken" })),
                )
                    .into_response(),
                Self::SignupFailed => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Sign up failed!" })),
                )
                    .into_response(),
                Self::FailedToCreateSession => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to create session" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}

#[cfg(test)]
mod test {
    use super::request::Payload;
    use serde_json::json;
    use validator::Validate;

    fn payload(overrides: serde_json::Value) -> Payload {
        let mut body = json!({
            "username": "coffeelover",
            "email": "coffee@example.com",
            "first_name": "Joe",
            "last_name": "Java",
            "description": "",
            "image_url": "",
            "password": "hunter22",
        });
        for (key, value) in overrides.as_object().unwrap() {
            body[key] = value.clone();
        }
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn accepts_a_complete_sign_up() {
        let payload = payload(json!({}));

        assert!(payload.validate().is_ok());
        assert_eq!(payload.description, None);
        assert_eq!(payload.image_url, None);
    }

    #[test]
    fn rejects_long_usernames() {
        let errors = payload(json!({ "username": "a".repeat(21) }))
            .validate()
            .unwrap_err();

        assert!(errors.field_errors().contains_key("username"));
    }

    #[test]
    fn rejects_short_passwords() {
        let errors = payload(json!({ "password": "12345" })).validate().unwrap_err();

        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn rejects_invalid_email_and_image_url() {
        let errors = payload(json!({ "email": "not-an-email", "image_url": "nope" }))
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("image_url"));
    }

    #[test]
    fn requires_names() {
        let errors = payload(json!({ "first_name": "", "last_name": "" }))
            .validate()
            .unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("first_name"));
        assert!(fields.contains_key("last_name"));
    }
}
