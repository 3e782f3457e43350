use crate::{
    modules::{cafe::repository, city},
    types::Context,
    utils::validation::empty_string_as_none,
};
use serde::Deserialize;
use std::sync::Arc;
use validator::{Validate, ValidationErrors};

/// Body shared by the add and edit cafe routes.
#[derive(Deserialize, Validate)]
pub struct Body {
    #[validate(length(min = 1, code = "INVALID_CAFE_NAME", message = "Name is required"))]
    pub name: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(code = "INVALID_CAFE_URL", message = "Invalid URL"))]
    pub url: Option<String>,
    #[validate(length(min = 1, code = "INVALID_CAFE_ADDRESS", message = "Address is required"))]
    pub address: String,
    pub city_code: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    #[validate(url(code = "INVALID_IMAGE_URL", message = "Invalid image URL"))]
    pub image_url: Option<String>,
}

pub enum Error {
    FailedToValidate(ValidationErrors),
    InvalidCity,
    FailedToFetchCity,
}

impl Body {
    pub async fn into_cafe_payload(
        self,
        ctx: Arc<Context>,
    ) -> Result<repository::CafePayload, Error> {
        self.validate().map_err(|errors| {
            tracing::warn!("Failed to validate payload: {errors}");
            Error::FailedToValidate(errors)
        })?;

        city::repository::find_by_code(&ctx.db_conn.pool, self.city_code.clone())
            .await
            .map_err(|_| Error::FailedToFetchCity)?
            .ok_or(Error::InvalidCity)?;

        Ok(repository::CafePayload {
            name: self.name,
            description: self.description.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            address: self.address,
            city_code: self.city_code,
            image_url: self
                .image_url
                .unwrap_or_else(|| repository::DEFAULT_CAFE_IMAGE.to_string()),
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_blank_optional_fields() {
        let body = serde_json::from_value::<Body>(json!({
            "name": "Jitters",
            "description": "",
            "url": "",
            "address": "12 Main St",
            "city_code": "oak",
            "image_url": "",
        }))
        .unwrap();

        assert!(body.validate().is_ok());
        assert_eq!(body.url, None);
        assert_eq!(body.image_url, None);
    }

    #[test]
    fn requires_name_and_address() {
        let body = serde_json::from_value::<Body>(json!({
            "name": "",
            "address": "",
            "city_code": "oak",
        }))
        .unwrap();
        let errors = body.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("name"));
        assert!(fields.contains_key("address"));
    }

    #[test]
    fn rejects_malformed_urls() {
        let body = serde_json::from_value::<Body>(json!({
            "name": "Jitters",
            "address": "12 Main St",
            "city_code": "oak",
            "url": "jitters dot com",
            "image_url": "https://img.example.com/jitters.png",
        }))
        .unwrap();
        let errors = body.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("url"));
        assert!(!fields.contains_key("image_url"));
    }
}
