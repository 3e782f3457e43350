use axum::{http::StatusCode, Json};
use serde::{Deserialize, Deserializer};
use serde_json::json;
use validator::ValidationErrors;

pub fn into_response(errors: ValidationErrors) -> (StatusCode, Json<serde_json::Value>) {
    (StatusCode::BAD_REQUEST, Json(json!({"errors": errors})))
}

/// Form fields left blank arrive as `""`; treat them as missing.
pub fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|v| !v.trim().is_empty()))
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Deserialize)]
    struct Body {
        #[serde(default, deserialize_with = "empty_string_as_none")]
        image_url: Option<String>,
    }

    #[test]
    fn blank_strings_become_none() {
        let body = serde_json::from_value::<Body>(json!({ "image_url": "  " })).unwrap();
        assert_eq!(body.image_url, None);

        let body = serde_json::from_value::<Body>(json!({})).unwrap();
        assert_eq!(body.image_url, None);

        let body = serde_json::from_value::<Body>(json!({ "image_url": null })).unwrap();
        assert_eq!(body.image_url, None);
    }

    #[test]
    fn keeps_non_empty_strings() {
        let body =
            serde_json::from_value::<Body>(json!({ "image_url": "https://img.example.com/a.png" }))
                .unwrap();
        assert_eq!(body.image_url.as_deref(), Some("https://img.example.com/a.png"));
    }
}
