//! HTTP client for the like endpoints

use super::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LikeStatus {
    pub likes: bool,
}

#[derive(Serialize)]
struct LikeRequest<'a> {
    cafe_id: &'a str,
}

#[async_trait]
pub trait LikesApi: Send + Sync {
    /// `GET /api/likes?cafe_id=`. Fails when the body has no boolean `likes`.
    async fn like_status(&self, cafe_id: &str) -> ClientResult<LikeStatus>;

    /// `POST /api/like`. The body is returned whatever the status code.
    async fn like(&self, cafe_id: &str) -> ClientResult<serde_json::Value>;

    /// `POST /api/unlike`. The body is returned whatever the status code.
    async fn unlike(&self, cafe_id: &str) -> ClientResult<serde_json::Value>;
}

#[derive(Debug, Clone)]
pub struct HttpLikesApi {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpLikesApi {
    /// No timeout is configured; a hung request stalls only its own call.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn mutate(&self, path: &str, cafe_id: &str) -> ClientResult<serde_json::Value> {
        let request = self
            .client
            .post(self.url(path))
            .json(&LikeRequest { cafe_id });
        let response = self.authorize(request).send().await?;

        Ok(response.json().await?)
    }
}

#[async_trait]
impl LikesApi for HttpLikesApi {
    async fn like_status(&self, cafe_id: &str) -> ClientResult<LikeStatus> {
        let request = self
            .client
            .get(self.url("/api/likes"))
            .query(&[("cafe_id", cafe_id)]);
        let response = self.authorize(request).send().await?;

        Ok(response.json().await?)
    }

    async fn like(&self, cafe_id: &str) -> ClientResult<serde_json::Value> {
        self.mutate("/api/like", cafe_id).await
    }

    async fn unlike(&self, cafe_id: &str) -> ClientResult<serde_json::Value> {
        self.mutate("/api/unlike", cafe_id).await
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn joins_paths_onto_base_url() {
        let api = HttpLikesApi::new("http://localhost:8000/").unwrap();

        assert_eq!(api.base_url(), "http://localhost:8000");
        assert_eq!(api.url("/api/like"), "http://localhost:8000/api/like");
        assert_eq!(api.url("api/unlike"), "http://localhost:8000/api/unlike");
    }

    #[test]
    fn like_request_uses_cafe_id_key() {
        let body = serde_json::to_value(LikeRequest { cafe_id: "01J9ZCAFE" }).unwrap();

        assert_eq!(body, serde_json::json!({ "cafe_id": "01J9ZCAFE" }));
    }

    #[test]
    fn like_status_requires_the_likes_field() {
        assert_eq!(
            serde_json::from_str::<LikeStatus>(r#"{"likes": true}"#).unwrap(),
            LikeStatus { likes: true }
        );
        assert!(serde_json::from_str::<LikeStatus>(r#"{"error": "Not logged in"}"#).is_err());
        assert!(serde_json::from_str::<LikeStatus>(r#"{"likes": "yes"}"#).is_err());
    }
}
