use super::{Button, ClientError, ClientResult, Form, LikesApi, SubmitEvent};
use std::sync::Arc;

pub const CAFE_ID_ATTRIBUTE: &str = "cafe-id";
pub const LIKE_LABEL: &str = "Like";
pub const LIKED_LABEL: &str = "Liked";

/// Flips the signed-in user's like on the cafe named by the submitted form.
///
/// The button is relabelled before the mutation is sent and never rolled
/// back: the label shows the intended state, not a confirmed one. Overlapping
/// submissions are not serialized, so two quick clicks may both see "not
/// liked" and both send a like.
pub struct LikeToggle<A> {
    api: A,
    button: Button,
}

impl<A: LikesApi + 'static> LikeToggle<A> {
    pub fn new(api: A, button: Button) -> Self {
        Self { api, button }
    }

    pub fn button(&self) -> &Button {
        &self.button
    }

    /// Registers [`Self::handle_submit`] as a submit listener on `form`.
    /// The listener holds a clone of the `Arc`. Failures are logged and dropped.
    pub fn bind(self: &Arc<Self>, form: &Form) {
        let toggle = Arc::clone(self);

        form.add_submit_listener(move |event: SubmitEvent| {
            let toggle = Arc::clone(&toggle);
            async move {
                let form_id = event.target().id().to_string();
                if let Err(err) = toggle.handle_submit(event).await {
                    tracing::error!("Like toggle on form {} aborted: {}", form_id, err);
                }
            }
        });
    }

    pub async fn handle_submit(&self, event: SubmitEvent) -> ClientResult<()> {
        event.prevent_default();

        let form = event.target();
        let cafe_id = form
            .attribute(CAFE_ID_ATTRIBUTE)
            .ok_or_else(|| ClientError::MissingCafeId(form.id().to_string()))?;

        let status = self.api.like_status(cafe_id).await?;

        if status.likes {
            self.unlike(cafe_id).await?;
        } else {
            self.like(cafe_id).await?;
        }

        Ok(())
    }

    pub async fn like(&self, cafe_id: &str) -> ClientResult<serde_json::Value> {
        self.button.set_text(LIKED_LABEL);

        let response = self.api.like(cafe_id).await?;
        tracing::info!(cafe_id, %response, "like response");

        Ok(response)
    }

    pub async fn unlike(&self, cafe_id: &str) -> ClientResult<serde_json::Value> {
        self.button.set_text(LIKE_LABEL);

        let response = self.api.unlike(cafe_id).await?;
        tracing::info!(cafe_id, %response, "unlike response");

        Ok(response)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::client::LikeStatus;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingApi {
        likes: bool,
        calls: Mutex<Vec<String>>,
    }

    impl RecordingApi {
        fn liking(likes: bool) -> Self {
            Self {
                likes,
                ..Default::default()
            }
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl LikesApi for RecordingApi {
        async fn like_status(&self, cafe_id: &str) -> ClientResult<LikeStatus> {
            self.calls.lock().unwrap().push(format!("status {cafe_id}"));
            Ok(LikeStatus { likes: self.likes })
        }

        async fn like(&self, cafe_id: &str) -> ClientResult<serde_json::Value> {
            self.calls.lock().unwrap().push(format!("like {cafe_id}"));
            Ok(json!({ "liked": cafe_id }))
        }

        async fn unlike(&self, cafe_id: &str) -> ClientResult<serde_json::Value> {
            self.calls.lock().unwrap().push(format!("unlike {cafe_id}"));
            Ok(json!({ "unliked": cafe_id }))
        }
    }

    fn like_form() -> Arc<Form> {
        Arc::new(Form::new("like-form").with_attribute(CAFE_ID_ATTRIBUTE, "cafe-1"))
    }

    #[tokio::test]
    async fn likes_a_cafe_that_is_not_liked() {
        let toggle = Arc::new(LikeToggle::new(
            RecordingApi::liking(false),
            Button::new(LIKE_LABEL),
        ));
        let form = like_form();
        toggle.bind(&form);

        let event = form.submit().settled().await;

        assert!(event.default_prevented());
        assert_eq!(toggle.button().text(), LIKED_LABEL);
        assert_eq!(toggle.api.calls(), vec!["status cafe-1", "like cafe-1"]);
    }

    #[tokio::test]
    async fn unlikes_a_liked_cafe() {
        let toggle = Arc::new(LikeToggle::new(
            RecordingApi::liking(true),
            Button::new(LIKED_LABEL),
        ));
        let form = like_form();
        toggle.bind(&form);

        form.submit().settled().await;

        assert_eq!(toggle.button().text(), LIKE_LABEL);
        assert_eq!(toggle.api.calls(), vec!["status cafe-1", "unlike cafe-1"]);
    }

    #[tokio::test]
    async fn returns_the_mutation_response() {
        let toggle = LikeToggle::new(RecordingApi::default(), Button::default());

        let response = toggle.like("cafe-9").await.unwrap();

        assert_eq!(response, json!({ "liked": "cafe-9" }));
    }

    #[tokio::test]
    async fn aborts_when_the_form_has_no_cafe_id() {
        let toggle = LikeToggle::new(RecordingApi::default(), Button::new(LIKE_LABEL));
        let form = Arc::new(Form::new("broken-form"));
        let submission = form.submit();
        let event = submission.event().clone();

        let result = toggle.handle_submit(event.clone()).await;

        assert!(matches!(result, Err(ClientError::MissingCafeId(id)) if id == "broken-form"));
        assert!(event.default_prevented());
        assert_eq!(toggle.button().text(), LIKE_LABEL);
        assert!(toggle.api.calls().is_empty());
    }
}
