//! Minimal element model the like button is wired to.

use futures::future::{join_all, BoxFuture, FutureExt};
use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};
use tokio::task::JoinHandle;

type SubmitListener = Arc<dyn Fn(SubmitEvent) -> BoxFuture<'static, ()> + Send + Sync>;

/// A button whose visible text can be swapped. Clones refer to the same button.
#[derive(Clone, Debug, Default)]
pub struct Button {
    text: Arc<RwLock<String>>,
}

impl Button {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Arc::new(RwLock::new(text.into())),
        }
    }

    pub fn text(&self) -> String {
        self.text
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set_text(&self, text: impl Into<String>) {
        *self.text.write().unwrap_or_else(PoisonError::into_inner) = text.into();
    }
}

pub struct Form {
    id: String,
    attributes: HashMap<String, String>,
    listeners: Mutex<Vec<SubmitListener>>,
}

impl Form {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            attributes: HashMap::new(),
            listeners: Mutex::new(Vec::new()),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn add_submit_listener<F, Fut>(&self, listener: F)
    where
        F: Fn(SubmitEvent) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Arc::new(move |event| listener(event).boxed()));
    }

    /// Dispatches one submit event to every listener, each on its own task.
    ///
    /// Returns immediately; a second submission may start while the first is
    /// still in flight. Must be called from within a tokio runtime.
    pub fn submit(self: &Arc<Self>) -> Submission {
        let event = SubmitEvent {
            target: Arc::clone(self),
            default_prevented: Arc::new(AtomicBool::new(false)),
        };

        let listeners = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();

        tracing::debug!("Dispatching submit on form {} to {} listener(s)", self.id, listeners.len());

        let handles = listeners
            .into_iter()
            .map(|listener| tokio::spawn(listener(event.clone())))
            .collect();

        Submission { event, handles }
    }
}

#[derive(Clone)]
pub struct SubmitEvent {
    target: Arc<Form>,
    default_prevented: Arc<AtomicBool>,
}

impl SubmitEvent {
    pub fn target(&self) -> &Form {
        &self.target
    }

    /// Stops the form from navigating away.
    pub fn prevent_default(&self) {
        self.default_prevented.store(true, Ordering::SeqCst);
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented.load(Ordering::SeqCst)
    }
}

/// An in-flight submission.
pub struct Submission {
    event: SubmitEvent,
    handles: Vec<JoinHandle<()>>,
}

impl Submission {
    pub fn event(&self) -> &SubmitEvent {
        &self.event
    }

    /// Waits for every listener of this submission to finish.
    pub async fn settled(self) -> SubmitEvent {
        for result in join_all(self.handles).await {
            if let Err(err) = result {
                tracing::error!("Submit listener on form {} failed: {}", self.event.target.id, err);
            }
        }

        self.event
    }
}
