use crate::domain::ports::Transport;
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A request captured by [`RecordingTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub url: String,
    pub body: String,
}

impl RecordedRequest {
    /// Decodes the form body back into its fields. An undecodable body yields
    /// an empty map.
    pub fn form_fields(&self) -> HashMap<String, String> {
        serde_urlencoded::from_str(&self.body).unwrap_or_default()
    }
}

#[derive(Debug, Clone)]
enum Canned {
    Body(String),
    Failure(String),
}

/// An in-memory transport that replays canned replies in order and records
/// every request it is handed.
///
/// Clones share the same queue and log, so a test can keep one handle and
/// give another to the gateway.
#[derive(Default, Clone)]
pub struct RecordingTransport {
    replies: Arc<RwLock<VecDeque<Canned>>>,
    requests: Arc<RwLock<Vec<RecordedRequest>>>,
}

impl RecordingTransport {
    /// Creates a transport with no canned replies.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a raw response body.
    pub async fn push_response(&self, body: impl Into<String>) {
        self.replies.write().await.push_back(Canned::Body(body.into()));
    }

    /// Queues a transport failure.
    pub async fn push_failure(&self, reason: impl Into<String>) {
        self.replies
            .write()
            .await
            .push_back(Canned::Failure(reason.into()));
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn post(&self, url: &str, body: &str) -> Result<String> {
        self.requests.write().await.push(RecordedRequest {
            url: url.to_string(),
            body: body.to_string(),
        });

        match self.replies.write().await.pop_front() {
            Some(Canned::Body(body)) => Ok(body),
            Some(Canned::Failure(reason)) => Err(GatewayError::TransportError(reason)),
            None => Err(GatewayError::TransportError(
                "No canned response queued".to_string(),
            )),
        }
    }
}
