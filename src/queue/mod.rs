pub mod http;
pub mod sqs;

use crate::config::types::QueueConfig;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

pub use http::HttpQueue;
pub use sqs::SqsQueue;

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("SQS request failed: {0}")]
    Sqs(String),

    #[error("invalid batch entry: {0}")]
    InvalidEntry(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("queue endpoint returned error status {status}: {message}")]
    Rejected { status: u16, message: String },
}

/// One message inside a batch publish call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// Identifier unique within the batch
    pub id: String,

    /// Serialized trip
    pub body: String,
}

/// An entry the queue accepted the request for but refused individually.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedEntry {
    pub id: String,
    pub code: String,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub accepted: usize,
    pub failed: Vec<FailedEntry>,
}

impl BatchOutcome {
    pub fn all_accepted(count: usize) -> Self {
        Self {
            accepted: count,
            failed: Vec::new(),
        }
    }
}

#[async_trait]
pub trait QueueClient: Send + Sync {
    /// Submit all entries as a single batch request.
    async fn send_batch(&self, entries: Vec<BatchEntry>) -> Result<BatchOutcome, PublishError>;

    /// Destination shown in logs
    fn destination(&self) -> &str;
}

/// Build the client selected by the `queue` config section.
pub async fn connect(config: &QueueConfig) -> Result<Arc<dyn QueueClient>, PublishError> {
    let client: Arc<dyn QueueClient> = match config {
        QueueConfig::Sqs(sqs_config) => Arc::new(SqsQueue::connect(sqs_config).await),
        QueueConfig::Http(http_config) => Arc::new(HttpQueue::new(http_config)?),
    };
    Ok(client)
}
