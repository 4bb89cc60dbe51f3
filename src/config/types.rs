use crate::publisher::MAX_MESSAGE_ID_LENGTH;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    pub queue: QueueConfig,
    #[serde(default)]
    pub publisher: PublisherConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_source_path")]
    pub path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: default_source_path(),
        }
    }
}

fn default_source_path() -> PathBuf {
    PathBuf::from("data/trips.json")
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum QueueConfig {
    Sqs(SqsQueueConfig),
    Http(HttpQueueConfig),
}

impl QueueConfig {
    pub fn url(&self) -> &str {
        match self {
            QueueConfig::Sqs(c) => &c.url,
            QueueConfig::Http(c) => &c.url,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SqsQueueConfig {
    pub url: String,
    /// Overrides the region from the AWS provider chain
    #[serde(default)]
    pub region: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpQueueConfig {
    pub url: String,
    #[serde(default = "default_http_timeout", with = "humantime_serde")]
    pub timeout: Duration,
}

fn default_http_timeout() -> Duration {
    Duration::from_secs(30)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublisherConfig {
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,
    #[serde(default = "default_interval", with = "humantime_serde")]
    pub interval: Duration,
    #[serde(default)]
    pub remainder: RemainderPolicy,
    #[serde(default = "default_message_id_length")]
    pub message_id_length: usize,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
            interval: default_interval(),
            remainder: RemainderPolicy::default(),
            message_id_length: default_message_id_length(),
        }
    }
}

fn default_batch_size() -> usize {
    5
}

fn default_interval() -> Duration {
    Duration::from_secs(1)
}

fn default_message_id_length() -> usize {
    MAX_MESSAGE_ID_LENGTH
}

/// What happens to trailing trips that don't fill a whole batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RemainderPolicy {
    /// Wrap to the start once the next batch would reach the end; the tail is never sent
    #[default]
    Skip,
    /// Send the tail as a short batch, then wrap
    Send,
}
