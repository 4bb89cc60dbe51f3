use super::{BatchEntry, BatchOutcome, FailedEntry, PublishError, QueueClient};
use crate::config::types::SqsQueueConfig;
use async_trait::async_trait;
use aws_config::{BehaviorVersion, Region};
use aws_sdk_sqs::error::DisplayErrorContext;
use aws_sdk_sqs::types::SendMessageBatchRequestEntry;

/// Publishes batches with `SendMessageBatch`.
///
/// Credentials and region come from the standard AWS provider chain; the
/// config may pin the region.
#[derive(Debug, Clone)]
pub struct SqsQueue {
    client: aws_sdk_sqs::Client,
    queue_url: String,
}

impl SqsQueue {
    pub async fn connect(config: &SqsQueueConfig) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest());
        if let Some(region) = &config.region {
            loader = loader.region(Region::new(region.clone()));
        }
        let sdk_config = loader.load().await;

        Self::from_client(aws_sdk_sqs::Client::new(&sdk_config), config.url.clone())
    }

    pub fn from_client(client: aws_sdk_sqs::Client, queue_url: String) -> Self {
        Self { client, queue_url }
    }
}

fn to_request_entries(
    entries: Vec<BatchEntry>,
) -> Result<Vec<SendMessageBatchRequestEntry>, PublishError> {
    entries
        .into_iter()
        .map(|entry| {
            SendMessageBatchRequestEntry::builder()
                .id(entry.id)
                .message_body(entry.body)
                .build()
                .map_err(|e| PublishError::InvalidEntry(e.to_string()))
        })
        .collect()
}

#[async_trait]
impl QueueClient for SqsQueue {
    async fn send_batch(&self, entries: Vec<BatchEntry>) -> Result<BatchOutcome, PublishError> {
        let request_entries = to_request_entries(entries)?;

        let output = self
            .client
            .send_message_batch()
            .queue_url(&self.queue_url)
            .set_entries(Some(request_entries))
            .send()
            .await
            .map_err(|e| PublishError::Sqs(DisplayErrorContext(e).to_string()))?;

        let failed = output
            .failed()
            .iter()
            .map(|f| FailedEntry {
                id: f.id().to_string(),
                code: f.code().to_string(),
                message: f.message().map(|m| m.to_string()),
            })
            .collect();

        Ok(BatchOutcome {
            accepted: output.successful().len(),
            failed,
        })
    }

    fn destination(&self) -> &str {
        &self.queue_url
    }
}
