use super::{BatchEntry, BatchOutcome, PublishError, QueueClient};
use crate::config::types::HttpQueueConfig;
use async_trait::async_trait;
use serde::Serialize;

/// Posts each batch as JSON to a plain HTTP endpoint.
#[derive(Debug)]
pub struct HttpQueue {
    url: String,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct BatchRequest<'a> {
    entries: &'a [BatchEntry],
}

impl HttpQueue {
    pub fn new(config: &HttpQueueConfig) -> Result<Self, PublishError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            url: config.url.clone(),
            client,
        })
    }
}

#[async_trait]
impl QueueClient for HttpQueue {
    async fn send_batch(&self, entries: Vec<BatchEntry>) -> Result<BatchOutcome, PublishError> {
        let request_body = BatchRequest { entries: &entries };
        let response = self.client.post(&self.url).json(&request_body).send().await?;

        if !response.status().is_success() {
            return Err(PublishError::Rejected {
                status: response.status().as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        Ok(BatchOutcome::all_accepted(entries.len()))
    }

    fn destination(&self) -> &str {
        &self.url
    }
}
