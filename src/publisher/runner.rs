use crate::config::types::PublisherConfig;
use crate::publisher::cursor::BatchCursor;
use crate::publisher::message_id::MessageIdGenerator;
use crate::queue::{BatchEntry, PublishError, QueueClient};
use crate::trip::Trip;
use std::ops::Range;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum PublisherError {
    #[error("failed to encode trip: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("publish failed: {0}")]
    Publish(#[from] PublishError),
}

/// Result of a single batch publish.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub window: Range<usize>,
    pub accepted: usize,
    pub failed: usize,
}

/// Totals reported when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishSummary {
    pub batches: u64,
    pub trips: u64,
}

/// Republishes the loaded trips batch by batch, wrapping around forever.
pub struct CyclicPublisher {
    trips: Vec<Trip>,
    queue: Arc<dyn QueueClient>,
    cursor: BatchCursor,
    ids: MessageIdGenerator,
    interval: Duration,
}

impl CyclicPublisher {
    pub fn new(trips: Vec<Trip>, queue: Arc<dyn QueueClient>, config: &PublisherConfig) -> Self {
        let ids = MessageIdGenerator::new(config.message_id_length);
        Self::with_id_generator(trips, queue, config, ids)
    }

    pub fn with_id_generator(
        trips: Vec<Trip>,
        queue: Arc<dyn QueueClient>,
        config: &PublisherConfig,
        ids: MessageIdGenerator,
    ) -> Self {
        let cursor = BatchCursor::new(trips.len(), config.batch_size, config.remainder);
        Self {
            trips,
            queue,
            cursor,
            ids,
            interval: config.interval,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor.position()
    }

    /// Send the batch at the cursor, then advance it.
    ///
    /// The cursor stays put when the queue call fails.
    pub async fn publish_next(&mut self) -> Result<BatchReport, PublisherError> {
        let window = self.cursor.window();

        let mut entries = Vec::with_capacity(window.len());
        for trip in &self.trips[window.clone()] {
            entries.push(BatchEntry {
                id: self.ids.next_id(),
                body: serde_json::to_string(trip)?,
            });
        }

        info!(
            count = entries.len(),
            cursor = window.start,
            destination = %self.queue.destination(),
            "Sending {} trips",
            entries.len()
        );

        let outcome = self.queue.send_batch(entries).await?;

        for failed in &outcome.failed {
            warn!(
                id = %failed.id,
                code = %failed.code,
                message = failed.message.as_deref().unwrap_or(""),
                "Queue rejected batch entry"
            );
        }

        self.cursor.advance();

        Ok(BatchReport {
            window,
            accepted: outcome.accepted,
            failed: outcome.failed.len(),
        })
    }

    /// Publish until `shutdown` is cancelled. A failed publish ends the loop immediately.
    pub async fn run(&mut self, shutdown: CancellationToken) -> Result<PublishSummary, PublisherError> {
        let mut summary = PublishSummary::default();

        info!(
            trips = self.trips.len(),
            interval_ms = self.interval.as_millis() as u64,
            "Publisher started"
        );

        while !shutdown.is_cancelled() {
            let report = self.publish_next().await?;
            summary.batches += 1;
            summary.trips += report.window.len() as u64;

            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = tokio::time::sleep(self.interval) => {}
            }
        }

        info!(
            batches = summary.batches,
            trips = summary.trips,
            "Publisher stopped"
        );

        Ok(summary)
    }
}
