use crate::config::{default_config_locations, load_config, Config};
use crate::loader::load_trips;
use crate::publisher::{CyclicPublisher, PublishSummary};
use crate::queue::{self, QueueClient};
use std::future::Future;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("config error: {0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("load error: {0}")]
    Load(#[from] crate::loader::LoadError),

    #[error("queue error: {0}")]
    Queue(#[from] crate::queue::PublishError),

    #[error("publisher error: {0}")]
    Publisher(#[from] crate::publisher::PublisherError),
}

pub async fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config_path = match config_path {
        Some(path) => path,
        None => {
            eprintln!("Error: config not found");
            eprintln!("Searched locations:");
            for location in default_config_locations() {
                eprintln!("  {}", location.display());
            }
            eprintln!("\nUse --config <path> to specify a config file, or run 'trip-producer config init' to generate one.");
            std::process::exit(1);
        }
    };

    match run_pipeline(&config_path).await {
        Ok(_) => Ok(()),
        Err(e) => {
            error!(error = %e, "Producer failed");
            Err(e.into())
        }
    }
}

async fn run_pipeline(config_path: &Path) -> Result<PublishSummary, RunError> {
    info!(config_path = %config_path.display(), "Loading configuration");
    let config = load_config(config_path)?;

    info!(destination = %config.queue.url(), "Connecting to queue");
    let queue = queue::connect(&config.queue).await?;

    let shutdown = CancellationToken::new();
    let ctrl_c_token = shutdown.clone();
    tokio::spawn(cancel_on_signal(signal::ctrl_c(), ctrl_c_token));

    info!("Producer started, press Ctrl+C to shutdown");
    run_producer(&config, queue, shutdown).await
}

/// Cancel `shutdown` once `signal` resolves.
///
/// A failed listener is logged and leaves the token untouched.
async fn cancel_on_signal<F>(signal: F, shutdown: CancellationToken)
where
    F: Future<Output = std::io::Result<()>>,
{
    match signal.await {
        Ok(()) => {
            info!("Shutdown signal received");
            shutdown.cancel();
        }
        Err(e) => error!(error = %e, "Failed to listen for shutdown signal"),
    }
}

/// Load the trips named by `config` and publish them until `shutdown` fires.
///
/// Nothing is published when the trips file can't be loaded.
pub async fn run_producer(
    config: &Config,
    queue: Arc<dyn QueueClient>,
    shutdown: CancellationToken,
) -> Result<PublishSummary, RunError> {
    info!(path = %config.source.path.display(), "Loading trips");
    let trips = load_trips(&config.source.path)?;
    info!(trips = trips.len(), "Trips loaded");

    let mut publisher = CyclicPublisher::new(trips, queue, &config.publisher);
    let summary = publisher.run(shutdown).await?;

    info!("Producer shutdown complete");
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_signal_cancels_token() {
        let shutdown = CancellationToken::new();
        cancel_on_signal(async { Ok(()) }, shutdown.clone()).await;
        assert!(shutdown.is_cancelled());
    }

    #[tokio::test]
    async fn test_failed_signal_listener_keeps_running() {
        let shutdown = CancellationToken::new();
        let failed = async { Err(std::io::Error::new(std::io::ErrorKind::Other, "no handler")) };
        cancel_on_signal(failed, shutdown.clone()).await;
        assert!(!shutdown.is_cancelled());
    }
}
