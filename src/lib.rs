pub mod cli;
pub mod config;
pub mod loader;
pub mod publisher;
pub mod queue;
pub mod trip;
