use super::types::*;
use crate::config::{env_var_pattern, expand_env_vars, expand_tilde};
use crate::publisher::MAX_MESSAGE_ID_LENGTH;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// SQS rejects `SendMessageBatch` calls with more entries than this.
pub const SQS_MAX_BATCH_ENTRIES: usize = 10;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation failed:\n{}", .0.join("\n"))]
    ValidationList(Vec<String>),

    #[error("validation failed: {0}")]
    Validation(String),
}

pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let yaml_string = fs::read_to_string(path).map_err(|e| {
        ConfigError::Io(std::io::Error::new(
            e.kind(),
            format!("failed to read config file '{}': {}", path.display(), e),
        ))
    })?;

    parse_config(&yaml_string).map_err(|e| match e {
        ConfigError::YamlParse(e) => ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("in file '{}': {}", path.display(), e),
        )),
        other => other,
    })
}

/// Parse and validate config from a YAML string.
pub fn parse_config(yaml: &str) -> Result<Config, ConfigError> {
    // Expand environment variables before parsing so they can appear anywhere
    let yaml_string = expand_env_vars(yaml);
    check_unexpanded_vars(&yaml_string)?;

    let mut config: Config = serde_yaml::from_str(&yaml_string)?;
    config.source.path = expand_tilde(&config.source.path);

    validate_config(&config)?;

    Ok(config)
}

/// Checks for unexpanded environment variables and returns a helpful error
fn check_unexpanded_vars(yaml_string: &str) -> Result<(), ConfigError> {
    // References inside comments are never read, so they can't be missing
    let mut unexpanded_vars: Vec<String> = yaml_string
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(|line| {
            env_var_pattern()
                .captures_iter(line)
                .filter_map(|cap| cap.get(1).map(|m| m.as_str().to_string()))
                .collect::<Vec<_>>()
        })
        .collect();

    if unexpanded_vars.is_empty() {
        return Ok(());
    }

    unexpanded_vars.sort();
    unexpanded_vars.dedup();

    let error_msg = if unexpanded_vars.len() == 1 {
        format!(
            "Environment variable $env{{{0}}} is not set.\n\
             \n\
             To fix this, either:\n\
             1. Set the environment variable: export {0}=...\n\
             2. Replace $env{{{0}}} in the config file with an actual value",
            unexpanded_vars[0]
        )
    } else {
        format!(
            "Environment variables are not set: {}\n\
             \n\
             To fix this, either:\n\
             1. Set the environment variables\n\
             2. Replace the variables in the config file with actual values",
            unexpanded_vars.join(", ")
        )
    };

    Err(ConfigError::Validation(error_msg))
}

pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    if config.source.path.as_os_str().is_empty() {
        errors.push("source.path must not be empty".to_string());
    }

    if config.queue.url().trim().is_empty() {
        errors.push("queue.url must not be empty".to_string());
    }

    let publisher = &config.publisher;
    if publisher.batch_size == 0 {
        errors.push("publisher.batch_size must be at least 1".to_string());
    }

    if publisher.message_id_length == 0 {
        errors.push("publisher.message_id_length must be at least 1".to_string());
    }

    if let QueueConfig::Sqs(_) = config.queue {
        if publisher.batch_size > SQS_MAX_BATCH_ENTRIES {
            errors.push(format!(
                "publisher.batch_size {} exceeds the SQS limit of {} entries per batch",
                publisher.batch_size, SQS_MAX_BATCH_ENTRIES
            ));
        }
        if publisher.message_id_length > MAX_MESSAGE_ID_LENGTH {
            errors.push(format!(
                "publisher.message_id_length {} exceeds the SQS limit of {} characters",
                publisher.message_id_length, MAX_MESSAGE_ID_LENGTH
            ));
        }
    }

    match errors.len() {
        0 => Ok(()),
        1 => Err(ConfigError::Validation(errors.remove(0))),
        _ => Err(ConfigError::ValidationList(errors)),
    }
}
