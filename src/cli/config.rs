use crate::config::generate::generate_starter_config;
use crate::config::{load_config, user_config_path, ConfigError};
use std::fs;
use std::path::{Path, PathBuf};

const SYSTEM_CONFIG_FALLBACK: &str = "/etc/trip-producer/config.yml";

pub fn init(stdout: bool) -> Result<(), Box<dyn std::error::Error>> {
    if stdout {
        print!("{}", generate_starter_config());
        return Ok(());
    }

    // Prefer the user config dir, fall back to /etc when it can't be created
    let config_path = match user_config_path() {
        Some(user_config) => match user_config.parent().map(fs::create_dir_all) {
            Some(Err(_)) => {
                eprintln!("Warning: Could not create directory for {}", user_config.display());
                eprintln!("Falling back to {}", SYSTEM_CONFIG_FALLBACK);
                PathBuf::from(SYSTEM_CONFIG_FALLBACK)
            }
            _ => user_config,
        },
        None => PathBuf::from(SYSTEM_CONFIG_FALLBACK),
    };

    if config_path.exists() {
        eprintln!(
            "Error: Config file already exists at {}",
            config_path.display()
        );
        eprintln!("Remove it first or use --stdout to print the config");
        std::process::exit(1);
    }

    write_starter_config(&config_path)?;

    println!("Config file written to {}", config_path.display());
    Ok(())
}

/// Write the starter config to `path`, creating parent directories.
pub fn write_starter_config(path: &Path) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, generate_starter_config())
}

/// Load `path` and describe the settings the producer would run with.
pub fn describe_config(path: &Path) -> Result<String, ConfigError> {
    let config = load_config(path)?;
    Ok(format!(
        "  source:    {}\n  queue:     {}\n  publisher: {} trips every {:?} (remainder: {:?})",
        config.source.path.display(),
        config.queue.url(),
        config.publisher.batch_size,
        config.publisher.interval,
        config.publisher.remainder
    ))
}

pub fn validate(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = config_path.ok_or("No config file found. Use --config to specify a path.")?;

    println!("Validating config file: {}", path.display());

    match describe_config(&path) {
        Ok(summary) => {
            println!("✓ Config is valid");
            println!("{}", summary);
            Ok(())
        }
        Err(e) => {
            eprintln!("✗ Config validation failed:\n{}", e);
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_written_starter_config_validates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested/dir/config.yml");

        write_starter_config(&path).unwrap();
        let summary = describe_config(&path).unwrap();

        assert!(summary.contains("data/trips.json"));
        assert!(summary.contains("https://sqs.us-east-1.amazonaws.com/123456789012/trips"));
        assert!(summary.contains("5 trips every 1s (remainder: Skip)"));
    }

    #[test]
    fn test_describe_reports_validation_failure() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.yml");
        fs::write(
            &path,
            "queue:\n  type: sqs\n  url: https://sqs.us-east-1.amazonaws.com/1/trips\npublisher:\n  batch_size: 20\n",
        )
        .unwrap();

        let err = describe_config(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("batch_size 20"));
    }
}
