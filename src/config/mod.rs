pub mod generate;
pub mod parse;
pub mod types;

use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

pub use parse::{load_config, parse_config, ConfigError};
pub use types::{Config, PublisherConfig, QueueConfig, RemainderPolicy};

const USER_CONFIG_PATH: &str = ".config/trip-producer/config.yml";
const SYSTEM_CONFIG_PATH: &str = "/etc/trip-producer/config.yml";

/// Matches `$env{VAR_NAME}` where VAR_NAME starts with a letter or underscore.
pub(crate) fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"\$env\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("env var pattern is valid")
    })
}

/// Expands environment variables in a string.
/// Supports $env{VAR_NAME} syntax.
/// If an environment variable is not set, it's left unchanged.
pub fn expand_env_vars(text: &str) -> String {
    env_var_pattern()
        .replace_all(text, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
        })
        .to_string()
}

/// Expands tilde (~) in paths to the user's home directory.
/// Returns the path unchanged if it doesn't start with tilde or home directory cannot be determined.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let path_str = path.to_string_lossy();

    if let Some(rest) = path_str.strip_prefix("~/") {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir.join(rest);
        }
    } else if path_str == "~" {
        if let Some(home_dir) = dirs::home_dir() {
            return home_dir;
        }
    }

    path.to_path_buf()
}

/// Locations searched when no `--config` is given, in order.
pub fn default_config_locations() -> Vec<PathBuf> {
    let mut locations = Vec::new();
    if let Some(home_dir) = dirs::home_dir() {
        locations.push(home_dir.join(USER_CONFIG_PATH));
    }
    locations.push(PathBuf::from(SYSTEM_CONFIG_PATH));
    locations
}

/// Path `config init` writes to.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home_dir| home_dir.join(USER_CONFIG_PATH))
}

/// Resolves the config file path based on explicit argument or default locations.
/// Returns the first existing path from:
/// 1. Explicit path (if provided, with tilde expansion)
/// 2. ~/.config/trip-producer/config.yml
/// 3. /etc/trip-producer/config.yml
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(expand_tilde(path));
    }

    default_config_locations()
        .into_iter()
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_expand_env_vars_single() {
        std::env::set_var("TRIP_PRODUCER_TEST_VAR", "test_value");
        let result = expand_env_vars("path/$env{TRIP_PRODUCER_TEST_VAR}/file");
        assert_eq!(result, "path/test_value/file");
        std::env::remove_var("TRIP_PRODUCER_TEST_VAR");
    }

    #[test]
    fn test_expand_env_vars_unset() {
        let result = expand_env_vars("path/$env{TRIP_PRODUCER_NONEXISTENT}/file");
        assert_eq!(result, "path/$env{TRIP_PRODUCER_NONEXISTENT}/file");
    }

    #[test]
    fn test_expand_env_vars_partial() {
        std::env::set_var("TRIP_PRODUCER_SET_VAR", "exists");
        let result = expand_env_vars("$env{TRIP_PRODUCER_SET_VAR}/$env{TRIP_PRODUCER_UNSET_VAR}");
        assert_eq!(result, "exists/$env{TRIP_PRODUCER_UNSET_VAR}");
        std::env::remove_var("TRIP_PRODUCER_SET_VAR");
    }

    #[test]
    fn test_expand_env_vars_ignores_shell_syntax() {
        let result = expand_env_vars("${HOME}/trips");
        assert_eq!(result, "${HOME}/trips");
    }

    #[test]
    fn test_expand_tilde_with_path() {
        let expanded = expand_tilde(Path::new("~/data/trips.json"));
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expanded, home.join("data/trips.json"));
        }
    }

    #[test]
    fn test_expand_tilde_no_expansion() {
        assert_eq!(expand_tilde(Path::new("/abs/trips.json")), Path::new("/abs/trips.json"));
        assert_eq!(expand_tilde(Path::new("data/trips.json")), Path::new("data/trips.json"));
    }

    #[test]
    fn test_resolve_explicit_path_wins() {
        let resolved = resolve_config_path(Some(Path::new("/tmp/custom.yml")));
        assert_eq!(resolved, Some(PathBuf::from("/tmp/custom.yml")));
    }

    #[test]
    fn test_default_locations_end_with_system_path() {
        let locations = default_config_locations();
        assert_eq!(locations.last(), Some(&PathBuf::from(SYSTEM_CONFIG_PATH)));
    }
}
