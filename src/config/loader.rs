//! Configuration loading from disk and environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::ServiceConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Secret clients must present in `X-API-Key`.
pub const ENV_API_KEY: &str = "MOVIE_PROXY_API_KEY";
/// Key sent to TMDb.
pub const ENV_TMDB_API_KEY: &str = "TMDB_API_KEY";
/// Alternate TMDb base URL.
pub const ENV_TMDB_BASE_URL: &str = "TMDB_BASE_URL";
/// Listener bind address.
pub const ENV_BIND_ADDRESS: &str = "MOVIE_PROXY_BIND";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Read a TOML file into a config without validating it.
pub fn read_config(path: &Path) -> Result<ServiceConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Overlay environment variables on top of file or default values.
///
/// Secrets are usually supplied this way so they stay out of config files.
pub fn apply_env_overrides(config: &mut ServiceConfig) {
    apply_overrides(config, |name| env::var(name).ok());
}

fn apply_overrides(config: &mut ServiceConfig, lookup: impl Fn(&str) -> Option<String>) {
    if let Some(key) = lookup(ENV_API_KEY) {
        config.auth.api_key = key;
    }
    if let Some(key) = lookup(ENV_TMDB_API_KEY) {
        config.upstream.api_key = key;
    }
    if let Some(url) = lookup(ENV_TMDB_BASE_URL) {
        config.upstream.base_url = url;
    }
    if let Some(addr) = lookup(ENV_BIND_ADDRESS) {
        config.listener.bind_address = addr;
    }
}

/// Load configuration from an optional TOML file, apply env overrides, and validate.
pub fn load_config(path: Option<&Path>) -> Result<ServiceConfig, ConfigError> {
    let mut config = match path {
        Some(path) => read_config(path)?,
        None => ServiceConfig::default(),
    };

    apply_env_overrides(&mut config);
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    #[test]
    fn test_read_config_file() {
        let path = std::env::temp_dir().join("movie_proxy_test_config.toml");
        fs::write(
            &path,
            r#"
[listener]
bind_address = "127.0.0.1:8000"

[auth]
api_key = "client-secret"

[upstream]
api_key = "tmdb-key"
timeout_secs = 3

[observability]
log_format = "json"
"#,
        )
        .unwrap();

        let config = read_config(&path).unwrap();
        assert_eq!(config.listener.bind_address, "127.0.0.1:8000");
        assert_eq!(config.auth.api_key, "client-secret");
        assert_eq!(config.upstream.timeout_secs, 3);
        // Unset fields keep their defaults
        assert_eq!(config.upstream.base_url, "https://api.themoviedb.org/3");
        assert_eq!(config.observability.log_format, LogFormat::Json);

        std::fs::remove_file(&path).unwrap_or_default();
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = read_config(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ServiceConfig::default();
        apply_overrides(&mut config, |name| match name {
            ENV_API_KEY => Some("from-env".to_string()),
            ENV_TMDB_BASE_URL => Some("http://127.0.0.1:9999".to_string()),
            _ => None,
        });

        assert_eq!(config.auth.api_key, "from-env");
        assert_eq!(config.upstream.base_url, "http://127.0.0.1:9999");
        assert!(config.upstream.api_key.is_empty());
    }

    #[test]
    fn test_validation_error_display() {
        let err = ConfigError::Validation(vec![
            ValidationError::Empty { field: "auth.api_key" },
            ValidationError::ZeroTimeout { field: "upstream.timeout_secs" },
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: auth.api_key must not be empty, upstream.timeout_secs must be greater than zero"
        );
    }
}
