use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::model::config::Config;

/// File name looked up in the working directory
pub const CONFIG_FILE: &str = "veloce.toml";

/// Error type for config loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("{field} must be between 0 and 1, got {value}")]
    InvalidThreshold { field: &'static str, value: f64 },
    #[error("debounce_ms must be greater than 0")]
    ZeroDebounce,
}

/// Load config from `explicit` if given, else from `veloce.toml` in `dir`.
/// A missing implicit file yields defaults; a missing explicit one is an error.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
    let path = match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let p = dir.join(CONFIG_FILE);
            if !p.is_file() {
                debug!(path = %p.display(), "no config file, using defaults");
                return Ok(Config::default());
            }
            p
        }
    };

    let text = fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        source: e,
    })?;
    let config = parse_config(&text)?;
    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Parse and validate config text.
pub fn parse_config(text: &str) -> Result<Config, ConfigError> {
    let config: Config = toml::from_str(text)?;
    validate(&config)?;
    Ok(config)
}

fn validate(config: &Config) -> Result<(), ConfigError> {
    for (field, value) in [
        ("date_time_threshold", config.apply.date_time_threshold),
        ("attribute_threshold", config.apply.attribute_threshold),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(ConfigError::InvalidThreshold { field, value });
        }
    }
    if config.live.debounce_ms == 0 {
        return Err(ConfigError::ZeroDebounce);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::config::{ApplyConfig, LiveConfig};
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(parse_config("").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config() {
        let config = parse_config("[apply]\nattribute_threshold = 0.85\n").unwrap();
        assert_eq!(
            config.apply,
            ApplyConfig {
                date_time_threshold: 0.8,
                attribute_threshold: 0.85,
            }
        );
        assert_eq!(config.live, LiveConfig { debounce_ms: 200 });
    }

    #[test]
    fn test_threshold_out_of_range() {
        let err = parse_config("[apply]\ndate_time_threshold = 1.5\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidThreshold {
                field: "date_time_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_zero_debounce_rejected() {
        let err = parse_config("[live]\ndebounce_ms = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::ZeroDebounce));
    }

    #[test]
    fn test_malformed_toml() {
        assert!(matches!(
            parse_config("[apply\n"),
            Err(ConfigError::ParseError(_))
        ));
    }

    #[test]
    fn test_load_from_directory() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(CONFIG_FILE), "[live]\ndebounce_ms = 350\n").unwrap();
        let config = load_config(None, tmp.path()).unwrap();
        assert_eq!(config.live.debounce_ms, 350);
    }

    #[test]
    fn test_missing_implicit_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(load_config(None, tmp.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.toml");
        let err = load_config(Some(&path), tmp.path()).unwrap_err();
        assert!(matches!(err, ConfigError::ReadError { .. }));
        assert!(err.to_string().contains("nope.toml"));
    }
}
