use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use super::probe_config::ProbeConfig;

const CONFIG_FILE_VAR: &str = "CONFIG_FILE";
const DEFAULT_CONFIG_FILE: &str = "sitecheck.yml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("timeout_seconds must be greater than zero")]
    ZeroTimeout,
}

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub probe: ProbeConfig,
}

/// Load the application configuration.
/// The YAML file named by `CONFIG_FILE` is read when set; otherwise `sitecheck.yml`
/// is used if it exists, and built-in defaults if not.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    match env::var(CONFIG_FILE_VAR) {
        Ok(location) => read_config(Path::new(&location)),
        Err(_) => match read_config(Path::new(DEFAULT_CONFIG_FILE)) {
            Err(ConfigError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
                log::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                Ok(AppConfig::default())
            }
            other => other,
        },
    }
}

fn read_config(path: &Path) -> Result<AppConfig, ConfigError> {
    let config_str = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let config = parse_config(&config_str).map_err(|e| match e {
        ConfigError::Parse { source, .. } => ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    log::info!("Loaded configuration from {}", path.display());
    Ok(config)
}

fn parse_config(config_str: &str) -> Result<AppConfig, ConfigError> {
    // An empty file is valid and means "all defaults".
    let probe: ProbeConfig = if config_str.trim().is_empty() {
        ProbeConfig::default()
    } else {
        serde_yaml::from_str(config_str).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?
    };

    if probe.timeout_seconds == 0 {
        return Err(ConfigError::ZeroTimeout);
    }

    Ok(AppConfig { probe })
}
