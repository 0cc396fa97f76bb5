//! Optional RON configuration read from `./catalog_app.ron`.
//!
//! Every field has a default, so a missing file or a partial file is fine.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use catalog_core::PageSize;
use catalog_engine::{EngineConfig, FetchSettings, DEFAULT_PRODUCTS_ENDPOINT};
use serde::Deserialize;

use super::logging::LogDestination;

pub(crate) const CONFIG_FILENAME: &str = "catalog_app.ron";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AppConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
    pub request_timeout_secs: u64,
    pub max_bytes: u64,
    pub default_page_size: usize,
    pub log_destination: LogDestination,
}

impl Default for AppConfig {
    fn default() -> Self {
        let fetch = FetchSettings::default();
        Self {
            endpoint: DEFAULT_PRODUCTS_ENDPOINT.to_string(),
            connect_timeout_secs: fetch.connect_timeout.as_secs(),
            request_timeout_secs: fetch.request_timeout.as_secs(),
            max_bytes: fetch.max_bytes,
            default_page_size: PageSize::default().rows(),
            log_destination: LogDestination::File,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum ConfigError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: ron::error::SpannedError,
    },
    #[error("unsupported page size {0}; expected one of 5, 10, 20, 50")]
    PageSize(usize),
}

impl AppConfig {
    pub fn page_size(&self) -> Result<PageSize, ConfigError> {
        PageSize::from_rows(self.default_page_size)
            .ok_or(ConfigError::PageSize(self.default_page_size))
    }

    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            endpoint: self.endpoint.clone(),
            fetch: FetchSettings {
                connect_timeout: Duration::from_secs(self.connect_timeout_secs),
                request_timeout: Duration::from_secs(self.request_timeout_secs),
                max_bytes: self.max_bytes,
                ..FetchSettings::default()
            },
        }
    }
}

/// Reads the config file from `dir`. A missing file yields the defaults.
pub(crate) fn load_config(dir: &Path) -> Result<AppConfig, ConfigError> {
    let path = dir.join(CONFIG_FILENAME);
    let content = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            return Ok(AppConfig::default());
        }
        Err(source) => return Err(ConfigError::Read { path, source }),
    };

    ron::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(dir.path()).unwrap();

        assert_eq!(config, AppConfig::default());
        assert_eq!(config.endpoint, "https://dummyjson.com/products");
        assert_eq!(config.page_size().unwrap(), PageSize::Ten);
    }

    #[test]
    fn partial_file_overrides_given_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"(endpoint: "http://localhost:8080/products", default_page_size: 20, log_destination: Off)"#,
        )
        .unwrap();

        let config = load_config(dir.path()).unwrap();
        assert_eq!(config.endpoint, "http://localhost:8080/products");
        assert_eq!(config.page_size().unwrap(), PageSize::Twenty);
        assert_eq!(config.log_destination, LogDestination::Off);
        assert_eq!(config.request_timeout_secs, 30);

        let engine = config.engine_config();
        assert_eq!(engine.endpoint, "http://localhost:8080/products");
        assert_eq!(engine.fetch.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "(colour: true)").unwrap();

        assert!(matches!(
            load_config(dir.path()),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn page_size_outside_selector_is_rejected() {
        let config = AppConfig {
            default_page_size: 15,
            ..AppConfig::default()
        };
        let err = config.page_size().unwrap_err();
        assert_eq!(
            err.to_string(),
            "unsupported page size 15; expected one of 5, 10, 20, 50"
        );
    }
}
