//! Desktop configuration: where the data files live and how to log.

use std::path::PathBuf;

use stocktrack_observability::LogFormat;

pub const CATALOG_FILE_ENV: &str = "STOCKTRACK_CATALOG_FILE";
pub const ORDERS_FILE_ENV: &str = "STOCKTRACK_ORDERS_FILE";
pub const LOG_FORMAT_ENV: &str = "STOCKTRACK_LOG_FORMAT";

pub const DEFAULT_CATALOG_FILE: &str = "urunler.json";
pub const DEFAULT_ORDERS_FILE: &str = "siparisler.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DesktopConfig {
    pub catalog_path: PathBuf,
    pub orders_path: PathBuf,
    pub log_format: LogFormat,
    /// Environment values that were present but unusable, for logging once
    /// the subscriber is installed.
    pub warnings: Vec<String>,
}

impl Default for DesktopConfig {
    /// Both files in the working directory, text logs.
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from(DEFAULT_CATALOG_FILE),
            orders_path: PathBuf::from(DEFAULT_ORDERS_FILE),
            log_format: LogFormat::Text,
            warnings: Vec::new(),
        }
    }
}

impl DesktopConfig {
    /// Defaults overridden by the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    ///
    /// Blank values are ignored. An unknown log format falls back to text and
    /// is recorded in `warnings`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(path) = get(CATALOG_FILE_ENV) {
            config.catalog_path = PathBuf::from(path);
        }
        if let Some(path) = get(ORDERS_FILE_ENV) {
            config.orders_path = PathBuf::from(path);
        }
        if let Some(raw) = get(LOG_FORMAT_ENV) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(err) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_ENV}: {err}; using text")),
            }
        }
        config
    }

    pub fn with_catalog_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    pub fn with_orders_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.orders_path = path.into();
        self
    }

    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }
}
