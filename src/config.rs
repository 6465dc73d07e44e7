// Fri Oct 16 2026 - Alex

use crate::collector::CollectorSettings;
use crate::model::handle::{
    extract_handle_from_url, is_valid_handle, looks_like_url, normalize_handle, PROFILE_URL_TEMPLATE,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const DEFAULT_COOKIES_ENV: &str = "X_COOKIES";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Config file not found: {0:?}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("No cookies found. Provide {file:?} or set the {env} environment variable")]
    MissingCredentials { file: PathBuf, env: String },
    #[error("Invalid cookie material from {source_name}: {reason}")]
    InvalidCredentials { source_name: String, reason: String },
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Account whose followers are harvested.
    pub account: String,
    pub cookies_file: PathBuf,
    pub cookies_env: String,
    /// The overwritten "current" record.
    pub output_file: PathBuf,
    pub history_dir: PathBuf,
    pub profile_url_template: String,
    pub collector: CollectorSettings,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            account: String::new(),
            cookies_file: PathBuf::from("cookies.json"),
            cookies_env: DEFAULT_COOKIES_ENV.to_string(),
            output_file: PathBuf::from("followers_data.json"),
            history_dir: PathBuf::from("followers_history"),
            profile_url_template: PROFILE_URL_TEMPLATE.to_string(),
            collector: CollectorSettings::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_account(mut self, account: &str) -> Self {
        self.account = account.to_string();
        self
    }

    pub fn with_cookies_file(mut self, path: PathBuf) -> Self {
        self.cookies_file = path;
        self
    }

    pub fn with_output_file(mut self, path: PathBuf) -> Self {
        self.output_file = path;
        self
    }

    pub fn with_history_dir(mut self, path: PathBuf) -> Self {
        self.history_dir = path;
        self
    }

    pub fn with_collector(mut self, collector: CollectorSettings) -> Self {
        self.collector = collector;
        self
    }

    /// The target account handle. `account` may also be a profile URL.
    pub fn account_handle(&self) -> String {
        if looks_like_url(&self.account) {
            extract_handle_from_url(&self.account)
        } else {
            normalize_handle(&self.account)
        }
    }

    pub fn latest_file(&self) -> PathBuf {
        self.history_dir.join("latest.json")
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let handle = self.account_handle();
        if handle.is_empty() || handle == "unknown" {
            return Err(ConfigError::Invalid("account must be set".to_string()));
        }
        if !is_valid_handle(&handle) {
            return Err(ConfigError::Invalid(format!("{:?} is not a valid account handle", handle)));
        }
        if !self.profile_url_template.contains("{handle}") {
            return Err(ConfigError::Invalid(
                "profile_url_template must contain {handle}".to_string(),
            ));
        }
        self.collector.validate().map_err(ConfigError::Invalid)
    }
}
