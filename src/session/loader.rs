// Fri Oct 16 2026 - Alex

use super::cookie::{RawCookie, SessionCookie};
use crate::config::ConfigError;
use log::info;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CookieSource {
    File(PathBuf),
    Env(String),
}

impl fmt::Display for CookieSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CookieSource::File(path) => write!(f, "file {}", path.display()),
            CookieSource::Env(var) => write!(f, "environment variable {}", var),
        }
    }
}

/// Loads session cookies, preferring the file over the environment variable.
pub fn load_cookies(file: &Path, env_var: &str) -> Result<(Vec<SessionCookie>, CookieSource), ConfigError> {
    let env_value = std::env::var(env_var).ok();
    load_cookies_from(file, env_var, env_value)
}

pub fn load_cookies_from(
    file: &Path,
    env_var: &str,
    env_value: Option<String>,
) -> Result<(Vec<SessionCookie>, CookieSource), ConfigError> {
    let (contents, source) = if file.exists() {
        info!("Loading cookies from file {}", file.display());
        let contents = fs::read_to_string(file).map_err(|e| ConfigError::InvalidCredentials {
            source_name: file.display().to_string(),
            reason: e.to_string(),
        })?;
        (contents, CookieSource::File(file.to_path_buf()))
    } else if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        info!("Loading cookies from environment variable {}", env_var);
        (value, CookieSource::Env(env_var.to_string()))
    } else {
        return Err(ConfigError::MissingCredentials {
            file: file.to_path_buf(),
            env: env_var.to_string(),
        });
    };

    let raw: Vec<RawCookie> = serde_json::from_str(&contents).map_err(|e| ConfigError::InvalidCredentials {
        source_name: source.to_string(),
        reason: e.to_string(),
    })?;

    let cookies = raw.into_iter().map(SessionCookie::from).collect();
    Ok((cookies, source))
}
