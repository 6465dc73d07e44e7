// Fri Oct 16 2026 - Alex

use crate::config::ConfigError;
use crate::session::SessionError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MonitorError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

pub type MonitorResult<T> = Result<T, MonitorError>;
