// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Not logged in properly, check your cookies")]
    NotAuthenticated,
    #[error("Failed to install session cookies: {0}")]
    CookiesRejected(String),
    #[error("Navigation to {url} failed: {reason}")]
    NavigationFailed { url: String, reason: String },
    #[error("Automation backend error: {0}")]
    Backend(String),
}
