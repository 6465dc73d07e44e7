// Fri Oct 16 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
    #[error("Scroll failed: {0}")]
    ScrollFailed(String),
    #[error("Page not open")]
    PageNotOpen,
}
