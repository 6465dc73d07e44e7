// Fri Oct 16 2026 - Alex

pub mod cookie;
pub mod error;
pub mod loader;

pub use cookie::{SameSite, SessionCookie};
pub use error::SessionError;
pub use loader::{load_cookies, CookieSource};

use once_cell::sync::Lazy;
use regex::Regex;

static LOGIN_PROMPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)log\s+in").unwrap());

/// Content heuristic for a page served to a logged-out visitor.
pub fn looks_logged_out(page_content: &str) -> bool {
    LOGIN_PROMPT.is_match(page_content)
}
