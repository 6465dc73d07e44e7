// Fri Oct 16 2026 - Alex

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Same-site policy accepted by session establishment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum SameSite {
    #[default]
    None,
    Lax,
    Strict,
}

impl SameSite {
    /// Maps free-form exported values onto the closed set. Unknown or
    /// missing input falls back to `None`.
    pub fn normalize(raw: Option<&Value>) -> Self {
        let text = match raw {
            Some(Value::String(s)) => s.trim().to_lowercase(),
            _ => return SameSite::None,
        };

        match text.as_str() {
            "lax" => SameSite::Lax,
            "strict" => SameSite::Strict,
            "no_restriction" | "none" => SameSite::None,
            _ => SameSite::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SameSite::None => "None",
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
        }
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A cookie as exported by a browser or extension, before normalization.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawCookie {
    pub name: String,
    pub value: String,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default, alias = "expirationDate")]
    pub expires: Option<f64>,
    #[serde(default)]
    pub http_only: bool,
    #[serde(default)]
    pub secure: bool,
    #[serde(default)]
    pub same_site: Option<Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionCookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub expires: Option<f64>,
    pub http_only: bool,
    pub secure: bool,
    pub same_site: SameSite,
}

impl From<RawCookie> for SessionCookie {
    fn from(raw: RawCookie) -> Self {
        let same_site = SameSite::normalize(raw.same_site.as_ref());
        Self {
            name: raw.name,
            value: raw.value,
            domain: raw.domain,
            path: raw.path,
            expires: raw.expires,
            http_only: raw.http_only,
            secure: raw.secure,
            same_site,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_same_site_normalization() {
        let cases = [
            (Some(json!("no_restriction")), SameSite::None),
            (Some(json!("Lax")), SameSite::Lax),
            (Some(json!("lax")), SameSite::Lax),
            (Some(json!("STRICT")), SameSite::Strict),
            (Some(json!("unspecified")), SameSite::None),
            (Some(json!(null)), SameSite::None),
            (Some(json!(true)), SameSite::None),
            (None, SameSite::None),
        ];

        for (raw, expected) in cases {
            assert_eq!(SameSite::normalize(raw.as_ref()), expected, "input {:?}", raw);
        }
    }

    #[test]
    fn test_raw_cookie_conversion() {
        let raw: RawCookie = serde_json::from_value(json!({
            "name": "auth_token",
            "value": "abc",
            "domain": ".x.com",
            "path": "/",
            "expirationDate": 1790000000.5,
            "httpOnly": true,
            "secure": true,
            "sameSite": "no_restriction",
            "storeId": "0"
        }))
        .unwrap();

        let cookie = SessionCookie::from(raw);
        assert_eq!(cookie.same_site, SameSite::None);
        assert_eq!(cookie.expires, Some(1790000000.5));
        assert!(cookie.http_only);

        let out = serde_json::to_value(&cookie).unwrap();
        assert_eq!(out["sameSite"], "None");
    }
}
