//! Flash messages carried in short-lived cookies
//!
//! A redirecting handler sets `flash_success` or `flash_error`; the next
//! page render reads both and expires them. Message text is
//! percent-encoded so arbitrary user input survives the cookie grammar.

use axum::http::header::{HeaderMap, HeaderValue, COOKIE};
use percent_encoding::{percent_decode_str, utf8_percent_encode, NON_ALPHANUMERIC};

const SUCCESS_COOKIE: &str = "flash_success";
const ERROR_COOKIE: &str = "flash_error";

/// Flash messages for the current request.
#[derive(Debug, Clone, Default)]
pub struct Flash {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl Flash {
    /// Read flash cookies from request headers.
    pub fn from_headers(headers: &HeaderMap) -> Self {
        let mut flash = Self::default();

        for header in headers.get_all(COOKIE) {
            let Ok(value) = header.to_str() else {
                continue;
            };
            for pair in value.split(';') {
                let Some((name, value)) = pair.trim().split_once('=') else {
                    continue;
                };
                match name {
                    SUCCESS_COOKIE => flash.success = decode(value),
                    ERROR_COOKIE => flash.error = decode(value),
                    _ => {}
                }
            }
        }

        flash
    }

    /// Flash carrying only an error, for re-rendered forms.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: None,
            error: Some(message.into()),
        }
    }
}

fn decode(value: &str) -> Option<String> {
    if value.is_empty() {
        return None;
    }
    percent_decode_str(value)
        .decode_utf8()
        .ok()
        .map(|s| s.into_owned())
}

fn cookie(name: &str, value: &str, max_age: u32) -> HeaderValue {
    let encoded = utf8_percent_encode(value, NON_ALPHANUMERIC);
    let raw = format!("{name}={encoded}; Path=/; HttpOnly; Max-Age={max_age}");
    // Percent-encoded text is plain ASCII
    HeaderValue::from_str(&raw).expect("cookie value is ASCII")
}

/// Set-Cookie value announcing a success message.
pub fn set_success(message: &str) -> HeaderValue {
    cookie(SUCCESS_COOKIE, message, 60)
}

/// Set-Cookie value announcing an error message.
pub fn set_error(message: &str) -> HeaderValue {
    cookie(ERROR_COOKIE, message, 60)
}

/// Set-Cookie values expiring both flash cookies.
pub fn expire_both() -> [HeaderValue; 2] {
    [cookie(SUCCESS_COOKIE, "", 0), cookie(ERROR_COOKIE, "", 0)]
}
