//! Session credential accessor
//!
//! Reads the bearer token from the session cookie on the incoming request.
//! This is a pure read: no cookie is set, refreshed or invalidated here.

use axum::http::HeaderMap;

/// Cookie request header name
const COOKIE_HEADER: &str = "Cookie";

/// Extract the bearer token from the named session cookie
///
/// Returns `None` when the header or the cookie is absent. Token validity
/// is not checked here; the backend is the authority on rejection.
#[must_use]
pub fn token_from_headers(headers: &HeaderMap, cookie_name: &str) -> Option<String> {
    let cookies = headers.get(COOKIE_HEADER)?.to_str().ok()?;

    cookies.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        (name == cookie_name).then(|| value.to_string())
    })
}
