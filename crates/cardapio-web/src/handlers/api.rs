//! Service endpoints not tied to a page

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "OK"
}
