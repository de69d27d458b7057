//! Bearer Token Extraction
//!
//! Common parsing of the `Authorization: Bearer <token>` header.

use axum::http::{HeaderMap, header};

/// Extract a bearer token from the Authorization header
///
/// Expects the literal scheme prefix `"Bearer "`. Returns `None` when the
/// header is absent, malformed, uses a different scheme, or carries an
/// empty token.
pub fn extract_bearer(headers: &HeaderMap) -> Option<&str> {
    let header = headers.get(header::AUTHORIZATION)?;
    let header = header.to_str().ok()?;
    let token = header.strip_prefix("Bearer ")?.trim();

    if token.is_empty() {
        return None;
    }

    Some(token)
}
