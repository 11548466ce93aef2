//! Content-type checks for JSON request bodies.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use super::error::ApiError;

/// MIME type accepted for request bodies.
pub const MIME_JSON: &str = "application/json";

/// Check a Content-Type header value, ignoring parameters such as `charset`.
pub fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type.split(';').next().unwrap_or(content_type).trim();
    mime.eq_ignore_ascii_case(MIME_JSON)
}

/// Extractor that rejects request bodies declared as anything but JSON.
///
/// A missing Content-Type is accepted and the body is parsed as JSON.
pub struct JsonContent;

impl<S> FromRequestParts<S> for JsonContent
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match parts.headers.get(header::CONTENT_TYPE) {
            Some(ct) => {
                let ct_str = ct.to_str().map_err(|_| {
                    ApiError::unsupported_media_type("invalid Content-Type header")
                })?;
                if is_json_content_type(ct_str) {
                    Ok(JsonContent)
                } else {
                    Err(ApiError::unsupported_media_type(ct_str))
                }
            }
            None => Ok(JsonContent),
        }
    }
}
