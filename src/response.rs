//! JSON-or-raw response wrapper.
//!
//! The ResourceManager API answers with JSON on every documented endpoint,
//! but some responses (204-style empty bodies, proxy error pages) carry no
//! parseable payload. Decoding failure is a soft fallback, not an error:
//! callers get the raw response parts and can still inspect status, headers
//! and body.

use reqwest::header::HeaderMap;

/// Unparsed response parts, kept when the body is not valid JSON.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Result of a successful API call.
///
/// Callers know per endpoint which JSON shape to expect; `Raw` is the rare
/// fallback for empty or non-JSON bodies.
#[derive(Debug)]
pub enum Response {
    /// The body decoded as JSON (any shape: object, array, scalar).
    Decoded(serde_json::Value),
    /// The body was empty or not valid JSON.
    Raw(RawResponse),
}

impl Response {
    /// Build a wrapper from response parts, attempting JSON decode first.
    pub fn from_parts(status: u16, headers: HeaderMap, body: Vec<u8>) -> Self {
        match serde_json::from_slice(&body) {
            Ok(value) => Self::Decoded(value),
            Err(_) => Self::Raw(RawResponse {
                status,
                headers,
                body,
            }),
        }
    }

    /// The decoded JSON value, if the body parsed.
    pub fn json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Decoded(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// Consume the wrapper, yielding the decoded JSON value if any.
    pub fn into_json(self) -> Option<serde_json::Value> {
        match self {
            Self::Decoded(value) => Some(value),
            Self::Raw(_) => None,
        }
    }

    /// The raw response parts, if decoding fell back.
    pub fn raw(&self) -> Option<&RawResponse> {
        match self {
            Self::Decoded(_) => None,
            Self::Raw(raw) => Some(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_json_object() {
        let body = br#"{"clusterInfo":{"id":1324053971963}}"#.to_vec();
        let response = Response::from_parts(200, HeaderMap::new(), body);
        let value = response.json().expect("decoded");
        assert_eq!(value["clusterInfo"]["id"], 1324053971963u64);
    }

    #[test]
    fn decodes_scalar_json() {
        let response = Response::from_parts(200, HeaderMap::new(), b"42".to_vec());
        assert_eq!(response.into_json(), Some(serde_json::json!(42)));
    }

    #[test]
    fn empty_body_falls_back_to_raw() {
        let response = Response::from_parts(202, HeaderMap::new(), Vec::new());
        assert!(response.json().is_none());
        let raw = response.raw().expect("raw");
        assert_eq!(raw.status, 202);
        assert!(raw.body.is_empty());
    }

    #[test]
    fn malformed_body_falls_back_to_raw() {
        let response = Response::from_parts(200, HeaderMap::new(), b"<html>oops".to_vec());
        let raw = response.raw().expect("raw");
        assert_eq!(raw.body, b"<html>oops");
    }
}
