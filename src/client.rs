//! Request executor.
//!
//! Owns the immutable connection configuration and turns request
//! descriptors into exactly one blocking HTTP round trip each: encode the
//! query string, inject Basic-auth credentials when configured, issue the
//! request over a fresh connection, and classify the response status.
//!
//! # TLS posture
//!
//! The default configuration accepts server certificates without
//! verification, matching how ResourceManager deployments are commonly
//! reached over self-signed endpoints. This is insecure; pass
//! `verify_certificates: true` (or the builder's `verify_certificates(true)`)
//! to enable standard certificate-chain validation.

use std::collections::HashMap;
use std::time::Duration;

use base64::Engine;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::{Method, StatusCode};

use crate::error::{ClientError, Result};
use crate::response::Response;

/// URL scheme for the service endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scheme {
    Http,
    #[default]
    Https,
}

impl Scheme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Http => "http",
            Self::Https => "https",
        }
    }
}

/// Immutable connection configuration, set once at client construction.
///
/// `hostname` and `port` may be absent at build time; the executor raises a
/// configuration error at the first request that needs them.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    pub scheme: Scheme,
    pub hostname: Option<String>,
    pub port: Option<u16>,
    pub username: Option<String>,
    pub password: Option<String>,
    pub timeout: Duration,
    /// Validate server certificates. Defaults to `false` (insecure); see the
    /// module docs.
    pub verify_certificates: bool,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            scheme: Scheme::Https,
            hostname: None,
            port: None,
            username: None,
            password: None,
            timeout: Duration::from_secs(30),
            verify_certificates: false,
        }
    }
}

/// One API request, described as data.
#[derive(Debug, Clone)]
pub struct ApiRequest {
    pub method: Method,
    /// Path below the host, without a query string.
    pub path: String,
    /// Extra headers; merged over the client defaults.
    pub headers: Option<HashMap<String, String>>,
    pub body: String,
    /// Query pairs, already filtered to present values.
    pub query: Vec<(String, String)>,
}

impl ApiRequest {
    /// A GET request for `path` with the given query pairs.
    pub fn get(path: impl Into<String>, query: Vec<(String, String)>) -> Self {
        Self {
            method: Method::GET,
            path: path.into(),
            headers: None,
            body: String::new(),
            query,
        }
    }
}

/// Blocking executor for ResourceManager API requests.
#[derive(Debug)]
pub struct ApiClient {
    config: ConnectionConfig,
    http: HttpClient,
}

impl ApiClient {
    /// Build an executor from connection configuration.
    ///
    /// Connection pooling is disabled so every call opens its own
    /// connection; the configured timeout applies per call.
    pub fn new(config: ConnectionConfig) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(config.timeout)
            .danger_accept_invalid_certs(!config.verify_certificates)
            .pool_max_idle_per_host(0)
            .build()
            .map_err(|e| ClientError::Configuration(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &ConnectionConfig {
        &self.config
    }

    /// Issue a GET request; the common case for this API.
    pub fn get(&self, path: &str, query: Vec<(String, String)>) -> Result<Response> {
        self.request(ApiRequest::get(path, query))
    }

    /// Execute one request and classify the response.
    ///
    /// Status 200 or 202 yields a [`Response`]; any other status is an API
    /// error carrying that code. Transport failures propagate unclassified.
    pub fn request(&self, request: ApiRequest) -> Result<Response> {
        let path = append_query(&request.path, &request.query);
        let (hostname, port) = self.host_port()?;
        let url = format!(
            "{}://{}:{port}{path}",
            self.config.scheme.as_str(),
            authority_host(hostname)
        );

        tracing::info!("Request {url}");

        let headers = self.build_headers(request.headers.as_ref())?;
        let response = self
            .http
            .request(request.method, &url)
            .headers(headers)
            .body(request.body)
            .send()?;

        let status = response.status();
        if status == StatusCode::OK || status == StatusCode::ACCEPTED {
            let headers = response.headers().clone();
            let body = response.bytes()?.to_vec();
            Ok(Response::from_parts(status.as_u16(), headers, body))
        } else {
            Err(ClientError::api_error(status.as_u16()))
        }
    }

    fn host_port(&self) -> Result<(&str, u16)> {
        let hostname = self
            .config
            .hostname
            .as_deref()
            .filter(|h| !h.is_empty())
            .ok_or_else(|| ClientError::Configuration("API hostname is not set".to_string()))?;
        let port = self
            .config
            .port
            .ok_or_else(|| ClientError::Configuration("API port is not set".to_string()))?;
        Ok((hostname, port))
    }

    /// Default headers, caller headers on top, then the Authorization header
    /// when both credentials are configured. Credentials never reach any log
    /// output.
    fn build_headers(&self, extra: Option<&HashMap<String, String>>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(
            USER_AGENT,
            HeaderValue::from_static(concat!("yarn-rm-client/", env!("CARGO_PKG_VERSION"))),
        );

        if let Some(extra) = extra {
            for (name, value) in extra {
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    ClientError::Configuration(format!("Invalid header name '{name}': {e}"))
                })?;
                let value = HeaderValue::from_str(value).map_err(|e| {
                    ClientError::Configuration(format!("Invalid header value: {e}"))
                })?;
                headers.insert(name, value);
            }
        }

        if let (Some(username), Some(password)) = (
            non_empty(self.config.username.as_deref()),
            non_empty(self.config.password.as_deref()),
        ) {
            let mut value = HeaderValue::from_str(&basic_auth_value(username, password))
                .map_err(|e| ClientError::Configuration(format!("Invalid credentials: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        Ok(headers)
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Bracket bare IPv6 hosts so the assembled URL stays parseable.
fn authority_host(hostname: &str) -> std::borrow::Cow<'_, str> {
    if hostname.contains(':') && !hostname.starts_with('[') {
        std::borrow::Cow::Owned(format!("[{hostname}]"))
    } else {
        std::borrow::Cow::Borrowed(hostname)
    }
}

/// `Basic <base64("user:pass")>` per RFC 7617.
fn basic_auth_value(username: &str, password: &str) -> String {
    let credentials =
        base64::engine::general_purpose::STANDARD.encode(format!("{username}:{password}"));
    format!("Basic {credentials}")
}

/// Append percent-encoded query pairs to `path`, with a leading `?` when
/// there is at least one pair.
fn append_query(path: &str, query: &[(String, String)]) -> String {
    if query.is_empty() {
        return path.to_string();
    }
    let qs = query
        .iter()
        .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");
    format!("{path}?{qs}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_query_empty_leaves_path_alone() {
        assert_eq!(append_query("/ws/v1/cluster/info", &[]), "/ws/v1/cluster/info");
    }

    #[test]
    fn append_query_joins_and_escapes() {
        let query = vec![
            ("state".to_string(), "RUNNING".to_string()),
            ("user".to_string(), "alice bob".to_string()),
        ];
        assert_eq!(
            append_query("/apps", &query),
            "/apps?state=RUNNING&user=alice%20bob"
        );
    }

    #[test]
    fn append_query_escapes_reserved_characters() {
        let query = vec![("q".to_string(), "a&b=c".to_string())];
        assert_eq!(append_query("/p", &query), "/p?q=a%26b%3Dc");
    }

    #[test]
    fn bare_ipv6_hosts_get_bracketed() {
        assert_eq!(authority_host("::1"), "[::1]");
        assert_eq!(authority_host("fe80::1"), "[fe80::1]");
        assert_eq!(authority_host("[::1]"), "[::1]");
        assert_eq!(authority_host("rm.example.com"), "rm.example.com");
        assert_eq!(authority_host("10.0.0.7"), "10.0.0.7");
    }

    #[test]
    fn basic_auth_value_matches_rfc_example() {
        // RFC 7617 example credentials
        assert_eq!(
            basic_auth_value("Aladdin", "open sesame"),
            "Basic QWxhZGRpbjpvcGVuIHNlc2FtZQ=="
        );
    }

    #[test]
    fn missing_hostname_is_a_configuration_error() {
        let client = ApiClient::new(ConnectionConfig::default()).unwrap();
        let err = client.get("/ws/v1/cluster/info", Vec::new()).unwrap_err();
        assert!(matches!(err, ClientError::Configuration(_)));
    }

    #[test]
    fn missing_port_is_a_configuration_error() {
        let config = ConnectionConfig {
            hostname: Some("rm.example.com".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(config).unwrap();
        let err = client.get("/ws/v1/cluster/info", Vec::new()).unwrap_err();
        match err {
            ClientError::Configuration(msg) => assert!(msg.contains("port")),
            other => panic!("expected configuration error, got {other:?}"),
        }
    }

    #[test]
    fn auth_header_requires_both_credentials() {
        let config = ConnectionConfig {
            username: Some("alice".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(config).unwrap();
        let headers = client.build_headers(None).unwrap();
        assert!(!headers.contains_key(AUTHORIZATION));
    }

    #[test]
    fn auth_header_set_when_both_credentials_present() {
        let config = ConnectionConfig {
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(config).unwrap();
        let headers = client.build_headers(None).unwrap();
        let value = headers.get(AUTHORIZATION).expect("authorization header");
        assert_eq!(
            value.to_str().unwrap(),
            basic_auth_value("alice", "secret")
        );
        assert!(value.is_sensitive());
    }

    #[test]
    fn caller_headers_survive_auth_injection() {
        let config = ConnectionConfig {
            username: Some("alice".to_string()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(config).unwrap();
        let mut extra = HashMap::new();
        extra.insert("x-requested-by".to_string(), "tests".to_string());
        let headers = client.build_headers(Some(&extra)).unwrap();
        assert_eq!(
            headers.get("x-requested-by").and_then(|v| v.to_str().ok()),
            Some("tests")
        );
        assert!(headers.contains_key(AUTHORIZATION));
        assert_eq!(
            headers.get(ACCEPT).and_then(|v| v.to_str().ok()),
            Some("application/json")
        );
    }

    #[test]
    fn empty_credentials_do_not_authenticate() {
        let config = ConnectionConfig {
            username: Some(String::new()),
            password: Some("secret".to_string()),
            ..Default::default()
        };
        let client = ApiClient::new(config).unwrap();
        let headers = client.build_headers(None).unwrap();
        assert!(!headers.contains_key(AUTHORIZATION));
    }
}
