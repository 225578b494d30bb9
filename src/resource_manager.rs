//! ResourceManager REST API facade.
//!
//! One method per API operation: validate enum-constrained arguments,
//! build the path under the configured API root, collect query parameters,
//! delegate to the request executor.
//!
//! Path-segment identifiers (application ids, node ids) are interpolated
//! verbatim; callers must not pass path separators or control characters in
//! them. Query parameter values, by contrast, are percent-encoded by the
//! executor.

use std::time::Duration;

use reqwest::Url;

use crate::client::{ApiClient, ConnectionConfig, Scheme};
use crate::constants::{
    is_legal_application_state, is_legal_final_status, is_legal_healthy_filter,
};
use crate::discovery::ClusterConfigSource;
use crate::error::{ClientError, Result};
use crate::params::construct_parameters;
use crate::response::Response;

const DEFAULT_PORT: u16 = 8088;
const DEFAULT_API_ENDPOINT: &str = "/ws/v1/cluster";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Optional filters for [`ResourceManager::cluster_applications`].
///
/// Time bounds are milliseconds since epoch, passed as strings the way the
/// API expects them.
#[derive(Debug, Clone, Default)]
pub struct ApplicationsQuery {
    pub state: Option<String>,
    pub final_status: Option<String>,
    pub user: Option<String>,
    pub queue: Option<String>,
    pub limit: Option<String>,
    pub started_time_begin: Option<String>,
    pub started_time_end: Option<String>,
    pub finished_time_begin: Option<String>,
    pub finished_time_end: Option<String>,
}

impl ApplicationsQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    pub fn with_final_status(mut self, final_status: impl Into<String>) -> Self {
        self.final_status = Some(final_status.into());
        self
    }

    pub fn with_user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    pub fn with_queue(mut self, queue: impl Into<String>) -> Self {
        self.queue = Some(queue.into());
        self
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    pub fn with_started_time_begin(mut self, ms: impl Into<String>) -> Self {
        self.started_time_begin = Some(ms.into());
        self
    }

    pub fn with_started_time_end(mut self, ms: impl Into<String>) -> Self {
        self.started_time_end = Some(ms.into());
        self
    }

    pub fn with_finished_time_begin(mut self, ms: impl Into<String>) -> Self {
        self.finished_time_begin = Some(ms.into());
        self
    }

    pub fn with_finished_time_end(mut self, ms: impl Into<String>) -> Self {
        self.finished_time_end = Some(ms.into());
        self
    }
}

/// Client for the ResourceManager cluster API.
///
/// Query cluster status, metrics, scheduler configuration, applications and
/// nodes. Each call performs exactly one blocking HTTP round trip; there is
/// no retry and no cross-request state beyond the connection configuration.
///
/// ```no_run
/// use yarn_rm_client::ResourceManager;
///
/// let rm = ResourceManager::builder()
///     .endpoint("https://rm.example.com:8088/ws/v1/cluster")
///     .build()?;
/// let info = rm.cluster_information()?;
/// # Ok::<(), yarn_rm_client::ClientError>(())
/// ```
#[derive(Debug)]
pub struct ResourceManager {
    client: ApiClient,
    api_endpoint: String,
}

impl ResourceManager {
    pub fn builder() -> ResourceManagerBuilder {
        ResourceManagerBuilder::new()
    }

    /// The request executor, for callers needing endpoints this facade does
    /// not cover.
    pub fn api_client(&self) -> &ApiClient {
        &self.client
    }

    /// Overall cluster information.
    pub fn cluster_information(&self) -> Result<Response> {
        self.client
            .get(&format!("{}/info", self.api_endpoint), Vec::new())
    }

    /// Overall cluster metrics. More detailed metrics are available from the
    /// JMX interface.
    pub fn cluster_metrics(&self) -> Result<Response> {
        self.client
            .get(&format!("{}/metrics", self.api_endpoint), Vec::new())
    }

    /// Current scheduler configuration; the shape depends on which scheduler
    /// the cluster runs (Fifo, Capacity, ...).
    pub fn cluster_scheduler(&self) -> Result<Response> {
        self.client
            .get(&format!("{}/scheduler", self.api_endpoint), Vec::new())
    }

    /// Applications on the cluster, optionally filtered.
    ///
    /// `state` and `final_status` are validated against their legal-value
    /// tables before any request is issued.
    pub fn cluster_applications(&self, query: &ApplicationsQuery) -> Result<Response> {
        if let Some(state) = query.state.as_deref() {
            if !is_legal_application_state(state) {
                return Err(ClientError::IllegalArgument(format!(
                    "Application state '{state}' is illegal for parameter 'state'"
                )));
            }
        }
        if let Some(final_status) = query.final_status.as_deref() {
            if !is_legal_final_status(final_status) {
                return Err(ClientError::IllegalArgument(format!(
                    "Final application status '{final_status}' is illegal for parameter 'final_status'"
                )));
            }
        }

        let params = construct_parameters(&[
            ("state", query.state.as_deref()),
            ("finalStatus", query.final_status.as_deref()),
            ("user", query.user.as_deref()),
            ("queue", query.queue.as_deref()),
            ("limit", query.limit.as_deref()),
            ("startedTimeBegin", query.started_time_begin.as_deref()),
            ("startedTimeEnd", query.started_time_end.as_deref()),
            ("finishedTimeBegin", query.finished_time_begin.as_deref()),
            ("finishedTimeEnd", query.finished_time_end.as_deref()),
        ]);

        self.client
            .get(&format!("{}/apps", self.api_endpoint), params)
    }

    /// Per-type, per-state application counts.
    ///
    /// Each entry of `states` is validated against the application-state
    /// table. The API currently supports at most one application type.
    pub fn cluster_application_statistics(
        &self,
        states: Option<&[&str]>,
        application_types: Option<&[&str]>,
    ) -> Result<Response> {
        if let Some(states) = states {
            for state in states {
                if !is_legal_application_state(state) {
                    return Err(ClientError::IllegalArgument(format!(
                        "Application state '{state}' is illegal for parameter 'states'"
                    )));
                }
            }
        }

        let states = states.map(|s| s.join(","));
        let application_types = application_types.map(|t| t.join(","));
        let params = construct_parameters(&[
            ("states", states.as_deref()),
            ("applicationTypes", application_types.as_deref()),
        ]);

        self.client
            .get(&format!("{}/appstatistics", self.api_endpoint), params)
    }

    /// A single application by id.
    pub fn cluster_application(&self, application_id: &str) -> Result<Response> {
        self.client.get(
            &format!("{}/apps/{application_id}", self.api_endpoint),
            Vec::new(),
        )
    }

    /// Attempts made for a single application.
    pub fn cluster_application_attempts(&self, application_id: &str) -> Result<Response> {
        self.client.get(
            &format!("{}/apps/{application_id}/appattempts", self.api_endpoint),
            Vec::new(),
        )
    }

    /// Nodes in the cluster, optionally filtered by state and health.
    ///
    /// `healthy` accepts only `"true"` or `"false"`.
    pub fn cluster_nodes(&self, state: Option<&str>, healthy: Option<&str>) -> Result<Response> {
        if let Some(healthy) = healthy {
            if !is_legal_healthy_filter(healthy) {
                return Err(ClientError::IllegalArgument(format!(
                    "Healthy value '{healthy}' is illegal for parameter 'healthy'; legal values are true, false"
                )));
            }
        }

        let params = construct_parameters(&[("state", state), ("healthy", healthy)]);
        self.client
            .get(&format!("{}/nodes", self.api_endpoint), params)
    }

    /// A single node by id (e.g. `host1:45454`).
    pub fn cluster_node(&self, node_id: &str) -> Result<Response> {
        self.client.get(
            &format!("{}/nodes/{node_id}", self.api_endpoint),
            Vec::new(),
        )
    }
}

/// Builder for [`ResourceManager`].
///
/// The endpoint can come from an explicit URI or from a
/// [`ClusterConfigSource`]; with neither, construction still succeeds and
/// the first request fails with a configuration error. Credentials, timeout
/// and TLS verification apply to both endpoint paths.
#[derive(Default)]
pub struct ResourceManagerBuilder {
    endpoint: Option<String>,
    discovered: Option<(String, String)>,
    username: Option<String>,
    password: Option<String>,
    timeout: Option<Duration>,
    verify_certificates: bool,
}

impl ResourceManagerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Service endpoint as `scheme://host:port/path`. Missing pieces default
    /// to `https`, port 8088 and path `/ws/v1/cluster`.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Obtain host and port from a discovery source instead of an explicit
    /// endpoint. Scheme and API path keep their defaults.
    pub fn discover(mut self, source: &impl ClusterConfigSource) -> Result<Self> {
        self.discovered = Some(source.resource_manager_host_port()?);
        Ok(self)
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Per-call timeout. Defaults to 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enable server-certificate validation. Off by default, which accepts
    /// any certificate; see the `client` module docs before relying on that.
    pub fn verify_certificates(mut self, verify: bool) -> Self {
        self.verify_certificates = verify;
        self
    }

    pub fn build(self) -> Result<ResourceManager> {
        let mut config = ConnectionConfig {
            username: self.username,
            password: self.password,
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            verify_certificates: self.verify_certificates,
            ..Default::default()
        };
        let mut api_endpoint = DEFAULT_API_ENDPOINT.to_string();

        if let Some(endpoint) = self.endpoint {
            let url = Url::parse(&endpoint).map_err(|e| {
                ClientError::Configuration(format!("Invalid service endpoint '{endpoint}': {e}"))
            })?;
            config.scheme = match url.scheme() {
                "http" => Scheme::Http,
                "https" => Scheme::Https,
                other => {
                    return Err(ClientError::Configuration(format!(
                        "Unsupported endpoint scheme '{other}'"
                    )))
                }
            };
            config.hostname = url.host_str().map(str::to_string);
            // Url::port() reports None for a scheme-default port even when the
            // endpoint spelled it out, so only fall back to 8088 when the
            // authority really carried no port.
            config.port = Some(match url.port() {
                Some(port) => port,
                None if endpoint_specifies_port(&endpoint) => {
                    url.port_or_known_default().unwrap_or(DEFAULT_PORT)
                }
                None => DEFAULT_PORT,
            });
            let path = url.path();
            if !path.is_empty() && path != "/" {
                api_endpoint = path.trim_end_matches('/').to_string();
            }
        } else if let Some((hostname, port)) = self.discovered {
            if !hostname.is_empty() {
                config.hostname = Some(hostname);
            }
            config.port = Some(port.parse().map_err(|_| {
                ClientError::Configuration(format!("Discovered port '{port}' is not a valid port"))
            })?);
        }

        let client = ApiClient::new(config)?;
        Ok(ResourceManager {
            client,
            api_endpoint,
        })
    }
}

/// Whether the endpoint's authority spells out a port, including one the URL
/// parser normalizes away for being the scheme default.
fn endpoint_specifies_port(endpoint: &str) -> bool {
    let rest = endpoint
        .split_once("://")
        .map_or(endpoint, |(_, rest)| rest);
    let authority = rest
        .split(['/', '?', '#'])
        .next()
        .unwrap_or(rest);
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);
    match host_port.rsplit_once(':') {
        // A trailing colon segment is a port only when it is all digits;
        // this also keeps bracketed IPv6 hosts without a port out.
        Some((_, port)) => !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}
