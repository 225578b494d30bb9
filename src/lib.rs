//! Synchronous client for the Hadoop YARN ResourceManager REST API.
//!
//! The [`ResourceManager`] facade exposes one method per API operation
//! (cluster info, metrics, scheduler, applications, nodes). Each call
//! performs exactly one blocking HTTP round trip and returns either a
//! decoded JSON payload, a raw-body fallback, or a classified error. The
//! library never retries and keeps no state across calls beyond the
//! immutable connection configuration, so a client can be shared freely
//! between threads.
//!
//! # Quick start
//!
//! ```no_run
//! use yarn_rm_client::{ApplicationsQuery, ResourceManager};
//!
//! let rm = ResourceManager::builder()
//!     .endpoint("https://rm.example.com:8088/ws/v1/cluster")
//!     .username("operator")
//!     .password("hunter2")
//!     .build()?;
//!
//! let apps = rm.cluster_applications(
//!     &ApplicationsQuery::new().with_state("RUNNING").with_limit("10"),
//! )?;
//! if let Some(json) = apps.json() {
//!     println!("{json}");
//! }
//! # Ok::<(), yarn_rm_client::ClientError>(())
//! ```
//!
//! # TLS
//!
//! By default the client accepts server certificates without verification,
//! which matches how self-signed ResourceManager endpoints are commonly
//! deployed but is insecure. Call
//! [`verify_certificates(true)`](resource_manager::ResourceManagerBuilder::verify_certificates)
//! to enable standard validation.
//!
//! # Logging
//!
//! The executor emits one `tracing` event per request with the target URL.
//! No subscriber is installed by the library; without one the events are
//! no-ops. Credentials are never logged.

pub mod client;
pub mod constants;
pub mod discovery;
pub mod error;
pub mod params;
pub mod resource_manager;
pub mod response;

pub use client::{ApiClient, ApiRequest, ConnectionConfig, Scheme};
pub use discovery::ClusterConfigSource;
pub use error::{ClientError, Result};
pub use resource_manager::{ApplicationsQuery, ResourceManager, ResourceManagerBuilder};
pub use response::{RawResponse, Response};
