//! Endpoint discovery collaborator.
//!
//! When a client is built without an explicit endpoint, the ResourceManager
//! address can come from environment-provided cluster configuration
//! (yarn-site.xml and friends). Parsing those files is outside this crate;
//! implementors of [`ClusterConfigSource`] supply the two strings and the
//! builder does the rest.

use crate::error::Result;

/// Supplies the ResourceManager (host, port) from ambient configuration.
pub trait ClusterConfigSource {
    /// Returns the ResourceManager hostname and port, both as strings.
    ///
    /// The port string must parse as a decimal u16; a non-numeric port is
    /// rejected by the builder with a configuration error.
    fn resource_manager_host_port(&self) -> Result<(String, String)>;
}

impl<F> ClusterConfigSource for F
where
    F: Fn() -> Result<(String, String)>,
{
    fn resource_manager_host_port(&self) -> Result<(String, String)> {
        self()
    }
}
