// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination service configuration

use std::time::Duration;
use thiserror::Error;

/// How long a session may take to reach any ensemble member
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no coordination service endpoints configured")]
    NoEndpoints,
    #[error("invalid endpoint {0:?}: expected host:port")]
    InvalidEndpoint(String),
}

/// Where the coordination ensemble lives and how long to wait for it.
///
/// Only constructible through [`CoordConfig::new`], so the endpoint list is
/// always non-empty and well-formed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoordConfig {
    endpoints: Vec<String>,
    connect_timeout: Duration,
}

impl CoordConfig {
    pub fn new(endpoints: Vec<String>) -> Result<Self, ConfigError> {
        if endpoints.is_empty() {
            return Err(ConfigError::NoEndpoints);
        }
        for endpoint in &endpoints {
            validate_endpoint(endpoint)?;
        }
        Ok(Self {
            endpoints,
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
        })
    }

    /// Build from a comma-separated list such as the `ZKS` variable
    pub fn from_list(list: &str) -> Result<Self, ConfigError> {
        Self::new(Self::parse_endpoints(list))
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// `host:port` of each ensemble member
    pub fn endpoints(&self) -> &[String] {
        &self.endpoints
    }

    pub fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }

    /// Split a comma-separated endpoint list, dropping empty entries
    pub fn parse_endpoints(list: &str) -> Vec<String> {
        list.split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Connect string understood by the ZooKeeper client
    pub fn connect_string(&self) -> String {
        self.endpoints.join(",")
    }
}

fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let invalid = || ConfigError::InvalidEndpoint(endpoint.to_string());
    let (host, port) = endpoint.rsplit_once(':').ok_or_else(invalid)?;
    if host.is_empty() || port.parse::<u16>().is_err() {
        return Err(invalid());
    }
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
