// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon configuration from flags and environment

use crate::auth::Credentials;
use clap::{Parser, ValueEnum};
use std::time::Duration;
use zs_core::{ConfigError, CoordConfig};

/// Largest request body accepted for state and lockinfo
pub const DEFAULT_MAX_BODY: usize = 16 * 1024 * 1024;

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Json,
    Pretty,
}

/// Daemon configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "zsd", version, about = "Remote state and lock backend on ZooKeeper")]
pub struct Config {
    /// Comma-separated ZooKeeper endpoints (host:port)
    #[arg(long, env = "ZKS")]
    pub zks: String,

    /// Address to listen on
    #[arg(long, env = "ZS_LISTEN", default_value = "localhost:8000")]
    pub listen: String,

    /// How long to wait for the ensemble on each request (e.g. 1s, 500ms)
    #[arg(
        long,
        env = "ZS_CONNECT_TIMEOUT",
        default_value = "1s",
        value_parser = humantime::parse_duration
    )]
    pub connect_timeout: Duration,

    /// Basic auth user; requires --auth-password
    #[arg(long, env = "ZS_AUTH_USER", requires = "auth_password")]
    pub auth_user: Option<String>,

    /// Basic auth password; requires --auth-user
    #[arg(
        long,
        env = "ZS_AUTH_PASSWORD",
        requires = "auth_user",
        hide_env_values = true
    )]
    pub auth_password: Option<String>,

    #[arg(long, env = "ZS_LOG_FORMAT", value_enum, default_value_t = LogFormat::Json)]
    pub log_format: LogFormat,

    /// Maximum request body size in bytes
    #[arg(long, env = "ZS_MAX_BODY", default_value_t = DEFAULT_MAX_BODY)]
    pub max_body: usize,
}

impl Config {
    /// Coordination settings for the store
    pub fn coord_config(&self) -> Result<CoordConfig, ConfigError> {
        Ok(CoordConfig::from_list(&self.zks)?.with_connect_timeout(self.connect_timeout))
    }

    /// Basic auth credentials, if both halves are configured
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.auth_user, &self.auth_password) {
            (Some(user), Some(password)) => Some(Credentials::new(user, password)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
