// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: startup and shutdown.

use std::future::Future;
use std::net::SocketAddr;
use std::time::Instant;

use axum::Router;
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::info;
use zs_adapters::{TracedCoordinator, ZkCoordinator};
use zs_core::ConfigError;
use zs_store::StateStore;

use crate::config::Config;
use crate::server::{router, RouterOptions};

/// Store with concrete adapter types (wrapped with tracing)
pub type DaemonStore = StateStore<TracedCoordinator<ZkCoordinator>>;

/// Bound daemon, ready to serve
pub struct Daemon {
    listener: TcpListener,
    app: Router,
    start_time: Instant,
}

impl Daemon {
    /// Address actually bound, which differs from the configured one for port 0
    pub fn local_addr(&self) -> Result<SocketAddr, LifecycleError> {
        Ok(self.listener.local_addr()?)
    }

    /// Serve until `shutdown` resolves, then drain in-flight requests
    pub async fn run<F>(self, shutdown: F) -> Result<(), LifecycleError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        axum::serve(self.listener, self.app)
            .with_graceful_shutdown(shutdown)
            .await?;

        info!(
            uptime_secs = self.start_time.elapsed().as_secs(),
            "daemon shutdown complete"
        );
        Ok(())
    }
}

/// Lifecycle errors
#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to bind {0}: {1}")]
    BindFailed(String, std::io::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Validate the configuration, build the store and bind the listener.
///
/// Does not contact the ensemble: every request opens its own session.
pub async fn startup(config: &Config) -> Result<Daemon, LifecycleError> {
    let coord = config.coord_config()?;
    info!(
        zks = %coord.connect_string(),
        connect_timeout_ms = coord.connect_timeout().as_millis() as u64,
        "using zookeeper ensemble"
    );

    let store: DaemonStore = StateStore::new(TracedCoordinator::new(ZkCoordinator::new(coord)));
    let options = RouterOptions::from(config);
    if let Some(credentials) = &options.credentials {
        info!(user = credentials.user(), "basic auth enabled");
    }
    let app = router(store, options);

    // Bind last, only after the configuration is known good
    let listener = TcpListener::bind(&config.listen)
        .await
        .map_err(|e| LifecycleError::BindFailed(config.listen.clone(), e))?;

    info!(addr = %listener.local_addr()?, "daemon listening");

    Ok(Daemon {
        listener,
        app,
        start_time: Instant::now(),
    })
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
