// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::coord::{CoordSession, Coordinator};
use std::time::Instant;
use zs_core::{CoordError, Node, NodePath, Version};

/// Wrapper that adds tracing to any Coordinator
#[derive(Clone)]
pub struct TracedCoordinator<C> {
    inner: C,
}

impl<C> TracedCoordinator<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: Coordinator> Coordinator for TracedCoordinator<C> {
    type Session = TracedSession<C::Session>;

    fn connect(&self) -> Result<Self::Session, CoordError> {
        let span = tracing::debug_span!("coord.connect");
        let _guard = span.enter();

        let start = Instant::now();
        let result = self.inner.connect();
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => tracing::debug!(elapsed_ms = elapsed.as_millis() as u64, "connected"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "connect failed"
            ),
        }

        result.map(TracedSession::new)
    }
}

/// Session wrapper produced by [`TracedCoordinator`]
pub struct TracedSession<S> {
    inner: S,
}

impl<S> TracedSession<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: CoordSession> CoordSession for TracedSession<S> {
    fn exists(&self, path: &NodePath) -> Result<Option<Version>, CoordError> {
        let result = self.inner.exists(path);
        match &result {
            Ok(version) => tracing::trace!(%path, version = ?version.map(|v| v.0), "checked"),
            Err(e) => tracing::warn!(%path, error = %e, "exists failed"),
        }
        result
    }

    fn get(&self, path: &NodePath) -> Result<Node, CoordError> {
        let span = tracing::debug_span!("coord.get", %path);
        let _guard = span.enter();

        let result = self.inner.get(path);
        match &result {
            Ok(node) => tracing::debug!(
                bytes = node.data.len(),
                version = node.version.0,
                "read"
            ),
            Err(CoordError::NoNode) => tracing::debug!("absent"),
            Err(e) => tracing::warn!(error = %e, "get failed"),
        }
        result
    }

    fn create(&self, path: &NodePath, data: &[u8]) -> Result<Version, CoordError> {
        let span = tracing::info_span!("coord.create", %path);
        let _guard = span.enter();

        tracing::debug!(bytes = data.len(), "creating");

        let start = Instant::now();
        let result = self.inner.create(path, data);
        let elapsed = start.elapsed();

        match &result {
            Ok(_) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "created"),
            // Losing a creation race is routine for locks
            Err(CoordError::NodeExists) => tracing::info!("already exists"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "create failed"
            ),
        }
        result
    }

    fn set(
        &self,
        path: &NodePath,
        data: &[u8],
        expected: Version,
    ) -> Result<Version, CoordError> {
        let span = tracing::info_span!("coord.set", %path, expected = expected.0);
        let _guard = span.enter();

        tracing::debug!(bytes = data.len(), "setting");

        let start = Instant::now();
        let result = self.inner.set(path, data, expected);
        let elapsed = start.elapsed();

        match &result {
            Ok(version) => tracing::info!(
                version = version.0,
                elapsed_ms = elapsed.as_millis() as u64,
                "set"
            ),
            Err(CoordError::BadVersion) => tracing::warn!("version conflict"),
            Err(e) => tracing::error!(
                elapsed_ms = elapsed.as_millis() as u64,
                error = %e,
                "set failed"
            ),
        }
        result
    }

    fn delete(&self, path: &NodePath, expected: Version) -> Result<(), CoordError> {
        let span = tracing::info_span!("coord.delete", %path, expected = expected.0);
        let _guard = span.enter();

        let result = self.inner.delete(path, expected);
        match &result {
            Ok(()) => tracing::info!("deleted"),
            Err(e) => tracing::warn!(error = %e, "delete failed"),
        }
        result
    }

    fn close(self) -> Result<(), CoordError> {
        let result = self.inner.close();
        if let Err(e) = &result {
            // Session is gone either way
            tracing::warn!(error = %e, "close failed");
        }
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
