// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State documents: Get, Update, Delete

use crate::store::StateStore;
use zs_adapters::{CoordSession, Coordinator};
use zs_core::{CoordStep, ResourceName, StoreError};

impl<C: Coordinator> StateStore<C> {
    /// Read the state document for `name`, byte for byte
    pub fn get(&self, name: &str) -> Result<Vec<u8>, StoreError> {
        let znode = ResourceName::parse(name)?.state_path();
        let span = tracing::info_span!("store.get", %znode);
        let _guard = span.enter();

        tracing::debug!("get znode state");

        self.with_session(|session| match session.get(&znode) {
            Ok(node) => {
                tracing::info!(stat_version = node.version.0, "state retrieved");
                Ok(node.data)
            }
            Err(e) => {
                let err = StoreError::classify(CoordStep::Get, e);
                match &err {
                    StoreError::NotExist => tracing::error!("state does not exist"),
                    _ => tracing::error!(reason = ?err.cause(), "state cannot be retrieved"),
                }
                Err(err)
            }
        })
    }

    /// Create the state document, or overwrite it fenced on the version
    /// just read.
    ///
    /// Not atomic: two callers creating the same new name race on create and
    /// the loser gets `StoreError::Create`; a writer whose version went stale
    /// gets `StoreError::Update`.
    pub fn update(&self, name: &str, payload: &[u8]) -> Result<(), StoreError> {
        let znode = ResourceName::parse(name)?.state_path();
        let span = tracing::info_span!("store.update", %znode);
        let _guard = span.enter();

        tracing::debug!(bytes = payload.len(), "update znode state");

        self.with_session(|session| {
            let current = session.exists(&znode).map_err(|e| {
                tracing::error!(reason = %e, "cannot check znode existence");
                StoreError::classify(CoordStep::Exists, e)
            })?;

            let Some(version) = current else {
                session.create(&znode, payload).map_err(|e| {
                    tracing::error!(reason = %e, "cannot create znode");
                    StoreError::classify(CoordStep::Create, e)
                })?;
                tracing::info!("state created");
                return Ok(());
            };

            tracing::info!(stat_version = version.0, "update state");
            session.set(&znode, payload, version).map_err(|e| {
                tracing::error!(stat_version = version.0, reason = %e, "cannot update znode");
                StoreError::classify(CoordStep::Set, e)
            })?;
            tracing::info!("state updated");
            Ok(())
        })
    }

    /// Remove the state document. Any lock on `name` is left alone.
    pub fn delete(&self, name: &str) -> Result<(), StoreError> {
        let znode = ResourceName::parse(name)?.state_path();
        let span = tracing::info_span!("store.delete", %znode);
        let _guard = span.enter();

        tracing::debug!("delete znode state");

        self.with_session(|session| {
            let current = session.exists(&znode).map_err(|e| {
                tracing::error!(reason = %e, "cannot check znode existence");
                StoreError::classify(CoordStep::Exists, e)
            })?;

            let Some(version) = current else {
                tracing::error!("state does not exist");
                return Err(StoreError::NotExist);
            };

            tracing::info!(stat_version = version.0, "delete state");
            session.delete(&znode, version).map_err(|e| {
                tracing::error!(stat_version = version.0, reason = %e, "cannot delete znode");
                StoreError::classify(CoordStep::Delete, e)
            })?;
            tracing::info!("state deleted");
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
