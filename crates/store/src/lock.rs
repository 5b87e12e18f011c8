// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Advisory locks: Lock, Unlock
//!
//! A resource is locked exactly while its lock node exists. The node's
//! payload is the lockinfo of whoever created it and is never rewritten.

use crate::store::StateStore;
use zs_adapters::{CoordSession, Coordinator};
use zs_core::{CoordStep, LockOutcome, ResourceName, StoreError};

impl<C: Coordinator> StateStore<C> {
    /// Take the lock on `name`, or report who holds it.
    ///
    /// If the lock already exists its stored lockinfo comes back with
    /// `already_locked` set and `lockinfo` is discarded, even when the caller
    /// is the holder. A caller that loses the creation race to a concurrent
    /// locker gets `StoreError::Create` and has to ask again.
    pub fn lock(&self, name: &str, lockinfo: &[u8]) -> Result<LockOutcome, StoreError> {
        let znode = ResourceName::parse(name)?.lock_path();
        let span = tracing::info_span!("store.lock", %znode);
        let _guard = span.enter();

        tracing::debug!("lock znode state");

        self.with_session(|session| {
            let current = session.exists(&znode).map_err(|e| {
                tracing::error!(reason = %e, "cannot check znode existence");
                StoreError::classify(CoordStep::Exists, e)
            })?;

            if current.is_some() {
                // Vanishing between exists and get is a read failure, not "unlocked"
                let existing = session.get(&znode).map_err(|e| {
                    tracing::error!(reason = %e, "lock state cannot be retrieved");
                    StoreError::Read(e)
                })?;
                tracing::info!(stat_version = existing.version.0, "lock exists");
                return Ok(LockOutcome::held(existing.data));
            }

            session.create(&znode, lockinfo).map_err(|e| {
                tracing::error!(reason = %e, "cannot create znode");
                StoreError::classify(CoordStep::Create, e)
            })?;
            tracing::info!("lock created");
            Ok(LockOutcome::acquired(lockinfo.to_vec()))
        })
    }

    /// Release the lock on `name`, whoever holds it
    pub fn unlock(&self, name: &str) -> Result<(), StoreError> {
        let znode = ResourceName::parse(name)?.lock_path();
        let span = tracing::info_span!("store.unlock", %znode);
        let _guard = span.enter();

        tracing::debug!("unlock state");

        self.with_session(|session| {
            let current = session.exists(&znode).map_err(|e| {
                tracing::error!(reason = %e, "cannot check znode existence");
                StoreError::classify(CoordStep::Exists, e)
            })?;

            let Some(version) = current else {
                tracing::error!("lockinfo does not exist");
                return Err(StoreError::NotExist);
            };

            tracing::info!(stat_version = version.0, "delete lockinfo");
            session.delete(&znode, version).map_err(|e| {
                tracing::error!(stat_version = version.0, reason = %e, "cannot delete znode");
                StoreError::classify(CoordStep::Delete, e)
            })?;
            tracing::info!("state unlocked");
            Ok(())
        })
    }
}

#[cfg(test)]
#[path = "lock_tests.rs"]
mod tests;
