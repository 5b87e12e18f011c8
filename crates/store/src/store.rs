// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use zs_adapters::{CoordSession, Coordinator};
use zs_core::{CoordStep, StoreError};

/// State/lock store over a [`Coordinator`].
///
/// Cheap to clone; clones share nothing but the coordinator handle.
#[derive(Clone)]
pub struct StateStore<C> {
    coordinator: C,
}

impl<C: Coordinator> StateStore<C> {
    pub fn new(coordinator: C) -> Self {
        Self { coordinator }
    }

    pub fn coordinator(&self) -> &C {
        &self.coordinator
    }

    /// Run `f` inside a fresh session, closing it whatever `f` returns
    pub(crate) fn with_session<T>(
        &self,
        f: impl FnOnce(&C::Session) -> Result<T, StoreError>,
    ) -> Result<T, StoreError> {
        let session = self.coordinator.connect().map_err(|e| {
            tracing::error!(reason = %e, "cannot connect to zk");
            StoreError::classify(CoordStep::Connect, e)
        })?;

        let result = f(&session);

        if let Err(e) = session.close() {
            tracing::warn!(reason = %e, "cannot close zk session");
        }
        result
    }
}
