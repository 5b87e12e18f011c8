// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the coordination boundary and the state/lock store

use std::time::Duration;
use thiserror::Error;

/// Low-level outcome of a coordination service call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("no ensemble member reachable within {0:?}")]
    Unreachable(Duration),
    #[error("node does not exist")]
    NoNode,
    #[error("node already exists")]
    NodeExists,
    #[error("node version does not match")]
    BadVersion,
    #[error("coordination service error: {0}")]
    Service(String),
}

/// The adapter call that produced a [`CoordError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoordStep {
    Connect,
    Exists,
    Get,
    Create,
    Set,
    Delete,
}

/// Errors surfaced by store operations.
///
/// The set is closed: the transport maps each variant to a response, and the
/// underlying [`CoordError`] stays reachable through `source()`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("zs: cannot connect to zk")]
    Conn(#[source] CoordError),
    #[error("zs: cannot read znode")]
    Read(#[source] CoordError),
    #[error("zs: cannot find znode")]
    NotExist,
    #[error("zs: cannot create znode")]
    Create(#[source] CoordError),
    #[error("zs: cannot update znode")]
    Update(#[source] CoordError),
    #[error("zs: cannot delete znode")]
    Delete(#[source] CoordError),
    #[error("zs: cannot write to znode: {0}")]
    Write(String),
    #[error("zs: invalid resource name {name:?}: {reason}")]
    InvalidName { name: String, reason: &'static str },
}

impl StoreError {
    /// Classify a failed adapter call into a store error.
    ///
    /// Only a read of a missing node keeps its cause (`NotExist`); version
    /// conflicts and lost creation races collapse into `Update`/`Create`.
    pub fn classify(step: CoordStep, err: CoordError) -> Self {
        match (step, err) {
            (CoordStep::Connect, err) => StoreError::Conn(err),
            (CoordStep::Get, CoordError::NoNode) => StoreError::NotExist,
            (CoordStep::Exists | CoordStep::Get, err) => StoreError::Read(err),
            (CoordStep::Create, err) => StoreError::Create(err),
            (CoordStep::Set, err) => StoreError::Update(err),
            (CoordStep::Delete, err) => StoreError::Delete(err),
        }
    }

    /// Whether a caller may reasonably resubmit: `Update`/`Create` after
    /// re-reading current state, `Conn` after backing off.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            StoreError::Conn(_) | StoreError::Create(_) | StoreError::Update(_)
        )
    }

    /// Underlying coordination failure, if any
    pub fn cause(&self) -> Option<&CoordError> {
        match self {
            StoreError::Conn(e)
            | StoreError::Read(e)
            | StoreError::Create(e)
            | StoreError::Update(e)
            | StoreError::Delete(e) => Some(e),
            StoreError::NotExist | StoreError::Write(_) | StoreError::InvalidName { .. } => None,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
