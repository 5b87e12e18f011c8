// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Coordination service adapters
//!
//! A [`Coordinator`] opens sessions; a [`CoordSession`] exposes the primitives
//! the store is built from: existence check, read, atomic create,
//! version-fenced set and version-fenced delete. All calls block.

mod zk;

pub use zk::{ZkCoordinator, ZkSession};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CoordCall, FakeCoordinator, FakeSession};

use zs_core::{CoordError, Node, NodePath, Version};

/// Opens sessions against a coordination service
pub trait Coordinator: Clone + Send + Sync + 'static {
    type Session: CoordSession;

    /// Open a session, waiting at most the configured connect timeout
    fn connect(&self) -> Result<Self::Session, CoordError>;
}

/// One live session. Dropping it without [`CoordSession::close`] still
/// releases it.
pub trait CoordSession: Send {
    /// Version of the node, or `None` if it is absent
    fn exists(&self, path: &NodePath) -> Result<Option<Version>, CoordError>;

    /// Payload and version; `CoordError::NoNode` iff the node is absent
    fn get(&self, path: &NodePath) -> Result<Node, CoordError>;

    /// Create the node; `CoordError::NodeExists` if another caller got there first
    fn create(&self, path: &NodePath, data: &[u8]) -> Result<Version, CoordError>;

    /// Overwrite the node if its version is still `expected`
    fn set(&self, path: &NodePath, data: &[u8], expected: Version)
        -> Result<Version, CoordError>;

    /// Remove the node if its version is still `expected`
    fn delete(&self, path: &NodePath, expected: Version) -> Result<(), CoordError>;

    /// End the session
    fn close(self) -> Result<(), CoordError>;
}
