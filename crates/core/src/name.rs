// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Resource names and the node path scheme
//!
//! A resource `name` owns two nodes: its state at `/<name>` and its lock at
//! `/lock-<name>`. Names go into paths unescaped, so anything that would
//! change the shape of the path is rejected up front.

use crate::error::StoreError;
use std::fmt;

/// Prefix of the lock node that sits next to every state node
pub const LOCK_PREFIX: &str = "lock-";

/// Root of ZooKeeper's own system nodes
const SYSTEM_NODE: &str = "zookeeper";

/// A validated resource name
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ResourceName(String);

impl ResourceName {
    /// Validate a caller-supplied name.
    ///
    /// Rejected: empty names, `.` and `..`, `zookeeper` (the service's own
    /// system node), path separators, control characters, and names starting
    /// with [`LOCK_PREFIX`] (their state node would be another resource's
    /// lock node).
    pub fn parse(name: impl Into<String>) -> Result<Self, StoreError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name is empty")
        } else if name == "." || name == ".." {
            Some("relative path component")
        } else if name == SYSTEM_NODE {
            Some("reserved system node")
        } else if name.contains('/') {
            Some("contains path separator")
        } else if name.chars().any(char::is_control) {
            Some("contains control character")
        } else if name.starts_with(LOCK_PREFIX) {
            Some("reserved lock prefix")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(StoreError::InvalidName { name, reason }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Node holding the resource's state document
    pub fn state_path(&self) -> NodePath {
        NodePath(format!("/{}", self.0))
    }

    /// Node whose presence means the resource is locked
    pub fn lock_path(&self) -> NodePath {
        NodePath(format!("/{}{}", LOCK_PREFIX, self.0))
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Absolute path of a node in the coordination service
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct NodePath(String);

impl NodePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for NodePath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[path = "name_tests.rs"]
mod tests;
