// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Node payloads and versions

use std::fmt;

/// Data version assigned by the coordination service on every write.
///
/// Only meaningful for conditional writes against the node it was read from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Version(pub i32);

impl Version {
    /// Version of a node that has just been created
    pub const INITIAL: Version = Version(0);
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Payload and version of a node, as read in one call
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub data: Vec<u8>,
    pub version: Version,
}

/// Result of a lock attempt.
///
/// `already_locked` is not an error: it carries the holder's lockinfo back.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LockOutcome {
    pub already_locked: bool,
    pub lockinfo: Vec<u8>,
}

impl LockOutcome {
    pub fn acquired(lockinfo: Vec<u8>) -> Self {
        Self {
            already_locked: false,
            lockinfo,
        }
    }

    pub fn held(lockinfo: Vec<u8>) -> Self {
        Self {
            already_locked: true,
            lockinfo,
        }
    }
}
