// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake coordination service for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CoordSession, Coordinator};
use std::collections::HashMap;
use std::sync::{Arc, Barrier, Mutex, MutexGuard};
use std::time::Duration;
use zs_core::{CoordError, CoordStep, Node, NodePath, Version};

/// Recorded coordination call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoordCall {
    Connect,
    Exists { path: String },
    Get { path: String },
    Create { path: String, data: Vec<u8> },
    Set { path: String, data: Vec<u8>, expected: Version },
    Delete { path: String, expected: Version },
    Close,
}

#[derive(Default)]
struct FakeState {
    nodes: HashMap<String, Node>,
    calls: Vec<CoordCall>,
    failures: HashMap<CoordStep, CoordError>,
    unreachable: bool,
    sessions_opened: usize,
    sessions_open: usize,
}

/// In-memory coordination service with linearizable create/set/delete.
///
/// Clones share the same node space, so one fake can back many concurrent
/// store calls.
#[derive(Clone)]
pub struct FakeCoordinator {
    state: Arc<Mutex<FakeState>>,
    exists_barrier: Arc<Mutex<Option<Arc<Barrier>>>>,
    connect_timeout: Duration,
}

impl Default for FakeCoordinator {
    fn default() -> Self {
        Self {
            state: Arc::default(),
            exists_barrier: Arc::default(),
            connect_timeout: zs_core::DEFAULT_CONNECT_TIMEOUT,
        }
    }
}

impl FakeCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, FakeState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<CoordCall> {
        self.state().calls.clone()
    }

    /// Current node at `path`, if any
    pub fn node(&self, path: &str) -> Option<Node> {
        self.state().nodes.get(path).cloned()
    }

    /// Seed a node directly, bypassing the call log
    pub fn insert_node(&self, path: &str, data: &[u8], version: Version) {
        self.state().nodes.insert(
            path.to_string(),
            Node {
                data: data.to_vec(),
                version,
            },
        );
    }

    /// Make every subsequent connect fail as if no member answered
    pub fn set_unreachable(&self, unreachable: bool) {
        self.state().unreachable = unreachable;
    }

    /// Fail every subsequent call of `step` with `err`
    pub fn fail_step(&self, step: CoordStep, err: CoordError) {
        self.state().failures.insert(step, err);
    }

    pub fn clear_failures(&self) {
        self.state().failures.clear();
    }

    /// Hold every `exists` call until `parties` of them have returned.
    ///
    /// Forces racing callers to all observe the same pre-race state.
    pub fn pause_after_exists(&self, parties: usize) {
        *self
            .exists_barrier
            .lock()
            .unwrap_or_else(|e| e.into_inner()) = Some(Arc::new(Barrier::new(parties)));
    }

    /// Total sessions opened so far
    pub fn sessions_opened(&self) -> usize {
        self.state().sessions_opened
    }

    /// Sessions opened and not yet closed or dropped
    pub fn sessions_open(&self) -> usize {
        self.state().sessions_open
    }
}

impl Coordinator for FakeCoordinator {
    type Session = FakeSession;

    fn connect(&self) -> Result<FakeSession, CoordError> {
        let mut state = self.state();
        state.calls.push(CoordCall::Connect);

        if state.unreachable {
            return Err(CoordError::Unreachable(self.connect_timeout));
        }
        if let Some(err) = state.failures.get(&CoordStep::Connect) {
            return Err(err.clone());
        }

        state.sessions_opened += 1;
        state.sessions_open += 1;
        let barrier = self
            .exists_barrier
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();

        Ok(FakeSession {
            state: Arc::clone(&self.state),
            exists_barrier: barrier,
            open: true,
        })
    }
}

/// Session handed out by [`FakeCoordinator`]
pub struct FakeSession {
    state: Arc<Mutex<FakeState>>,
    exists_barrier: Option<Arc<Barrier>>,
    open: bool,
}

impl FakeSession {
    /// Record the call and apply any injected failure, then run `op`
    fn call<T>(
        &self,
        step: CoordStep,
        call: CoordCall,
        op: impl FnOnce(&mut HashMap<String, Node>) -> Result<T, CoordError>,
    ) -> Result<T, CoordError> {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.calls.push(call);
        if let Some(err) = state.failures.get(&step) {
            return Err(err.clone());
        }
        op(&mut state.nodes)
    }

    fn release(&mut self) {
        if self.open {
            self.open = false;
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            state.sessions_open = state.sessions_open.saturating_sub(1);
        }
    }
}

impl CoordSession for FakeSession {
    fn exists(&self, path: &NodePath) -> Result<Option<Version>, CoordError> {
        let result = self.call(
            CoordStep::Exists,
            CoordCall::Exists {
                path: path.to_string(),
            },
            |nodes| Ok(nodes.get(path.as_str()).map(|n| n.version)),
        );

        // Outside the lock so other sessions can reach the barrier
        if let Some(barrier) = &self.exists_barrier {
            barrier.wait();
        }
        result
    }

    fn get(&self, path: &NodePath) -> Result<Node, CoordError> {
        self.call(
            CoordStep::Get,
            CoordCall::Get {
                path: path.to_string(),
            },
            |nodes| nodes.get(path.as_str()).cloned().ok_or(CoordError::NoNode),
        )
    }

    fn create(&self, path: &NodePath, data: &[u8]) -> Result<Version, CoordError> {
        self.call(
            CoordStep::Create,
            CoordCall::Create {
                path: path.to_string(),
                data: data.to_vec(),
            },
            |nodes| {
                if nodes.contains_key(path.as_str()) {
                    return Err(CoordError::NodeExists);
                }
                nodes.insert(
                    path.to_string(),
                    Node {
                        data: data.to_vec(),
                        version: Version::INITIAL,
                    },
                );
                Ok(Version::INITIAL)
            },
        )
    }

    fn set(
        &self,
        path: &NodePath,
        data: &[u8],
        expected: Version,
    ) -> Result<Version, CoordError> {
        self.call(
            CoordStep::Set,
            CoordCall::Set {
                path: path.to_string(),
                data: data.to_vec(),
                expected,
            },
            |nodes| {
                let node = nodes.get_mut(path.as_str()).ok_or(CoordError::NoNode)?;
                if node.version != expected {
                    return Err(CoordError::BadVersion);
                }
                node.data = data.to_vec();
                node.version = Version(node.version.0 + 1);
                Ok(node.version)
            },
        )
    }

    fn delete(&self, path: &NodePath, expected: Version) -> Result<(), CoordError> {
        self.call(
            CoordStep::Delete,
            CoordCall::Delete {
                path: path.to_string(),
                expected,
            },
            |nodes| {
                let node = nodes.get(path.as_str()).ok_or(CoordError::NoNode)?;
                if node.version != expected {
                    return Err(CoordError::BadVersion);
                }
                nodes.remove(path.as_str());
                Ok(())
            },
        )
    }

    fn close(mut self) -> Result<(), CoordError> {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .calls
            .push(CoordCall::Close);
        self.release();
        Ok(())
    }
}

impl Drop for FakeSession {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
