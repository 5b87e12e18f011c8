// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! ZooKeeper coordination adapter

use super::{CoordSession, Coordinator};
use std::sync::mpsc;
use std::time::{Duration, Instant};
use zookeeper::{Acl, CreateMode, WatchedEvent, Watcher, ZkError, ZkState, ZooKeeper};
use zs_core::{CoordConfig, CoordError, Node, NodePath, Version};

/// Opens one ZooKeeper session per call to [`Coordinator::connect`]
#[derive(Clone, Debug)]
pub struct ZkCoordinator {
    config: CoordConfig,
}

impl ZkCoordinator {
    pub fn new(config: CoordConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CoordConfig {
        &self.config
    }
}

/// Node watches are never set, so their events are dropped
struct IgnoreWatches;

impl Watcher for IgnoreWatches {
    fn handle(&self, _event: WatchedEvent) {}
}

impl Coordinator for ZkCoordinator {
    type Session = ZkSession;

    fn connect(&self) -> Result<ZkSession, CoordError> {
        let timeout = self.config.connect_timeout();

        // The client handshakes on its own io thread and reports session
        // state only to listeners; wait for the first Connected.
        let zk = ZooKeeper::connect(&self.config.connect_string(), timeout, IgnoreWatches)
            .map_err(from_zk)?;
        let (tx, rx) = mpsc::channel();
        let subscription = zk.add_listener(move |state: ZkState| {
            // Receiver is gone once connect() returns
            let _ = tx.send(state);
        });

        let outcome = wait_connected(&rx, timeout);
        zk.remove_listener(subscription);
        outcome.map(|()| ZkSession { zk })
    }
}

fn wait_connected(rx: &mpsc::Receiver<ZkState>, timeout: Duration) -> Result<(), CoordError> {
    let deadline = Instant::now() + timeout;
    loop {
        let remaining = deadline.saturating_duration_since(Instant::now());
        match rx.recv_timeout(remaining) {
            Ok(ZkState::Connected) | Ok(ZkState::ConnectedReadOnly) => return Ok(()),
            Ok(ZkState::AuthFailed) => {
                return Err(CoordError::Service("authentication failed".to_string()))
            }
            Ok(ZkState::Closed) => return Err(CoordError::Service("session closed".to_string())),
            Ok(_) => continue,
            Err(_) => return Err(CoordError::Unreachable(timeout)),
        }
    }
}

/// A connected ZooKeeper session
pub struct ZkSession {
    zk: ZooKeeper,
}

impl CoordSession for ZkSession {
    fn exists(&self, path: &NodePath) -> Result<Option<Version>, CoordError> {
        let stat = self.zk.exists(path.as_str(), false).map_err(from_zk)?;
        Ok(stat.map(|s| Version(s.version)))
    }

    fn get(&self, path: &NodePath) -> Result<Node, CoordError> {
        let (data, stat) = self.zk.get_data(path.as_str(), false).map_err(from_zk)?;
        Ok(Node {
            data,
            version: Version(stat.version),
        })
    }

    fn create(&self, path: &NodePath, data: &[u8]) -> Result<Version, CoordError> {
        self.zk
            .create(
                path.as_str(),
                data.to_vec(),
                Acl::open_unsafe().clone(),
                CreateMode::Persistent,
            )
            .map_err(from_zk)?;
        Ok(Version::INITIAL)
    }

    fn set(
        &self,
        path: &NodePath,
        data: &[u8],
        expected: Version,
    ) -> Result<Version, CoordError> {
        let stat = self
            .zk
            .set_data(path.as_str(), data.to_vec(), Some(expected.0))
            .map_err(from_zk)?;
        Ok(Version(stat.version))
    }

    fn delete(&self, path: &NodePath, expected: Version) -> Result<(), CoordError> {
        self.zk
            .delete(path.as_str(), Some(expected.0))
            .map_err(from_zk)
    }

    fn close(self) -> Result<(), CoordError> {
        self.zk.close().map_err(from_zk)
    }
}

/// Keep the causes the store distinguishes; everything else is opaque
fn from_zk(err: ZkError) -> CoordError {
    match err {
        ZkError::NoNode => CoordError::NoNode,
        ZkError::NodeExists => CoordError::NodeExists,
        ZkError::BadVersion => CoordError::BadVersion,
        other => CoordError::Service(format!("{:?}", other)),
    }
}

#[cfg(test)]
#[path = "zk_tests.rs"]
mod tests;
