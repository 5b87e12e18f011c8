// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zs-core: domain types for the zs state/lock backend
//!
//! This crate provides:
//! - Resource names and the node path scheme
//! - Node versions and payloads as seen by the coordination service
//! - The store error taxonomy and its classification table
//! - Coordination service configuration

pub mod config;
pub mod error;
pub mod name;
pub mod node;

pub use config::{ConfigError, CoordConfig, DEFAULT_CONNECT_TIMEOUT};
pub use error::{CoordError, CoordStep, StoreError};
pub use name::{NodePath, ResourceName, LOCK_PREFIX};
pub use node::{LockOutcome, Node, Version};
