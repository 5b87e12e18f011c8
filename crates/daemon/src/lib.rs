// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zs daemon: HTTP transport for the state/lock store
//!
//! Speaks the Terraform `http` backend protocol on `/:name`: GET, POST and
//! DELETE for state, LOCK and UNLOCK for the advisory lock.

pub mod auth;
pub mod config;
pub mod lifecycle;
pub mod protocol;
pub mod server;

pub use auth::Credentials;
pub use config::{Config, LogFormat};
pub use lifecycle::{startup, Daemon, DaemonStore, LifecycleError};
pub use server::{router, RouterOptions};
