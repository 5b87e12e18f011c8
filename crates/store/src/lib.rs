// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! zs-store: state documents and advisory locks on a coordination service
//!
//! Every operation opens its own session, runs one or more adapter calls and
//! closes the session. Nothing is cached or shared between calls; concurrent
//! writers are fenced by the service (atomic create, versioned set/delete).

mod lock;
mod state;
mod store;

pub use store::StateStore;
pub use zs_core::{LockOutcome, StoreError};
