// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Mapping between store outcomes and HTTP responses
//!
//! | Outcome | Status |
//! |---|---|
//! | state read | 200 with payload |
//! | state written | 204 |
//! | state deleted, unlocked | 200 |
//! | lock acquired | 200 with lockinfo |
//! | already locked | 423 with holder's lockinfo |
//! | `NotExist` | 404 |
//! | `InvalidName` | 400 |
//! | any other error | 500 with the error text |

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use zs_core::{LockOutcome, StoreError};

/// Content type of state documents and lockinfo
pub const PAYLOAD_CONTENT_TYPE: &str = "application/json";

/// Errors returned from request handlers
#[derive(Debug)]
pub enum ApiError {
    /// The store classified the failure
    Store(StoreError),
    /// The blocking task running the store call died
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Store(err) => store_error_status(err),
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Store(err) => write!(f, "{}", err),
            ApiError::Internal(msg) => write!(f, "zs: internal error: {}", msg),
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Status code for a store error
pub fn store_error_status(err: &StoreError) -> StatusCode {
    match err {
        StoreError::NotExist => StatusCode::NOT_FOUND,
        StoreError::InvalidName { .. } => StatusCode::BAD_REQUEST,
        StoreError::Conn(_)
        | StoreError::Read(_)
        | StoreError::Create(_)
        | StoreError::Update(_)
        | StoreError::Delete(_)
        | StoreError::Write(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Response carrying a state document
pub fn payload_response(payload: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, PAYLOAD_CONTENT_TYPE)],
        payload,
    )
        .into_response()
}

/// 200 for a fresh lock, 423 Locked when someone already holds it
pub fn lock_response(outcome: LockOutcome) -> Response {
    let status = if outcome.already_locked {
        StatusCode::LOCKED
    } else {
        StatusCode::OK
    };
    (
        status,
        [(header::CONTENT_TYPE, PAYLOAD_CONTENT_TYPE)],
        outcome.lockinfo,
    )
        .into_response()
}

#[cfg(test)]
#[path = "protocol_tests.rs"]
mod tests;
