// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP routing and request handling.

use std::sync::Arc;

use axum::body::Body;
use axum::extract::{Path, Request, State};
use axum::http::{Method, StatusCode};
use axum::middleware;
use axum::response::{IntoResponse, Response};
use axum::routing::any;
use axum::Router;
use tracing::{debug, warn};
use zs_adapters::Coordinator;
use zs_core::StoreError;
use zs_store::StateStore;

use crate::auth::{require_basic_auth, Credentials};
use crate::config::{Config, DEFAULT_MAX_BODY};
use crate::protocol::{lock_response, payload_response, ApiError};

/// Transport settings independent of the store
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Largest accepted request body
    pub max_body: usize,
    /// Require Basic auth when set
    pub credentials: Option<Credentials>,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            max_body: DEFAULT_MAX_BODY,
            credentials: None,
        }
    }
}

impl From<&Config> for RouterOptions {
    fn from(config: &Config) -> Self {
        Self {
            max_body: config.max_body,
            credentials: config.credentials(),
        }
    }
}

#[derive(Clone)]
struct AppState<C> {
    store: StateStore<C>,
    max_body: usize,
}

/// Build the router serving `/:name`
pub fn router<C: Coordinator>(store: StateStore<C>, options: RouterOptions) -> Router {
    let state = AppState {
        store,
        max_body: options.max_body,
    };
    let router = Router::new()
        .route("/:name", any(dispatch::<C>))
        .with_state(state);

    match options.credentials {
        Some(credentials) => router.layer(middleware::from_fn_with_state(
            Arc::new(credentials),
            require_basic_auth,
        )),
        None => router,
    }
}

/// Route one request by method; LOCK and UNLOCK are extension methods
async fn dispatch<C: Coordinator>(
    State(state): State<AppState<C>>,
    Path(name): Path<String>,
    request: Request,
) -> Response {
    let method = request.method().clone();
    debug!(%method, %name, "received request");

    let result = match method.as_str() {
        "GET" => get_state(&state, name.clone()).await,
        "POST" => update_state(&state, name.clone(), request.into_body()).await,
        "DELETE" => delete_state(&state, name.clone()).await,
        "LOCK" => lock_state(&state, name.clone(), request.into_body()).await,
        "UNLOCK" => unlock_state(&state, name.clone()).await,
        _ => return method_not_allowed(&method),
    };

    match result {
        Ok(response) => {
            debug!(%method, %name, status = response.status().as_u16(), "request served");
            response
        }
        Err(err) => {
            warn!(%method, %name, status = err.status().as_u16(), error = %err, "request failed");
            err.into_response()
        }
    }
}

async fn get_state<C: Coordinator>(
    state: &AppState<C>,
    name: String,
) -> Result<Response, ApiError> {
    let store = state.store.clone();
    let payload = run_blocking(move || store.get(&name)).await?;
    Ok(payload_response(payload))
}

async fn update_state<C: Coordinator>(
    state: &AppState<C>,
    name: String,
    body: Body,
) -> Result<Response, ApiError> {
    let payload = read_body(body, state.max_body).await?;
    let store = state.store.clone();
    run_blocking(move || store.update(&name, &payload)).await?;
    Ok(StatusCode::NO_CONTENT.into_response())
}

async fn delete_state<C: Coordinator>(
    state: &AppState<C>,
    name: String,
) -> Result<Response, ApiError> {
    let store = state.store.clone();
    run_blocking(move || store.delete(&name)).await?;
    Ok(StatusCode::OK.into_response())
}

async fn lock_state<C: Coordinator>(
    state: &AppState<C>,
    name: String,
    body: Body,
) -> Result<Response, ApiError> {
    let lockinfo = read_body(body, state.max_body).await?;
    let store = state.store.clone();
    let outcome = run_blocking(move || store.lock(&name, &lockinfo)).await?;
    Ok(lock_response(outcome))
}

async fn unlock_state<C: Coordinator>(
    state: &AppState<C>,
    name: String,
) -> Result<Response, ApiError> {
    let store = state.store.clone();
    run_blocking(move || store.unlock(&name)).await?;
    Ok(StatusCode::OK.into_response())
}

/// Buffer the request body; failing to read it is a `StoreError::Write`
async fn read_body(body: Body, limit: usize) -> Result<Vec<u8>, ApiError> {
    match axum::body::to_bytes(body, limit).await {
        Ok(bytes) => Ok(bytes.to_vec()),
        Err(e) => {
            warn!(error = %e, "cannot read request body");
            Err(StoreError::Write(e.to_string()).into())
        }
    }
}

/// Store calls block on the coordination service; keep them off the runtime
async fn run_blocking<T, F>(f: F) -> Result<T, ApiError>
where
    T: Send + 'static,
    F: FnOnce() -> Result<T, StoreError> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(result) => result.map_err(ApiError::Store),
        Err(e) => Err(ApiError::Internal(e.to_string())),
    }
}

fn method_not_allowed(method: &Method) -> Response {
    debug!(%method, "method not allowed");
    (
        StatusCode::METHOD_NOT_ALLOWED,
        format!("zs: method {} not allowed", method),
    )
        .into_response()
}

#[cfg(test)]
#[path = "server_tests.rs"]
mod tests;
