//! Basic auth specs

use crate::prelude::*;
use axum::http::{header, StatusCode};

// base64("ci:s3cret")
const CI_AUTH: &str = "Basic Y2k6czNjcmV0";

#[tokio::test]
async fn open_backend_needs_no_credentials() {
    let zs = Backend::new();

    zs.post("prod", b"P1").await.status_is(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn missing_credentials_are_unauthorized() {
    let zs = Backend::with_auth("ci", "s3cret");

    zs.get("prod").await.status_is(StatusCode::UNAUTHORIZED);
    zs.lock("prod", b"infoA")
        .await
        .status_is(StatusCode::UNAUTHORIZED);

    assert!(zs.zk.calls().is_empty());
}

#[tokio::test]
async fn wrong_credentials_are_unauthorized() {
    let zs = Backend::with_auth("ci", "s3cret");

    zs.call("GET", "prod")
        .header(header::AUTHORIZATION, "Basic Y2k6d3Jvbmc=")
        .send()
        .await
        .status_is(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn matching_credentials_reach_the_store() {
    let zs = Backend::with_auth("ci", "s3cret");

    zs.call("POST", "prod")
        .header(header::AUTHORIZATION, CI_AUTH)
        .body(b"P1")
        .send()
        .await
        .status_is(StatusCode::NO_CONTENT);
    zs.call("GET", "prod")
        .header(header::AUTHORIZATION, CI_AUTH)
        .send()
        .await
        .status_is(StatusCode::OK)
        .body_is(b"P1");
}
