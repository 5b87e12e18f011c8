//! Transport error specs
//!
//! Failures of the ensemble and malformed requests.

use crate::prelude::*;
use axum::http::StatusCode;
use zs_core::{CoordError, CoordStep};

#[tokio::test]
async fn unreachable_ensemble_fails_every_operation() {
    let zs = Backend::new();
    zs.zk.set_unreachable(true);

    for method in ["GET", "POST", "DELETE", "LOCK", "UNLOCK"] {
        zs.call(method, "prod")
            .send()
            .await
            .status_is(StatusCode::INTERNAL_SERVER_ERROR)
            .body_is(b"zs: cannot connect to zk");
    }
}

#[tokio::test]
async fn ensemble_recovers_without_restart() {
    let zs = Backend::new();
    zs.zk.set_unreachable(true);
    zs.post("prod", b"P1")
        .await
        .status_is(StatusCode::INTERNAL_SERVER_ERROR);

    zs.zk.set_unreachable(false);

    zs.post("prod", b"P1").await.status_is(StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn stale_write_is_an_update_error() {
    let zs = Backend::new();
    zs.post("prod", b"P1").await;
    zs.zk.fail_step(CoordStep::Set, CoordError::BadVersion);

    zs.post("prod", b"P2")
        .await
        .status_is(StatusCode::INTERNAL_SERVER_ERROR)
        .body_is(b"zs: cannot update znode");

    zs.zk.clear_failures();
    zs.get("prod").await.body_is(b"P1");
}

#[tokio::test]
async fn read_failure_is_a_read_error() {
    let zs = Backend::new();
    zs.zk
        .fail_step(CoordStep::Get, CoordError::Service("ConnectionLoss".into()));

    zs.get("prod")
        .await
        .status_is(StatusCode::INTERNAL_SERVER_ERROR)
        .body_is(b"zs: cannot read znode");
}

#[tokio::test]
async fn invalid_names_are_bad_requests() {
    let zs = Backend::new();

    zs.get("lock-prod")
        .await
        .status_is(StatusCode::BAD_REQUEST)
        .body_has("reserved lock prefix");
    zs.post("..", b"x")
        .await
        .status_is(StatusCode::BAD_REQUEST)
        .body_has("relative path component");
    zs.post("zookeeper", b"x")
        .await
        .status_is(StatusCode::BAD_REQUEST)
        .body_has("reserved system node");
    zs.lock("a%2Fb", b"x")
        .await
        .status_is(StatusCode::BAD_REQUEST)
        .body_has("contains path separator");

    assert!(zs.zk.calls().is_empty());
}

#[tokio::test]
async fn unsupported_method_is_rejected() {
    let zs = Backend::new();

    zs.call("PUT", "prod")
        .body(b"x")
        .send()
        .await
        .status_is(StatusCode::METHOD_NOT_ALLOWED);
    zs.call("PATCH", "prod")
        .send()
        .await
        .status_is(StatusCode::METHOD_NOT_ALLOWED);
}
