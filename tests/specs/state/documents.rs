//! State document specs
//!
//! Get, Update, and Delete on `/name`.

use crate::prelude::*;
use axum::http::StatusCode;

#[tokio::test]
async fn get_after_post_returns_exact_bytes() {
    let zs = Backend::new();
    let doc = b"{\"version\":4,\"serial\":7,\"lineage\":\"x\"}\n";

    zs.post("prod", doc).await.status_is(StatusCode::NO_CONTENT);

    let reply = zs.get("prod").await.status_is(StatusCode::OK).body_is(doc);
    assert_eq!(reply.content_type.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn payload_is_opaque() {
    let zs = Backend::new();
    let doc = [0u8, 159, 146, 150, 255];

    zs.post("bin", &doc).await.status_is(StatusCode::NO_CONTENT);

    zs.get("bin").await.status_is(StatusCode::OK).body_is(&doc);
}

#[tokio::test]
async fn empty_payload_is_stored() {
    let zs = Backend::new();

    zs.post("prod", b"").await.status_is(StatusCode::NO_CONTENT);

    zs.get("prod").await.status_is(StatusCode::OK).body_is(b"");
}

#[tokio::test]
async fn last_post_wins() {
    let zs = Backend::new();

    zs.post("prod", b"P1").await.status_is(StatusCode::NO_CONTENT);
    zs.post("prod", b"P2").await.status_is(StatusCode::NO_CONTENT);

    zs.get("prod").await.body_is(b"P2");
    assert_eq!(zs.zk.node("/prod").unwrap().version, Version(1));
}

#[tokio::test]
async fn get_unknown_name_is_not_found() {
    let zs = Backend::new();

    zs.get("never")
        .await
        .status_is(StatusCode::NOT_FOUND)
        .body_is(b"zs: cannot find znode");
}

#[tokio::test]
async fn delete_removes_state() {
    let zs = Backend::new();
    zs.post("prod", b"P1").await;

    zs.delete("prod").await.status_is(StatusCode::OK);

    zs.get("prod").await.status_is(StatusCode::NOT_FOUND);
    assert!(zs.znode("/prod").is_none());
}

#[tokio::test]
async fn delete_unknown_name_is_not_found() {
    let zs = Backend::new();

    zs.delete("never").await.status_is(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_leaves_lock_alone() {
    let zs = Backend::new();
    zs.post("prod", b"P1").await;
    zs.lock("prod", b"infoA").await.status_is(StatusCode::OK);

    zs.delete("prod").await.status_is(StatusCode::OK);

    assert_eq!(zs.znode("/lock-prod"), Some(b"infoA".to_vec()));
}

#[tokio::test]
async fn names_are_independent() {
    let zs = Backend::new();

    zs.post("a", b"A").await;
    zs.post("b", b"B").await;
    zs.delete("a").await;

    zs.get("a").await.status_is(StatusCode::NOT_FOUND);
    zs.get("b").await.status_is(StatusCode::OK).body_is(b"B");
}
