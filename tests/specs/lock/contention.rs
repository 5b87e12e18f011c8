//! Lock specs
//!
//! LOCK and UNLOCK on `/name`, including racing acquirers.

use crate::prelude::*;
use axum::http::StatusCode;

#[tokio::test]
async fn first_lock_acquires_and_echoes_lockinfo() {
    let zs = Backend::new();

    zs.lock("prod", b"infoA")
        .await
        .status_is(StatusCode::OK)
        .body_is(b"infoA");

    assert_eq!(zs.znode("/lock-prod"), Some(b"infoA".to_vec()));
}

#[tokio::test]
async fn second_lock_sees_holder() {
    let zs = Backend::new();
    zs.lock("prod", b"infoA").await;

    zs.lock("prod", b"infoB")
        .await
        .status_is(StatusCode::LOCKED)
        .body_is(b"infoA");

    assert_eq!(zs.znode("/lock-prod"), Some(b"infoA".to_vec()));
}

#[tokio::test]
async fn unlock_frees_the_name() {
    let zs = Backend::new();
    zs.lock("prod", b"infoA").await;

    zs.unlock("prod").await.status_is(StatusCode::OK);

    zs.lock("prod", b"infoC")
        .await
        .status_is(StatusCode::OK)
        .body_is(b"infoC");
}

#[tokio::test]
async fn unlock_without_lock_is_not_found() {
    let zs = Backend::new();

    zs.unlock("prod").await.status_is(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn lock_and_state_do_not_interact() {
    let zs = Backend::new();
    zs.lock("prod", b"infoA").await;

    // Advisory only: writes still go through while locked
    zs.post("prod", b"P1").await.status_is(StatusCode::NO_CONTENT);
    zs.unlock("prod").await.status_is(StatusCode::OK);

    zs.get("prod").await.status_is(StatusCode::OK).body_is(b"P1");
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_lockers_have_exactly_one_winner() {
    const RACERS: usize = 5;
    let zs = Backend::new();
    // Every racer observes the name as free before anyone creates
    zs.zk.pause_after_exists(RACERS);

    let handles: Vec<_> = (0..RACERS)
        .map(|i| {
            let call = zs.call("LOCK", "prod").body(format!("info{i}").as_bytes());
            tokio::spawn(call.send())
        })
        .collect();
    let mut replies = Vec::new();
    for handle in handles {
        replies.push(handle.await.unwrap());
    }

    let winners: Vec<_> = replies
        .iter()
        .filter(|r| r.status == StatusCode::OK)
        .collect();
    assert_eq!(winners.len(), 1, "{replies:?}");
    assert_eq!(zs.znode("/lock-prod"), Some(winners[0].body.clone()));

    for loser in replies.iter().filter(|r| r.status != StatusCode::OK) {
        assert_eq!(loser.status, StatusCode::INTERNAL_SERVER_ERROR);
        similar_asserts::assert_eq!(
            String::from_utf8_lossy(&loser.body),
            "zs: cannot create znode"
        );
    }
}
