//! Cancellation and supersession: a newer load always wins, and a
//! dropped session closes its watchers.

mod common;

use std::time::Duration;

use common::mock_service::{MockProfileService, Scripted};
use common::{solid_png, wait_for};
use usercard::{Icon, ProfileSession, SessionClosed, UserId};

#[tokio::test]
async fn fresh_session_starts_empty() {
    let service = MockProfileService::start().await;
    let session = ProfileSession::new(service.config());

    let state = session.watcher().current();
    assert!(state.user().is_none());
    assert!(state.icon().is_none());
}

#[tokio::test]
async fn cancel_stops_the_icon_from_landing() {
    let service = MockProfileService::start().await;
    service
        .add_user(1, "Koher", solid_png(2, 2, [1, 2, 3, 255]))
        .await;
    service
        .script_icon(
            "1.png",
            Scripted::bytes("image/png", solid_png(2, 2, [1, 2, 3, 255])).with_delay(500),
        )
        .await;

    let mut session = ProfileSession::new(service.config());
    let mut watcher = session.watcher();
    session.load(UserId::new(1));

    wait_for(&mut watcher, |state| state.user().is_some()).await;
    session.cancel();

    // Nothing more arrives, even after the scripted delay elapses.
    let outcome = tokio::time::timeout(Duration::from_millis(700), watcher.changed()).await;
    assert!(outcome.is_err());

    let state = watcher.current();
    assert_eq!(state.user().unwrap().name, "Koher");
    assert!(state.icon().is_none());
}

#[tokio::test]
async fn newer_load_wins_over_a_slow_icon() {
    let first_png = solid_png(2, 2, [200, 0, 0, 255]);
    let second_png = solid_png(2, 2, [0, 200, 0, 255]);

    let service = MockProfileService::start().await;
    service.add_user(1, "First", first_png.clone()).await;
    service
        .script_icon(
            "1.png",
            Scripted::bytes("image/png", first_png).with_delay(300),
        )
        .await;
    service.add_user(2, "Second", second_png.clone()).await;

    let mut session = ProfileSession::new(service.config());
    let mut watcher = session.watcher();

    session.load(UserId::new(1));
    wait_for(&mut watcher, |state| {
        state.user().map(|user| user.name.as_str()) == Some("First")
    })
    .await;

    session.load(UserId::new(2));
    let snapshot = wait_for(&mut watcher, |state| state.icon().is_some()).await;
    assert_eq!(snapshot.user().unwrap().name, "Second");

    // Let the first cycle's scripted delay run out, then confirm its
    // icon never displaced the second user's.
    tokio::time::sleep(Duration::from_millis(400)).await;

    let state = watcher.current();
    let user = state.user().unwrap();
    assert_eq!(user.id, UserId::new(2));
    assert_eq!(user.name, "Second");
    assert_eq!(state.icon(), Some(&Icon::decode(&second_png).unwrap()));
}

#[tokio::test]
async fn watcher_reports_closure_after_drop() {
    let service = MockProfileService::start().await;
    service
        .add_user(1, "Koher", solid_png(2, 2, [7, 7, 7, 255]))
        .await;

    let mut session = ProfileSession::new(service.config());
    let mut watcher = session.watcher();
    session.load(UserId::new(1));

    // Let the load finish so no task still holds the state cell.
    wait_for(&mut watcher, |state| state.icon().is_some()).await;
    drop(session);

    assert_eq!(watcher.changed().await, Err(SessionClosed));
}
