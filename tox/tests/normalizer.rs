//! Failed boundary calls come back as `false` / `None` with one diagnostic.

mod common;

use common::{FRIEND_KEY, FakeTox};
use pretty_assertions::assert_eq;
use tox::code::{
    ErrConferencePeerQuery, ErrConferenceTitle, ErrFriendAdd, ErrFriendQuery,
    ErrFriendSendMessage, ErrGetPort, ErrSetInfo,
};
use tox::{ErrorCode, MessageType};

#[test]
fn forced_failure_returns_false_and_logs_once() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    fake.force("tox_self_set_name", ErrSetInfo::TooLong);

    let before = fake.calls();
    let (ok, logs) = common::capture(|| session.set_name("alice"));
    assert!(!ok);
    assert_eq!(fake.calls(), before + 1);

    let failures: Vec<_> = logs.iter().filter(|e| e.target == "tox::call").collect();
    assert_eq!(failures.len(), 1);
    assert_eq!(failures[0].level, tracing::Level::WARN);
    assert_eq!(failures[0].field("op"), Some("tox_self_set_name"));
    assert_eq!(failures[0].field("code"), Some("TooLong"));
    assert_eq!(
        failures[0].field("raw"),
        Some(ErrSetInfo::TooLong.raw().to_string().as_str())
    );
}

#[test]
fn forced_failure_yields_absent_value() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    fake.force("tox_friend_add_norequest", ErrFriendAdd::Malloc);

    let (number, logs) = common::capture(|| session.friend_add_norequest(FRIEND_KEY));
    assert_eq!(number, None);
    assert!(logs.iter().any(|e| e.target == "tox::call"
        && e.field("op") == Some("tox_friend_add_norequest")
        && e.field("code") == Some("Malloc")));
}

#[test]
fn success_logs_nothing() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    let (ok, logs) = common::capture(|| session.set_name("alice"));
    assert!(ok);
    assert!(logs.iter().all(|e| e.target != "tox::call"));
    assert_eq!(session.name().as_deref(), Some("alice"));
}

#[test]
fn send_failure_has_no_message_id() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    let friend = session.friend_add_norequest(FRIEND_KEY).unwrap();
    fake.force("tox_friend_send_message", ErrFriendSendMessage::FriendNotConnected);
    assert_eq!(session.friend_send_message(friend, MessageType::Normal, "hi"), None);
    assert!(fake.state().sent.is_empty());
}

#[test]
fn library_reported_failure_is_normalized() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    // No friend 7: the fake reports FRIEND_NOT_FOUND itself.
    assert!(!session.friend_delete(7));
    assert_eq!(session.friend_public_key(7), None);
    assert_eq!(session.friend_name(7), None);
    assert_eq!(session.friend_status(7), None);
    assert!(!session.set_typing(7, true));
}

#[test]
fn failed_size_query_skips_the_fill() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    let friend = session.friend_add_norequest(FRIEND_KEY).unwrap();
    fake.force("tox_friend_get_name_size", ErrFriendQuery::Null);

    let before = fake.calls();
    assert_eq!(session.friend_name(friend), None);
    assert_eq!(fake.calls(), before + 1);
}

#[test]
fn failed_fill_is_absent() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    let conference = session.conference_new().unwrap();
    assert!(session.conference_set_title(conference, "room"));
    fake.force("tox_conference_get_title", ErrConferenceTitle::InvalidLength);
    assert_eq!(session.conference_title(conference), None);
}

#[test]
fn one_failed_peer_row_fails_the_list() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    let conference = session.conference_new().unwrap();
    fake.state()
        .conferences
        .get_mut(&conference)
        .unwrap()
        .peers
        .push(b"bob".to_vec());
    assert_eq!(
        session.conference_peer_names(conference),
        Some(vec!["me".to_owned(), "bob".to_owned()])
    );

    fake.force("tox_conference_peer_get_name", ErrConferencePeerQuery::PeerNotFound);
    assert_eq!(session.conference_peer_names(conference), None);
}

#[test]
fn ports_follow_their_codes() {
    let fake = FakeTox::new();
    let session = fake.session();
    assert_eq!(session.udp_port(), Some(33445));
    assert_eq!(session.tcp_port(), Some(3389));
    fake.force("tox_self_get_tcp_port", ErrGetPort::NotBound);
    assert_eq!(session.tcp_port(), None);
}

#[test]
fn zero_sized_values_are_present_and_empty() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    assert_eq!(session.name().as_deref(), Some(""));
    assert_eq!(session.status_message().as_deref(), Some(""));
    assert_eq!(session.friend_list(), Some(Vec::new()));
    assert_eq!(session.conference_list(), Some(Vec::new()));
    assert_eq!(session.save_data(), Some(Vec::new()));

    let friend = session.friend_add_norequest(FRIEND_KEY).unwrap();
    assert_eq!(session.friend_name(friend).as_deref(), Some(""));
    assert_eq!(session.friend_status_message(friend).as_deref(), Some(""));
}

#[test]
fn lists_come_back_in_library_order() {
    let fake = FakeTox::new();
    let mut session = fake.session();
    let a = session.friend_add_norequest([1_u8; 32]).unwrap();
    let b = session.friend_add_norequest([2_u8; 32]).unwrap();
    assert_eq!(session.friend_list(), Some(vec![a, b]));
    assert_eq!(session.friend_by_public_key([2_u8; 32]), Some(b));

    // Numbers are reused after a delete.
    assert!(session.friend_delete(a));
    assert_eq!(session.friend_add_norequest([3_u8; 32]), Some(a));
}

#[test]
fn save_data_round_trips_through_construction() {
    let fake = FakeTox::new();
    fake.state().savedata = vec![1, 2, 3, 4];
    let session = fake.session();
    let saved = session.save_data().unwrap();
    assert_eq!(saved, vec![1, 2, 3, 4]);

    let other = FakeTox::new();
    let _restored = tox::Session::new(
        other.clone(),
        &tox::Options::default(),
        Some(saved.as_slice()),
    );
    assert_eq!(other.state().loaded, Some(saved));
}
