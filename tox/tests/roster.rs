//! Friend and group records follow the session.

#![allow(unsafe_code)]

mod common;

use std::ptr;

use common::{FRIEND_KEY, FakeFriend, FakeTox};
use pretty_assertions::assert_eq;
use tox::{Connection, Event, MessageType, Profile, PublicKey, UserStatus};

fn profile() -> (FakeTox, Profile<FakeTox>) {
    let fake = FakeTox::new();
    let profile = Profile::new(fake.session());
    (fake, profile)
}

#[test]
fn existing_friends_and_groups_are_loaded() {
    let fake = FakeTox::new();
    fake.state().friends.insert(
        4,
        FakeFriend {
            public_key: FRIEND_KEY,
            name: b"bob".to_vec(),
            status_message: b"busy".to_vec(),
            typing: false,
        },
    );
    let profile = Profile::new(fake.session());
    let bob = profile.friend(4).unwrap();
    assert_eq!(bob.name, "bob");
    assert_eq!(bob.status_message, "busy");
    assert_eq!(bob.public_key, Some(PublicKey::from_bytes(FRIEND_KEY)));
    assert_eq!(bob.connection, Connection::Udp);
    assert_eq!(profile.groups().count(), 0);
}

#[test]
fn events_update_friend_records() {
    let (fake, mut profile) = profile();
    let friend = profile.add_friend_norequest(FRIEND_KEY).unwrap();

    fake.queue(move |t, ud| unsafe {
        (t.friend_name.unwrap())(ptr::null_mut(), friend, b"carol".as_ptr(), 5, ud);
        (t.friend_status.unwrap())(ptr::null_mut(), friend, UserStatus::Busy.to_ffi(), ud);
        (t.friend_typing.unwrap())(ptr::null_mut(), friend, true, ud);
    });
    let events = profile.iterate();
    assert_eq!(events.len(), 3);

    let carol = profile.friend(friend).unwrap();
    assert_eq!(carol.name, "carol");
    assert_eq!(carol.status, UserStatus::Busy);
    assert!(carol.typing);

    profile.apply(&Event::FriendConnectionStatus {
        friend,
        connection: Connection::None,
    });
    assert!(!profile.friend(friend).unwrap().typing);
}

#[test]
fn messages_mark_unread_until_read() {
    let (fake, mut profile) = profile();
    let friend = profile.add_friend_norequest(FRIEND_KEY).unwrap();
    fake.queue_friend_message(friend, MessageType::Normal, b"hello".to_vec());
    profile.iterate();
    assert!(profile.friend(friend).unwrap().unread);
    profile.mark_read(friend);
    assert!(!profile.friend(friend).unwrap().unread);
}

#[test]
fn display_name_prefers_alias_then_name_then_key() {
    let (_fake, mut profile) = profile();
    let friend = profile.add_friend_norequest(FRIEND_KEY).unwrap();
    assert_eq!(
        profile.friend(friend).unwrap().display_name(),
        PublicKey::from_bytes(FRIEND_KEY).to_hex()
    );

    profile.apply(&Event::FriendName {
        friend,
        name: "dave".to_owned(),
    });
    assert_eq!(profile.friend(friend).unwrap().display_name(), "dave");

    assert!(profile.set_alias(friend, Some("D".to_owned())));
    assert_eq!(profile.friend(friend).unwrap().display_name(), "D");
    assert!(profile.set_alias(friend, None));
    assert_eq!(profile.friend(friend).unwrap().display_name(), "dave");
    assert!(!profile.set_alias(99, Some("nobody".to_owned())));
}

#[test]
fn removed_friend_number_is_reused_cleanly() {
    let (_fake, mut profile) = profile();
    let first = profile.add_friend_norequest([1_u8; 32]).unwrap();
    profile.apply(&Event::FriendName {
        friend: first,
        name: "old".to_owned(),
    });
    assert!(profile.remove_friend(first));
    assert!(profile.friend(first).is_none());

    let second = profile.add_friend_norequest([2_u8; 32]).unwrap();
    assert_eq!(second, first);
    let record = profile.friend(second).unwrap();
    assert_eq!(record.name, "");
    assert_eq!(record.public_key, Some(PublicKey::from_bytes([2; 32])));
}

#[test]
fn failed_delete_keeps_the_record() {
    let (fake, mut profile) = profile();
    let friend = profile.add_friend_norequest(FRIEND_KEY).unwrap();
    fake.force("tox_friend_delete", tox::code::ErrFriendDelete::FriendNotFound);
    assert!(!profile.remove_friend(friend));
    assert!(profile.friend(friend).is_some());
}

#[test]
fn group_records_follow_events() {
    let (fake, mut profile) = profile();
    let group = profile.create_group().unwrap();
    assert_eq!(profile.group(group).unwrap().peers, vec!["me".to_owned()]);
    assert_eq!(profile.group(group).unwrap().display_name(), format!("Group #{group}"));

    fake.state()
        .conferences
        .get_mut(&group)
        .unwrap()
        .peers
        .push(b"erin".to_vec());
    fake.queue(move |t, ud| unsafe {
        (t.conference_title.unwrap())(ptr::null_mut(), group, 1, b"lobby".as_ptr(), 5, ud);
        (t.conference_peer_list_changed.unwrap())(ptr::null_mut(), group, ud);
    });
    profile.iterate();

    let record = profile.group(group).unwrap();
    assert_eq!(record.display_name(), "lobby");
    assert_eq!(record.peers, vec!["me".to_owned(), "erin".to_owned()]);
}

#[test]
fn mentions_are_flagged_and_own_messages_ignored() {
    let (_fake, mut profile) = profile();
    assert!(profile.session_mut().set_name("Alice"));
    let group = profile.create_group().unwrap();

    profile.apply(&Event::ConferenceMessage {
        conference: group,
        peer: 0,
        kind: MessageType::Normal,
        text: "alice here".to_owned(),
    });
    assert!(!profile.group(group).unwrap().unread);

    profile.apply(&Event::ConferenceMessage {
        conference: group,
        peer: 1,
        kind: MessageType::Normal,
        text: "hi all".to_owned(),
    });
    let record = profile.group(group).unwrap();
    assert!(record.unread);
    assert!(!record.mentioned);

    profile.apply(&Event::ConferenceMessage {
        conference: group,
        peer: 1,
        kind: MessageType::Normal,
        text: "ping ALICE".to_owned(),
    });
    assert!(profile.group(group).unwrap().mentioned);

    profile.mark_read_group(group);
    let record = profile.group(group).unwrap();
    assert!(!record.unread);
    assert!(!record.mentioned);
}

#[test]
fn leaving_and_joining_groups() {
    let (_fake, mut profile) = profile();
    let joined = profile.join_group(0, &[1, 2, 3]).unwrap();
    assert!(profile.group(joined).is_some());
    assert!(profile.leave_group(joined));
    assert!(profile.group(joined).is_none());
    assert!(!profile.leave_group(joined));
}
