//! Friend and group records kept current from session events.
//!
//! Records are keyed by the numbers the library hands out. Those numbers are
//! reused after a delete, so records are removed together with the
//! library-side entry.

use std::collections::BTreeMap;
use std::sync::mpsc;

use crate::boundary::Boundary;
use crate::bridge::Event;
use crate::session::Session;
use crate::types::{ConferenceType, Connection, PublicKey, UserStatus};

/// What we know about one friend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Friend {
    /// Library friend number.
    pub number: u32,
    /// Long-term public key.
    pub public_key: Option<PublicKey>,
    /// Name the friend chose.
    pub name: String,
    /// Local nickname overriding `name` for display.
    pub alias: Option<String>,
    /// Status message.
    pub status_message: String,
    /// Presence.
    pub status: UserStatus,
    /// Reachability.
    pub connection: Connection,
    /// Whether they are typing.
    pub typing: bool,
    /// Unread messages since the last [`Profile::mark_read`].
    pub unread: bool,
}

impl Friend {
    fn new(number: u32) -> Self {
        Self {
            number,
            public_key: None,
            name: String::new(),
            alias: None,
            status_message: String::new(),
            status: UserStatus::Online,
            connection: Connection::None,
            typing: false,
            unread: false,
        }
    }

    /// Alias, then name, then public key, then number.
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(alias) = self.alias.as_ref().filter(|a| !a.is_empty()) {
            return alias.clone();
        }
        if !self.name.is_empty() {
            return self.name.clone();
        }
        self.public_key
            .map_or_else(|| format!("Friend #{}", self.number), |key| key.to_hex())
    }
}

/// What we know about one conference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Library conference number.
    pub number: u32,
    /// Title.
    pub title: String,
    /// Conference type.
    pub kind: ConferenceType,
    /// Peer names indexed by peer number.
    pub peers: Vec<String>,
    /// Unread messages since the last [`Profile::mark_read_group`].
    pub unread: bool,
    /// An unread message mentioned our name.
    pub mentioned: bool,
}

impl Group {
    fn new(number: u32, kind: ConferenceType) -> Self {
        Self {
            number,
            title: String::new(),
            kind,
            peers: Vec::new(),
            unread: false,
            mentioned: false,
        }
    }

    /// Title, or the number when untitled.
    #[must_use]
    pub fn display_name(&self) -> String {
        if self.title.is_empty() {
            format!("Group #{}", self.number)
        } else {
            self.title.clone()
        }
    }
}

/// A session together with its friend and group records.
#[derive(Debug)]
pub struct Profile<B: Boundary> {
    session: Session<B>,
    events: mpsc::Receiver<Event>,
    friends: BTreeMap<u32, Friend>,
    groups: BTreeMap<u32, Group>,
}

impl<B: Boundary> Profile<B> {
    /// Wrap `session` and load the friends and conferences it already has.
    pub fn new(mut session: Session<B>) -> Self {
        let events = session.events().subscribe_all();
        let mut profile = Self {
            session,
            events,
            friends: BTreeMap::new(),
            groups: BTreeMap::new(),
        };
        for number in profile.session.friend_list().unwrap_or_default() {
            profile.load_friend(number);
        }
        for number in profile.session.conference_list().unwrap_or_default() {
            profile.load_group(number);
        }
        profile
    }

    /// The underlying session.
    #[must_use]
    pub const fn session(&self) -> &Session<B> {
        &self.session
    }

    /// The underlying session, mutably. Record-changing calls should go
    /// through the profile so records stay in step.
    pub fn session_mut(&mut self) -> &mut Session<B> {
        &mut self.session
    }

    /// Run one processing step and apply the events it produced.
    ///
    /// Returns the events in the order they were raised.
    pub fn iterate(&mut self) -> Vec<Event> {
        self.session.iterate();
        let events: Vec<Event> = self.events.try_iter().collect();
        for event in &events {
            self.apply(event);
        }
        events
    }

    /// Update records from one event.
    pub fn apply(&mut self, event: &Event) {
        match event {
            Event::FriendName { friend, name } => {
                if let Some(f) = self.friends.get_mut(friend) {
                    f.name.clone_from(name);
                }
            }
            Event::FriendStatusMessage { friend, message } => {
                if let Some(f) = self.friends.get_mut(friend) {
                    f.status_message.clone_from(message);
                }
            }
            Event::FriendStatus { friend, status } => {
                if let Some(f) = self.friends.get_mut(friend) {
                    f.status = *status;
                }
            }
            Event::FriendConnectionStatus { friend, connection } => {
                if let Some(f) = self.friends.get_mut(friend) {
                    f.connection = *connection;
                    if !connection.is_online() {
                        f.typing = false;
                    }
                }
            }
            Event::FriendTyping { friend, typing } => {
                if let Some(f) = self.friends.get_mut(friend) {
                    f.typing = *typing;
                }
            }
            Event::FriendMessage { friend, .. } => {
                if let Some(f) = self.friends.get_mut(friend) {
                    f.unread = true;
                    f.typing = false;
                }
            }
            Event::ConferenceConnected { conference } => self.load_group(*conference),
            Event::ConferenceTitle { conference, title, .. } => {
                if let Some(g) = self.groups.get_mut(conference) {
                    g.title.clone_from(title);
                }
            }
            Event::ConferencePeerName { conference, .. }
            | Event::ConferencePeerListChanged { conference } => self.refresh_peers(*conference),
            Event::ConferenceMessage {
                conference,
                peer,
                text,
                ..
            } => self.note_group_message(*conference, *peer, text),
            _ => {}
        }
    }

    /// Send a friend request and record the new friend.
    pub fn add_friend(&mut self, address: impl AsRef<[u8]>, message: &str) -> Option<u32> {
        let number = self.session.friend_add(address, message)?;
        self.load_friend(number);
        Some(number)
    }

    /// Accept a request (or add a known key) and record the new friend.
    pub fn add_friend_norequest(&mut self, public_key: impl AsRef<[u8]>) -> Option<u32> {
        let number = self.session.friend_add_norequest(public_key)?;
        self.load_friend(number);
        Some(number)
    }

    /// Delete a friend and drop its record.
    pub fn remove_friend(&mut self, friend: u32) -> bool {
        let removed = self.session.friend_delete(friend);
        if removed {
            self.friends.remove(&friend);
        }
        removed
    }

    /// Create a conference and record it.
    pub fn create_group(&mut self) -> Option<u32> {
        let number = self.session.conference_new()?;
        self.load_group(number);
        Some(number)
    }

    /// Join a conference from an invite cookie and record it.
    pub fn join_group(&mut self, friend: u32, cookie: &[u8]) -> Option<u32> {
        let number = self.session.conference_join(friend, cookie)?;
        self.load_group(number);
        Some(number)
    }

    /// Leave a conference and drop its record.
    pub fn leave_group(&mut self, conference: u32) -> bool {
        let left = self.session.conference_delete(conference);
        if left {
            self.groups.remove(&conference);
        }
        left
    }

    /// Set or clear a friend's local alias.
    pub fn set_alias(&mut self, friend: u32, alias: Option<String>) -> bool {
        self.friends
            .get_mut(&friend)
            .map(|f| f.alias = alias)
            .is_some()
    }

    /// Clear a friend's unread flag.
    pub fn mark_read(&mut self, friend: u32) {
        if let Some(f) = self.friends.get_mut(&friend) {
            f.unread = false;
        }
    }

    /// Clear a group's unread and mention flags.
    pub fn mark_read_group(&mut self, conference: u32) {
        if let Some(g) = self.groups.get_mut(&conference) {
            g.unread = false;
            g.mentioned = false;
        }
    }

    /// One friend record.
    #[must_use]
    pub fn friend(&self, friend: u32) -> Option<&Friend> {
        self.friends.get(&friend)
    }

    /// All friend records, by number.
    pub fn friends(&self) -> impl Iterator<Item = &Friend> {
        self.friends.values()
    }

    /// One group record.
    #[must_use]
    pub fn group(&self, conference: u32) -> Option<&Group> {
        self.groups.get(&conference)
    }

    /// All group records, by number.
    pub fn groups(&self) -> impl Iterator<Item = &Group> {
        self.groups.values()
    }

    fn load_friend(&mut self, number: u32) {
        let s = &self.session;
        let mut friend = Friend::new(number);
        friend.public_key = s.friend_public_key(number);
        friend.name = s.friend_name(number).unwrap_or_default();
        friend.status_message = s.friend_status_message(number).unwrap_or_default();
        friend.status = s.friend_status(number).unwrap_or(UserStatus::Online);
        friend.connection = s.friend_connection_status(number).unwrap_or(Connection::None);
        self.friends.insert(number, friend);
    }

    fn load_group(&mut self, number: u32) {
        let s = &self.session;
        let kind = s.conference_type(number).unwrap_or(ConferenceType::Text);
        let group = self
            .groups
            .entry(number)
            .or_insert_with(|| Group::new(number, kind));
        group.title = s.conference_title(number).unwrap_or_default();
        group.peers = s.conference_peer_names(number).unwrap_or_default();
    }

    fn refresh_peers(&mut self, conference: u32) {
        if let Some(peers) = self.session.conference_peer_names(conference) {
            if let Some(g) = self.groups.get_mut(&conference) {
                g.peers = peers;
            }
        }
    }

    fn note_group_message(&mut self, conference: u32, peer: u32, text: &str) {
        if self.session.conference_peer_is_ours(conference, peer) == Some(true) {
            return;
        }
        let own_name = self.session.name().unwrap_or_default().to_lowercase();
        let Some(g) = self.groups.get_mut(&conference) else {
            return;
        };
        g.unread = true;
        if !own_name.is_empty() && text.to_lowercase().contains(&own_name) {
            g.mentioned = true;
        }
    }
}
