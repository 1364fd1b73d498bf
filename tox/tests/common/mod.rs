//! In-memory stand-in for libtoxcore.
//!
//! Counts every boundary call, lets a test force the error code of any
//! operation, and fires the real trampolines from inside `iterate`.

#![allow(dead_code, unsafe_code, clippy::unwrap_used, missing_docs)]

use std::cell::{RefCell, RefMut};
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::ffi::c_void;
use std::fmt;
use std::ptr;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use tox::code::*;
use tox::{
    Address, Boundary, FileControl, FileId, Hash, MessageType, Options, PublicKey, SecretKey,
    Session, Trampolines, UserStatus,
};
use tracing::field::{Field, Visit};
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

pub const OWN_KEY: [u8; 32] = [0x11; 32];
pub const FRIEND_KEY: [u8; 32] = [0x22; 32];

type Fire = Box<dyn FnOnce(&Trampolines, *mut c_void)>;

#[derive(Debug, Default, Clone)]
pub struct FakeFriend {
    pub public_key: [u8; 32],
    pub name: Vec<u8>,
    pub status_message: Vec<u8>,
    pub typing: bool,
}

#[derive(Debug, Default, Clone)]
pub struct FakeConference {
    pub title: Vec<u8>,
    pub peers: Vec<Vec<u8>>,
}

#[derive(Default)]
pub struct FakeState {
    pub calls: usize,
    pub kills: usize,
    pub iterations: usize,
    pub forced: HashMap<&'static str, u32>,
    pub create_code: ErrNew,
    pub loaded: Option<Vec<u8>>,
    pub savedata: Vec<u8>,
    pub name: Vec<u8>,
    pub status_message: Vec<u8>,
    pub status: u32,
    pub nospam: u32,
    pub interval_ms: u32,
    pub friends: BTreeMap<u32, FakeFriend>,
    pub conferences: BTreeMap<u32, FakeConference>,
    pub sent: Vec<(u32, MessageType, Vec<u8>)>,
    pub packets: Vec<(u32, bool, Vec<u8>)>,
    pub echo: bool,
    pub trampolines: Option<Trampolines>,
    pending: VecDeque<Fire>,
}

/// Shared handle to the fake library; clones see the same state.
#[derive(Clone, Default)]
pub struct FakeTox {
    state: Rc<RefCell<FakeState>>,
}

impl fmt::Debug for FakeTox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FakeTox").finish_non_exhaustive()
    }
}

/// The fake `Tox *`. Dropping it counts as `tox_kill`.
pub struct FakeHandle {
    state: Rc<RefCell<FakeState>>,
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.state.borrow_mut().kills += 1;
    }
}

impl FakeTox {
    pub fn new() -> Self {
        let fake = Self::default();
        fake.state().interval_ms = 50;
        fake
    }

    pub fn state(&self) -> RefMut<'_, FakeState> {
        self.state.borrow_mut()
    }

    pub fn calls(&self) -> usize {
        self.state.borrow().calls
    }

    pub fn kills(&self) -> usize {
        self.state.borrow().kills
    }

    /// Make `op` report `code` from now on.
    pub fn force<E: ErrorCode>(&self, op: &'static str, code: E) {
        self.state().forced.insert(op, code.raw());
    }

    /// Make construction report `code`.
    pub fn create_with(&self, code: ErrNew) {
        self.state().create_code = code;
    }

    /// Queue a raw callback invocation for the next `iterate`.
    pub fn queue(&self, fire: impl FnOnce(&Trampolines, *mut c_void) + 'static) {
        self.state().pending.push_back(Box::new(fire));
    }

    pub fn queue_friend_message(&self, friend: u32, kind: MessageType, text: Vec<u8>) {
        self.queue(move |t, ud| unsafe {
            (t.friend_message.unwrap())(
                ptr::null_mut(),
                friend,
                kind.to_ffi(),
                text.as_ptr(),
                text.len(),
                ud,
            );
        });
    }

    pub fn session(&self) -> Session<Self> {
        Session::new(self.clone(), &Options::default(), None)
    }

    /// Count one call, and apply a forced code if there is one.
    fn hit<E: ErrorCode>(&self, op: &'static str, error: &mut E) -> bool {
        let mut state = self.state();
        state.calls += 1;
        match state.forced.get(op) {
            Some(raw) => {
                *error = E::from_raw(*raw);
                true
            }
            None => false,
        }
    }

    fn touch(&self) {
        self.state().calls += 1;
    }
}

impl Boundary for FakeTox {
    type Handle = FakeHandle;

    fn version(&self) -> (u32, u32, u32) {
        (0, 2, 12)
    }

    fn is_compatible(&self, major: u32, minor: u32, _patch: u32) -> bool {
        major == 0 && minor == 2
    }

    fn hash(&self, data: &[u8]) -> Option<Hash> {
        let mut out = [0_u8; 32];
        for (i, b) in data.iter().enumerate() {
            out[i % 32] ^= *b;
        }
        Some(Hash::from_bytes(out))
    }

    fn create(
        &self,
        _options: &Options,
        savedata: Option<&[u8]>,
        error: &mut ErrNew,
    ) -> Option<FakeHandle> {
        let mut state = self.state();
        state.calls += 1;
        state.loaded = savedata.map(<[u8]>::to_vec);
        *error = state.create_code;
        match state.create_code {
            ErrNew::Ok | ErrNew::LoadBadFormat => Some(FakeHandle {
                state: Rc::clone(&self.state),
            }),
            _ => None,
        }
    }

    fn register_callbacks(&self, _tox: &mut FakeHandle, trampolines: &Trampolines) {
        self.state().trampolines = Some(*trampolines);
    }

    fn iterate(&self, _tox: &mut FakeHandle, user_data: *mut c_void) {
        let (trampolines, pending) = {
            let mut state = self.state();
            state.calls += 1;
            state.iterations += 1;
            (state.trampolines.unwrap(), std::mem::take(&mut state.pending))
        };
        for fire in pending {
            fire(&trampolines, user_data);
        }
    }

    fn iteration_interval(&self, _tox: &FakeHandle) -> u32 {
        self.state.borrow().interval_ms
    }

    fn savedata_size(&self, _tox: &FakeHandle) -> usize {
        self.touch();
        self.state.borrow().savedata.len()
    }

    fn savedata(&self, _tox: &FakeHandle, out: &mut [u8]) -> bool {
        self.touch();
        let state = self.state.borrow();
        out.copy_from_slice(&state.savedata);
        true
    }

    fn bootstrap(
        &self,
        _tox: &mut FakeHandle,
        _host: &str,
        _port: u16,
        _key: &PublicKey,
        error: &mut ErrBootstrap,
    ) -> bool {
        !self.hit("tox_bootstrap", error)
    }

    fn add_tcp_relay(
        &self,
        _tox: &mut FakeHandle,
        _host: &str,
        _port: u16,
        _key: &PublicKey,
        error: &mut ErrBootstrap,
    ) -> bool {
        !self.hit("tox_add_tcp_relay", error)
    }

    fn connection_status(&self, _tox: &FakeHandle) -> u32 {
        self.touch();
        0
    }

    fn self_address(&self, _tox: &FakeHandle) -> Address {
        self.touch();
        let mut raw = [0_u8; 38];
        raw[..32].copy_from_slice(&OWN_KEY);
        raw[32..36].copy_from_slice(&self.state.borrow().nospam.to_be_bytes());
        Address::from_bytes(raw)
    }

    fn self_nospam(&self, _tox: &FakeHandle) -> u32 {
        self.touch();
        self.state.borrow().nospam
    }

    fn set_self_nospam(&self, _tox: &mut FakeHandle, nospam: u32) {
        self.touch();
        self.state().nospam = nospam;
    }

    fn self_public_key(&self, _tox: &FakeHandle) -> PublicKey {
        self.touch();
        PublicKey::from_bytes(OWN_KEY)
    }

    fn self_secret_key(&self, _tox: &FakeHandle) -> SecretKey {
        self.touch();
        SecretKey::from_bytes([0x33; 32])
    }

    fn self_dht_id(&self, _tox: &FakeHandle) -> PublicKey {
        self.touch();
        PublicKey::from_bytes([0x44; 32])
    }

    fn set_self_name(&self, _tox: &mut FakeHandle, name: &[u8], error: &mut ErrSetInfo) -> bool {
        if self.hit("tox_self_set_name", error) {
            return false;
        }
        self.state().name = name.to_vec();
        true
    }

    fn self_name_size(&self, _tox: &FakeHandle) -> usize {
        self.touch();
        self.state.borrow().name.len()
    }

    fn self_name(&self, _tox: &FakeHandle, out: &mut [u8]) -> bool {
        self.touch();
        out.copy_from_slice(&self.state.borrow().name);
        true
    }

    fn set_self_status_message(
        &self,
        _tox: &mut FakeHandle,
        message: &[u8],
        error: &mut ErrSetInfo,
    ) -> bool {
        if self.hit("tox_self_set_status_message", error) {
            return false;
        }
        self.state().status_message = message.to_vec();
        true
    }

    fn self_status_message_size(&self, _tox: &FakeHandle) -> usize {
        self.touch();
        self.state.borrow().status_message.len()
    }

    fn self_status_message(&self, _tox: &FakeHandle, out: &mut [u8]) -> bool {
        self.touch();
        out.copy_from_slice(&self.state.borrow().status_message);
        true
    }

    fn set_self_status(&self, _tox: &mut FakeHandle, status: UserStatus) {
        self.touch();
        self.state().status = status.to_ffi();
    }

    fn self_status(&self, _tox: &FakeHandle) -> u32 {
        self.touch();
        self.state.borrow().status
    }

    fn self_udp_port(&self, _tox: &FakeHandle, error: &mut ErrGetPort) -> u16 {
        if self.hit("tox_self_get_udp_port", error) { 0 } else { 33445 }
    }

    fn self_tcp_port(&self, _tox: &FakeHandle, error: &mut ErrGetPort) -> u16 {
        if self.hit("tox_self_get_tcp_port", error) { 0 } else { 3389 }
    }

    fn friend_add(
        &self,
        _tox: &mut FakeHandle,
        address: &Address,
        _message: &[u8],
        error: &mut ErrFriendAdd,
    ) -> u32 {
        if self.hit("tox_friend_add", error) {
            return u32::MAX;
        }
        self.insert_friend(*address.public_key().as_bytes())
    }

    fn friend_add_norequest(
        &self,
        _tox: &mut FakeHandle,
        public_key: &PublicKey,
        error: &mut ErrFriendAdd,
    ) -> u32 {
        if self.hit("tox_friend_add_norequest", error) {
            return u32::MAX;
        }
        self.insert_friend(*public_key.as_bytes())
    }

    fn friend_delete(
        &self,
        _tox: &mut FakeHandle,
        friend: u32,
        error: &mut ErrFriendDelete,
    ) -> bool {
        if self.hit("tox_friend_delete", error) {
            return false;
        }
        if self.state().friends.remove(&friend).is_none() {
            *error = ErrFriendDelete::FriendNotFound;
            return false;
        }
        true
    }

    fn friend_by_public_key(
        &self,
        _tox: &FakeHandle,
        public_key: &PublicKey,
        error: &mut ErrFriendByPublicKey,
    ) -> u32 {
        if self.hit("tox_friend_by_public_key", error) {
            return u32::MAX;
        }
        let state = self.state.borrow();
        state
            .friends
            .iter()
            .find(|(_, f)| f.public_key == *public_key.as_bytes())
            .map_or_else(
                || {
                    *error = ErrFriendByPublicKey::NotFound;
                    u32::MAX
                },
                |(n, _)| *n,
            )
    }

    fn friend_exists(&self, _tox: &FakeHandle, friend: u32) -> bool {
        self.touch();
        self.state.borrow().friends.contains_key(&friend)
    }

    fn friend_list_size(&self, _tox: &FakeHandle) -> usize {
        self.touch();
        self.state.borrow().friends.len()
    }

    fn friend_list(&self, _tox: &FakeHandle, out: &mut [u32]) -> bool {
        self.touch();
        for (slot, n) in out.iter_mut().zip(self.state.borrow().friends.keys()) {
            *slot = *n;
        }
        true
    }

    fn friend_public_key(
        &self,
        _tox: &FakeHandle,
        friend: u32,
        error: &mut ErrFriendGetPublicKey,
    ) -> PublicKey {
        if self.hit("tox_friend_get_public_key", error) {
            return PublicKey::from_bytes([0; 32]);
        }
        match self.state.borrow().friends.get(&friend) {
            Some(f) => PublicKey::from_bytes(f.public_key),
            None => {
                *error = ErrFriendGetPublicKey::FriendNotFound;
                PublicKey::from_bytes([0; 32])
            }
        }
    }

    fn friend_last_online(
        &self,
        _tox: &FakeHandle,
        _friend: u32,
        error: &mut ErrFriendGetLastOnline,
    ) -> u64 {
        if self.hit("tox_friend_get_last_online", error) { u64::MAX } else { 1_700_000_000 }
    }

    fn friend_name_size(
        &self,
        _tox: &FakeHandle,
        friend: u32,
        error: &mut ErrFriendQuery,
    ) -> usize {
        if self.hit("tox_friend_get_name_size", error) {
            return usize::MAX;
        }
        self.friend_field(friend, error, |f| f.name.len()).unwrap_or(usize::MAX)
    }

    fn friend_name(
        &self,
        _tox: &FakeHandle,
        friend: u32,
        out: &mut [u8],
        error: &mut ErrFriendQuery,
    ) -> bool {
        if self.hit("tox_friend_get_name", error) {
            return false;
        }
        self.friend_field(friend, error, |f| out.copy_from_slice(&f.name)).is_some()
    }

    fn friend_status_message_size(
        &self,
        _tox: &FakeHandle,
        friend: u32,
        error: &mut ErrFriendQuery,
    ) -> usize {
        if self.hit("tox_friend_get_status_message_size", error) {
            return usize::MAX;
        }
        self.friend_field(friend, error, |f| f.status_message.len()).unwrap_or(usize::MAX)
    }

    fn friend_status_message(
        &self,
        _tox: &FakeHandle,
        friend: u32,
        out: &mut [u8],
        error: &mut ErrFriendQuery,
    ) -> bool {
        if self.hit("tox_friend_get_status_message", error) {
            return false;
        }
        self.friend_field(friend, error, |f| out.copy_from_slice(&f.status_message)).is_some()
    }

    fn friend_status(&self, _tox: &FakeHandle, friend: u32, error: &mut ErrFriendQuery) -> u32 {
        if self.hit("tox_friend_get_status", error) {
            return 0;
        }
        self.friend_field(friend, error, |_| 0).unwrap_or(0)
    }

    fn friend_connection_status(
        &self,
        _tox: &FakeHandle,
        friend: u32,
        error: &mut ErrFriendQuery,
    ) -> u32 {
        if self.hit("tox_friend_get_connection_status", error) {
            return 0;
        }
        self.friend_field(friend, error, |_| 2).unwrap_or(0)
    }

    fn friend_typing(&self, _tox: &FakeHandle, friend: u32, error: &mut ErrFriendQuery) -> bool {
        if self.hit("tox_friend_get_typing", error) {
            return false;
        }
        self.friend_field(friend, error, |f| f.typing).unwrap_or(false)
    }

    fn set_typing(
        &self,
        _tox: &mut FakeHandle,
        friend: u32,
        typing: bool,
        error: &mut ErrSetTyping,
    ) -> bool {
        if self.hit("tox_self_set_typing", error) {
            return false;
        }
        match self.state().friends.get_mut(&friend) {
            Some(f) => {
                f.typing = typing;
                true
            }
            None => {
                *error = ErrSetTyping::FriendNotFound;
                false
            }
        }
    }

    fn friend_send_message(
        &self,
        _tox: &mut FakeHandle,
        friend: u32,
        kind: MessageType,
        message: &[u8],
        error: &mut ErrFriendSendMessage,
    ) -> u32 {
        if self.hit("tox_friend_send_message", error) {
            return 0;
        }
        let mut state = self.state();
        if !state.friends.contains_key(&friend) {
            *error = ErrFriendSendMessage::FriendNotFound;
            return 0;
        }
        state.sent.push((friend, kind, message.to_vec()));
        let id = u32::try_from(state.sent.len()).unwrap();
        let echo = state.echo;
        drop(state);
        if echo {
            self.queue_friend_message(friend, kind, message.to_vec());
        }
        id
    }

    fn file_control(
        &self,
        _tox: &mut FakeHandle,
        _friend: u32,
        _file: u32,
        _control: FileControl,
        error: &mut ErrFileControl,
    ) -> bool {
        !self.hit("tox_file_control", error)
    }

    fn file_seek(
        &self,
        _tox: &mut FakeHandle,
        _friend: u32,
        _file: u32,
        _position: u64,
        error: &mut ErrFileSeek,
    ) -> bool {
        !self.hit("tox_file_seek", error)
    }

    fn file_id(
        &self,
        _tox: &FakeHandle,
        _friend: u32,
        file: u32,
        error: &mut ErrFileGet,
    ) -> FileId {
        self.hit("tox_file_get_file_id", error);
        FileId::from_bytes([u8::try_from(file % 256).unwrap(); 32])
    }

    fn file_send(
        &self,
        _tox: &mut FakeHandle,
        _friend: u32,
        _kind: u32,
        _size: u64,
        _file_id: Option<&FileId>,
        _filename: &[u8],
        error: &mut ErrFileSend,
    ) -> u32 {
        if self.hit("tox_file_send", error) { u32::MAX } else { 0 }
    }

    fn file_send_chunk(
        &self,
        _tox: &mut FakeHandle,
        _friend: u32,
        _file: u32,
        _position: u64,
        _data: &[u8],
        error: &mut ErrFileSendChunk,
    ) -> bool {
        !self.hit("tox_file_send_chunk", error)
    }

    fn conference_new(&self, _tox: &mut FakeHandle, error: &mut ErrConferenceNew) -> u32 {
        if self.hit("tox_conference_new", error) {
            return u32::MAX;
        }
        let mut state = self.state();
        let number = (0..).find(|n| !state.conferences.contains_key(n)).unwrap();
        state.conferences.insert(
            number,
            FakeConference {
                title: Vec::new(),
                peers: vec![b"me".to_vec()],
            },
        );
        number
    }

    fn conference_delete(
        &self,
        _tox: &mut FakeHandle,
        conference: u32,
        error: &mut ErrConferenceDelete,
    ) -> bool {
        if self.hit("tox_conference_delete", error) {
            return false;
        }
        if self.state().conferences.remove(&conference).is_none() {
            *error = ErrConferenceDelete::ConferenceNotFound;
            return false;
        }
        true
    }

    fn conference_peer_count(
        &self,
        _tox: &FakeHandle,
        conference: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> u32 {
        if self.hit("tox_conference_peer_count", error) {
            return u32::MAX;
        }
        self.conference_field(conference, error, |c| u32::try_from(c.peers.len()).unwrap())
            .unwrap_or(u32::MAX)
    }

    fn conference_peer_name_size(
        &self,
        _tox: &FakeHandle,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> usize {
        if self.hit("tox_conference_peer_get_name_size", error) {
            return usize::MAX;
        }
        self.peer_field(conference, peer, error, <[u8]>::len).unwrap_or(usize::MAX)
    }

    fn conference_peer_name(
        &self,
        _tox: &FakeHandle,
        conference: u32,
        peer: u32,
        out: &mut [u8],
        error: &mut ErrConferencePeerQuery,
    ) -> bool {
        if self.hit("tox_conference_peer_get_name", error) {
            return false;
        }
        self.peer_field(conference, peer, error, |name| out.copy_from_slice(name)).is_some()
    }

    fn conference_peer_public_key(
        &self,
        _tox: &FakeHandle,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> PublicKey {
        if self.hit("tox_conference_peer_get_public_key", error) {
            return PublicKey::from_bytes([0; 32]);
        }
        let key = if peer == 0 { OWN_KEY } else { FRIEND_KEY };
        self.peer_field(conference, peer, error, |_| PublicKey::from_bytes(key))
            .unwrap_or(PublicKey::from_bytes([0; 32]))
    }

    fn conference_peer_is_ours(
        &self,
        _tox: &FakeHandle,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> bool {
        if self.hit("tox_conference_peer_number_is_ours", error) {
            return false;
        }
        self.peer_field(conference, peer, error, |_| peer == 0).unwrap_or(false)
    }

    fn conference_invite(
        &self,
        _tox: &mut FakeHandle,
        _friend: u32,
        _conference: u32,
        error: &mut ErrConferenceInvite,
    ) -> bool {
        !self.hit("tox_conference_invite", error)
    }

    fn conference_join(
        &self,
        tox: &mut FakeHandle,
        _friend: u32,
        _cookie: &[u8],
        error: &mut ErrConferenceJoin,
    ) -> u32 {
        let mut new_code = ErrConferenceNew::Ok;
        if self.hit("tox_conference_join", error) {
            return u32::MAX;
        }
        self.conference_new(tox, &mut new_code)
    }

    fn conference_send_message(
        &self,
        _tox: &mut FakeHandle,
        conference: u32,
        _kind: MessageType,
        _message: &[u8],
        error: &mut ErrConferenceSendMessage,
    ) -> bool {
        if self.hit("tox_conference_send_message", error) {
            return false;
        }
        if !self.state.borrow().conferences.contains_key(&conference) {
            *error = ErrConferenceSendMessage::ConferenceNotFound;
            return false;
        }
        true
    }

    fn conference_title_size(
        &self,
        _tox: &FakeHandle,
        conference: u32,
        error: &mut ErrConferenceTitle,
    ) -> usize {
        if self.hit("tox_conference_get_title_size", error) {
            return usize::MAX;
        }
        self.conference_field(conference, error, |c| c.title.len()).unwrap_or(usize::MAX)
    }

    fn conference_title(
        &self,
        _tox: &FakeHandle,
        conference: u32,
        out: &mut [u8],
        error: &mut ErrConferenceTitle,
    ) -> bool {
        if self.hit("tox_conference_get_title", error) {
            return false;
        }
        self.conference_field(conference, error, |c| out.copy_from_slice(&c.title)).is_some()
    }

    fn conference_set_title(
        &self,
        _tox: &mut FakeHandle,
        conference: u32,
        title: &[u8],
        error: &mut ErrConferenceTitle,
    ) -> bool {
        if self.hit("tox_conference_set_title", error) {
            return false;
        }
        match self.state().conferences.get_mut(&conference) {
            Some(c) => {
                c.title = title.to_vec();
                true
            }
            None => {
                *error = ErrConferenceTitle::ConferenceNotFound;
                false
            }
        }
    }

    fn conference_list_size(&self, _tox: &FakeHandle) -> usize {
        self.touch();
        self.state.borrow().conferences.len()
    }

    fn conference_list(&self, _tox: &FakeHandle, out: &mut [u32]) -> bool {
        self.touch();
        for (slot, n) in out.iter_mut().zip(self.state.borrow().conferences.keys()) {
            *slot = *n;
        }
        true
    }

    fn conference_type(
        &self,
        _tox: &FakeHandle,
        conference: u32,
        error: &mut ErrConferenceGetType,
    ) -> u32 {
        if self.hit("tox_conference_get_type", error) {
            return 0;
        }
        self.conference_field(conference, error, |_| 0).unwrap_or(0)
    }

    fn send_lossy_packet(
        &self,
        _tox: &mut FakeHandle,
        friend: u32,
        data: &[u8],
        error: &mut ErrFriendCustomPacket,
    ) -> bool {
        if self.hit("tox_friend_send_lossy_packet", error) {
            return false;
        }
        self.state().packets.push((friend, false, data.to_vec()));
        true
    }

    fn send_lossless_packet(
        &self,
        _tox: &mut FakeHandle,
        friend: u32,
        data: &[u8],
        error: &mut ErrFriendCustomPacket,
    ) -> bool {
        if self.hit("tox_friend_send_lossless_packet", error) {
            return false;
        }
        self.state().packets.push((friend, true, data.to_vec()));
        true
    }
}

impl FakeTox {
    fn insert_friend(&self, public_key: [u8; 32]) -> u32 {
        let mut state = self.state();
        let number = (0..).find(|n| !state.friends.contains_key(n)).unwrap();
        state.friends.insert(
            number,
            FakeFriend {
                public_key,
                ..FakeFriend::default()
            },
        );
        number
    }

    fn friend_field<R>(
        &self,
        friend: u32,
        error: &mut ErrFriendQuery,
        read: impl FnOnce(&FakeFriend) -> R,
    ) -> Option<R> {
        let state = self.state.borrow();
        let Some(f) = state.friends.get(&friend) else {
            *error = ErrFriendQuery::FriendNotFound;
            return None;
        };
        Some(read(f))
    }

    fn conference_field<E: ErrorCode, R>(
        &self,
        conference: u32,
        error: &mut E,
        read: impl FnOnce(&FakeConference) -> R,
    ) -> Option<R> {
        let state = self.state.borrow();
        let Some(c) = state.conferences.get(&conference) else {
            // Raw 1 is CONFERENCE_NOT_FOUND in every conference category.
            *error = E::from_raw(1);
            return None;
        };
        Some(read(c))
    }

    fn peer_field<R>(
        &self,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
        read: impl FnOnce(&[u8]) -> R,
    ) -> Option<R> {
        let state = self.state.borrow();
        let Some(c) = state.conferences.get(&conference) else {
            *error = ErrConferencePeerQuery::ConferenceNotFound;
            return None;
        };
        let Some(name) = usize::try_from(peer).ok().and_then(|p| c.peers.get(p)) else {
            *error = ErrConferencePeerQuery::PeerNotFound;
            return None;
        };
        Some(read(name))
    }
}

/// One captured `tracing` event.
#[derive(Debug, Clone)]
pub struct Captured {
    pub target: String,
    pub level: tracing::Level,
    pub fields: BTreeMap<String, String>,
}

impl Captured {
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }
}

#[derive(Clone, Default)]
struct CaptureLayer {
    events: Arc<Mutex<Vec<Captured>>>,
}

struct FieldVisitor<'a>(&'a mut BTreeMap<String, String>);

impl Visit for FieldVisitor<'_> {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.0.insert(field.name().to_owned(), value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.0.insert(field.name().to_owned(), format!("{value:?}"));
    }
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut fields = BTreeMap::new();
        event.record(&mut FieldVisitor(&mut fields));
        self.events.lock().unwrap().push(Captured {
            target: event.metadata().target().to_owned(),
            level: *event.metadata().level(),
            fields,
        });
    }
}

/// Run `f` with a subscriber that records every event, and return them.
pub fn capture<R>(f: impl FnOnce() -> R) -> (R, Vec<Captured>) {
    let layer = CaptureLayer::default();
    let events = Arc::clone(&layer.events);
    let subscriber = tracing_subscriber::registry().with(layer);
    let out = tracing::subscriber::with_default(subscriber, f);
    let captured = events.lock().unwrap().clone();
    (out, captured)
}
