#![allow(unsafe_code)]
//! Event bridge: toxcore callbacks as typed events.
//!
//! toxcore invokes its callbacks synchronously from inside `tox_iterate`,
//! passing back the `user_data` pointer given to that call. Each category has
//! one `extern "C"` trampoline (see [`Trampolines`]) that recovers the
//! [`EventBridge`] from `user_data`, decodes the raw arguments into an
//! [`Event`], and fans it out to listeners and channel subscribers before
//! returning to the library.

use std::collections::HashMap;
use std::ffi::c_void;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;

use tox_sys as sys;

use crate::marshal::{borrow_bytes, decode_text, read_array};
use crate::types::{
    ConferenceType, Connection, FileControl, MessageType, PUBLIC_KEY_SIZE, PublicKey, UserStatus,
};

/// A decoded toxcore callback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Own network reachability changed.
    SelfConnectionStatus(Connection),
    /// A friend changed their name.
    FriendName {
        /// Friend number.
        friend: u32,
        /// New name.
        name: String,
    },
    /// A friend changed their status message.
    FriendStatusMessage {
        /// Friend number.
        friend: u32,
        /// New status message.
        message: String,
    },
    /// A friend changed their presence.
    FriendStatus {
        /// Friend number.
        friend: u32,
        /// New presence.
        status: UserStatus,
    },
    /// A friend went on- or offline.
    FriendConnectionStatus {
        /// Friend number.
        friend: u32,
        /// New reachability.
        connection: Connection,
    },
    /// A friend started or stopped typing.
    FriendTyping {
        /// Friend number.
        friend: u32,
        /// Whether they are typing.
        typing: bool,
    },
    /// A sent message was received by the friend.
    FriendReadReceipt {
        /// Friend number.
        friend: u32,
        /// Id returned when the message was sent.
        message_id: u32,
    },
    /// Someone asked to become a friend.
    FriendRequest {
        /// Requester's public key.
        public_key: PublicKey,
        /// Request message.
        message: String,
    },
    /// A friend sent a message.
    FriendMessage {
        /// Friend number.
        friend: u32,
        /// Normal or action.
        kind: MessageType,
        /// Message text.
        text: String,
    },
    /// The other side controlled a transfer.
    FileControl {
        /// Friend number.
        friend: u32,
        /// File number.
        file: u32,
        /// Control command.
        control: FileControl,
    },
    /// The receiver wants the next chunk of an outgoing file.
    FileChunkRequest {
        /// Friend number.
        friend: u32,
        /// File number.
        file: u32,
        /// Offset requested.
        position: u64,
        /// Bytes requested; zero means the transfer is complete.
        length: usize,
    },
    /// A friend offered a file.
    FileReceive {
        /// Friend number.
        friend: u32,
        /// File number.
        file: u32,
        /// File kind; see [`FileKind`](crate::types::FileKind).
        kind: u32,
        /// Total size, `u64::MAX` when unknown.
        size: u64,
        /// Proposed file name.
        filename: String,
    },
    /// A chunk of an incoming file arrived.
    FileChunk {
        /// Friend number.
        friend: u32,
        /// File number.
        file: u32,
        /// Offset of the chunk.
        position: u64,
        /// Chunk bytes; empty means the transfer is complete.
        data: Vec<u8>,
    },
    /// A friend invited us to a conference.
    ConferenceInvite {
        /// Friend number.
        friend: u32,
        /// Conference type.
        kind: ConferenceType,
        /// Cookie to pass to `conference_join`.
        cookie: Vec<u8>,
    },
    /// A joined conference finished connecting.
    ConferenceConnected {
        /// Conference number.
        conference: u32,
    },
    /// A peer sent a conference message.
    ConferenceMessage {
        /// Conference number.
        conference: u32,
        /// Peer number.
        peer: u32,
        /// Normal or action.
        kind: MessageType,
        /// Message text.
        text: String,
    },
    /// A peer changed the conference title.
    ConferenceTitle {
        /// Conference number.
        conference: u32,
        /// Peer number.
        peer: u32,
        /// New title.
        title: String,
    },
    /// A peer changed their name.
    ConferencePeerName {
        /// Conference number.
        conference: u32,
        /// Peer number.
        peer: u32,
        /// New name.
        name: String,
    },
    /// Peers joined or left. Peer numbers may have been reassigned.
    ConferencePeerListChanged {
        /// Conference number.
        conference: u32,
    },
    /// A lossy custom packet arrived.
    LossyPacket {
        /// Friend number.
        friend: u32,
        /// Packet bytes, including the id byte.
        data: Vec<u8>,
    },
    /// A lossless custom packet arrived.
    LosslessPacket {
        /// Friend number.
        friend: u32,
        /// Packet bytes, including the id byte.
        data: Vec<u8>,
    },
}

/// Event category, used to register listeners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    /// [`Event::SelfConnectionStatus`].
    SelfConnectionStatus,
    /// [`Event::FriendName`].
    FriendName,
    /// [`Event::FriendStatusMessage`].
    FriendStatusMessage,
    /// [`Event::FriendStatus`].
    FriendStatus,
    /// [`Event::FriendConnectionStatus`].
    FriendConnectionStatus,
    /// [`Event::FriendTyping`].
    FriendTyping,
    /// [`Event::FriendReadReceipt`].
    FriendReadReceipt,
    /// [`Event::FriendRequest`].
    FriendRequest,
    /// [`Event::FriendMessage`].
    FriendMessage,
    /// [`Event::FileControl`].
    FileControl,
    /// [`Event::FileChunkRequest`].
    FileChunkRequest,
    /// [`Event::FileReceive`].
    FileReceive,
    /// [`Event::FileChunk`].
    FileChunk,
    /// [`Event::ConferenceInvite`].
    ConferenceInvite,
    /// [`Event::ConferenceConnected`].
    ConferenceConnected,
    /// [`Event::ConferenceMessage`].
    ConferenceMessage,
    /// [`Event::ConferenceTitle`].
    ConferenceTitle,
    /// [`Event::ConferencePeerName`].
    ConferencePeerName,
    /// [`Event::ConferencePeerListChanged`].
    ConferencePeerListChanged,
    /// [`Event::LossyPacket`].
    LossyPacket,
    /// [`Event::LosslessPacket`].
    LosslessPacket,
}

impl EventKind {
    /// Every category, in declaration order.
    pub const ALL: [Self; 21] = [
        Self::SelfConnectionStatus,
        Self::FriendName,
        Self::FriendStatusMessage,
        Self::FriendStatus,
        Self::FriendConnectionStatus,
        Self::FriendTyping,
        Self::FriendReadReceipt,
        Self::FriendRequest,
        Self::FriendMessage,
        Self::FileControl,
        Self::FileChunkRequest,
        Self::FileReceive,
        Self::FileChunk,
        Self::ConferenceInvite,
        Self::ConferenceConnected,
        Self::ConferenceMessage,
        Self::ConferenceTitle,
        Self::ConferencePeerName,
        Self::ConferencePeerListChanged,
        Self::LossyPacket,
        Self::LosslessPacket,
    ];
}

impl Event {
    /// The category of this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::SelfConnectionStatus(_) => EventKind::SelfConnectionStatus,
            Self::FriendName { .. } => EventKind::FriendName,
            Self::FriendStatusMessage { .. } => EventKind::FriendStatusMessage,
            Self::FriendStatus { .. } => EventKind::FriendStatus,
            Self::FriendConnectionStatus { .. } => EventKind::FriendConnectionStatus,
            Self::FriendTyping { .. } => EventKind::FriendTyping,
            Self::FriendReadReceipt { .. } => EventKind::FriendReadReceipt,
            Self::FriendRequest { .. } => EventKind::FriendRequest,
            Self::FriendMessage { .. } => EventKind::FriendMessage,
            Self::FileControl { .. } => EventKind::FileControl,
            Self::FileChunkRequest { .. } => EventKind::FileChunkRequest,
            Self::FileReceive { .. } => EventKind::FileReceive,
            Self::FileChunk { .. } => EventKind::FileChunk,
            Self::ConferenceInvite { .. } => EventKind::ConferenceInvite,
            Self::ConferenceConnected { .. } => EventKind::ConferenceConnected,
            Self::ConferenceMessage { .. } => EventKind::ConferenceMessage,
            Self::ConferenceTitle { .. } => EventKind::ConferenceTitle,
            Self::ConferencePeerName { .. } => EventKind::ConferencePeerName,
            Self::ConferencePeerListChanged { .. } => EventKind::ConferencePeerListChanged,
            Self::LossyPacket { .. } => EventKind::LossyPacket,
            Self::LosslessPacket { .. } => EventKind::LosslessPacket,
        }
    }
}

/// Handle returned by [`EventBridge::on`], used to remove the listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Box<dyn FnMut(&Event) + Send>;

/// Per-category listener lists and channel subscriptions.
///
/// Dispatch is synchronous and in registration order. Channel subscribers
/// whose receiver was dropped are pruned on the next event of their kind.
#[derive(Default)]
pub struct EventBridge {
    listeners: HashMap<EventKind, Vec<(ListenerId, Listener)>>,
    subscribers: HashMap<EventKind, Vec<mpsc::Sender<Event>>>,
    catch_all: Vec<mpsc::Sender<Event>>,
    next_id: u64,
}

impl EventBridge {
    /// An empty bridge.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Call `listener` for every event of `kind`.
    pub fn on(
        &mut self,
        kind: EventKind,
        listener: impl FnMut(&Event) + Send + 'static,
    ) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners
            .entry(kind)
            .or_default()
            .push((id, Box::new(listener)));
        id
    }

    /// Remove a listener. Returns whether it was registered.
    pub fn off(&mut self, id: ListenerId) -> bool {
        for list in self.listeners.values_mut() {
            if let Some(pos) = list.iter().position(|(lid, _)| *lid == id) {
                list.remove(pos);
                return true;
            }
        }
        false
    }

    /// Receive every event of `kind` on a channel.
    pub fn subscribe(&mut self, kind: EventKind) -> mpsc::Receiver<Event> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.entry(kind).or_default().push(tx);
        rx
    }

    /// Receive every event on a channel.
    pub fn subscribe_all(&mut self) -> mpsc::Receiver<Event> {
        let (tx, rx) = mpsc::channel();
        self.catch_all.push(tx);
        rx
    }

    /// Number of listeners registered for `kind`.
    #[must_use]
    pub fn listener_count(&self, kind: EventKind) -> usize {
        self.listeners.get(&kind).map_or(0, Vec::len)
    }

    /// Deliver `event` to its listeners, then to its subscribers.
    ///
    /// A panicking listener is logged and skipped; the remaining listeners
    /// and every subscriber still receive the event.
    pub fn emit(&mut self, event: &Event) {
        let kind = event.kind();
        if let Some(list) = self.listeners.get_mut(&kind) {
            for (id, listener) in list.iter_mut() {
                if panic::catch_unwind(AssertUnwindSafe(|| listener(event))).is_err() {
                    tracing::error!(
                        target: "tox::bridge",
                        ?kind,
                        listener = id.0,
                        "event listener panicked"
                    );
                }
            }
        }
        if let Some(senders) = self.subscribers.get_mut(&kind) {
            senders.retain(|tx| tx.send(event.clone()).is_ok());
        }
        self.catch_all.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl fmt::Debug for EventBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let listeners: usize = self.listeners.values().map(Vec::len).sum();
        let subscribers: usize = self.subscribers.values().map(Vec::len).sum();
        f.debug_struct("EventBridge")
            .field("listeners", &listeners)
            .field("subscribers", &(subscribers + self.catch_all.len()))
            .finish()
    }
}

/// The callback set registered with toxcore, one entry per category.
///
/// Backends pass each entry to the matching `tox_callback_*` function. Every
/// trampoline expects the `user_data` given to `tox_iterate` to point at a
/// live [`EventBridge`].
#[derive(Debug, Clone, Copy)]
pub struct Trampolines {
    /// `tox_callback_self_connection_status`.
    pub self_connection_status: sys::tox_self_connection_status_cb,
    /// `tox_callback_friend_name`.
    pub friend_name: sys::tox_friend_name_cb,
    /// `tox_callback_friend_status_message`.
    pub friend_status_message: sys::tox_friend_status_message_cb,
    /// `tox_callback_friend_status`.
    pub friend_status: sys::tox_friend_status_cb,
    /// `tox_callback_friend_connection_status`.
    pub friend_connection_status: sys::tox_friend_connection_status_cb,
    /// `tox_callback_friend_typing`.
    pub friend_typing: sys::tox_friend_typing_cb,
    /// `tox_callback_friend_read_receipt`.
    pub friend_read_receipt: sys::tox_friend_read_receipt_cb,
    /// `tox_callback_friend_request`.
    pub friend_request: sys::tox_friend_request_cb,
    /// `tox_callback_friend_message`.
    pub friend_message: sys::tox_friend_message_cb,
    /// `tox_callback_file_recv_control`.
    pub file_recv_control: sys::tox_file_recv_control_cb,
    /// `tox_callback_file_chunk_request`.
    pub file_chunk_request: sys::tox_file_chunk_request_cb,
    /// `tox_callback_file_recv`.
    pub file_recv: sys::tox_file_recv_cb,
    /// `tox_callback_file_recv_chunk`.
    pub file_recv_chunk: sys::tox_file_recv_chunk_cb,
    /// `tox_callback_conference_invite`.
    pub conference_invite: sys::tox_conference_invite_cb,
    /// `tox_callback_conference_connected`.
    pub conference_connected: sys::tox_conference_connected_cb,
    /// `tox_callback_conference_message`.
    pub conference_message: sys::tox_conference_message_cb,
    /// `tox_callback_conference_title`.
    pub conference_title: sys::tox_conference_title_cb,
    /// `tox_callback_conference_peer_name`.
    pub conference_peer_name: sys::tox_conference_peer_name_cb,
    /// `tox_callback_conference_peer_list_changed`.
    pub conference_peer_list_changed: sys::tox_conference_peer_list_changed_cb,
    /// `tox_callback_friend_lossy_packet`.
    pub friend_lossy_packet: sys::tox_friend_lossy_packet_cb,
    /// `tox_callback_friend_lossless_packet`.
    pub friend_lossless_packet: sys::tox_friend_lossless_packet_cb,
}

impl Trampolines {
    /// Trampolines dispatching into an [`EventBridge`].
    pub const BRIDGE: Self = Self {
        self_connection_status: Some(on_self_connection_status),
        friend_name: Some(on_friend_name),
        friend_status_message: Some(on_friend_status_message),
        friend_status: Some(on_friend_status),
        friend_connection_status: Some(on_friend_connection_status),
        friend_typing: Some(on_friend_typing),
        friend_read_receipt: Some(on_friend_read_receipt),
        friend_request: Some(on_friend_request),
        friend_message: Some(on_friend_message),
        file_recv_control: Some(on_file_recv_control),
        file_chunk_request: Some(on_file_chunk_request),
        file_recv: Some(on_file_recv),
        file_recv_chunk: Some(on_file_recv_chunk),
        conference_invite: Some(on_conference_invite),
        conference_connected: Some(on_conference_connected),
        conference_message: Some(on_conference_message),
        conference_title: Some(on_conference_title),
        conference_peer_name: Some(on_conference_peer_name),
        conference_peer_list_changed: Some(on_conference_peer_list_changed),
        friend_lossy_packet: Some(on_friend_lossy_packet),
        friend_lossless_packet: Some(on_friend_lossless_packet),
    };
}

/// Recover the bridge from `user_data` and deliver `event`.
///
/// [`EventBridge::emit`] contains listener panics, so nothing unwinds into C.
unsafe fn dispatch(user_data: *mut c_void, event: Option<Event>) {
    if user_data.is_null() {
        tracing::warn!(target: "tox::bridge", "callback fired without a bridge context");
        return;
    }
    let Some(event) = event else { return };
    let bridge = unsafe { &mut *user_data.cast::<EventBridge>() };
    bridge.emit(&event);
}

/// Map an enum value from a callback, dropping the event if it is unknown.
fn known<T>(what: &'static str, raw: u32, value: Option<T>) -> Option<T> {
    if value.is_none() {
        tracing::warn!(
            target: "tox::bridge",
            what,
            raw,
            "unknown value in callback; event dropped"
        );
    }
    value
}

unsafe fn text(ptr: *const u8, len: usize) -> String {
    decode_text(unsafe { borrow_bytes(ptr, len) })
}

unsafe fn bytes(ptr: *const u8, len: usize) -> Vec<u8> {
    unsafe { borrow_bytes(ptr, len) }.to_vec()
}

unsafe extern "C" fn on_self_connection_status(
    _tox: *mut sys::Tox,
    connection_status: sys::TOX_CONNECTION,
    user_data: *mut c_void,
) {
    let event = known("connection", connection_status, Connection::from_ffi(connection_status))
        .map(Event::SelfConnectionStatus);
    unsafe { dispatch(user_data, event) };
}

unsafe extern "C" fn on_friend_name(
    _tox: *mut sys::Tox,
    friend: u32,
    name: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let name = unsafe { text(name, length) };
    unsafe { dispatch(user_data, Some(Event::FriendName { friend, name })) };
}

unsafe extern "C" fn on_friend_status_message(
    _tox: *mut sys::Tox,
    friend: u32,
    message: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let message = unsafe { text(message, length) };
    unsafe { dispatch(user_data, Some(Event::FriendStatusMessage { friend, message })) };
}

unsafe extern "C" fn on_friend_status(
    _tox: *mut sys::Tox,
    friend: u32,
    status: sys::TOX_USER_STATUS,
    user_data: *mut c_void,
) {
    let event = known("user_status", status, UserStatus::from_ffi(status))
        .map(|status| Event::FriendStatus { friend, status });
    unsafe { dispatch(user_data, event) };
}

unsafe extern "C" fn on_friend_connection_status(
    _tox: *mut sys::Tox,
    friend: u32,
    connection_status: sys::TOX_CONNECTION,
    user_data: *mut c_void,
) {
    let event = known("connection", connection_status, Connection::from_ffi(connection_status))
        .map(|connection| Event::FriendConnectionStatus { friend, connection });
    unsafe { dispatch(user_data, event) };
}

unsafe extern "C" fn on_friend_typing(
    _tox: *mut sys::Tox,
    friend: u32,
    typing: bool,
    user_data: *mut c_void,
) {
    unsafe { dispatch(user_data, Some(Event::FriendTyping { friend, typing })) };
}

unsafe extern "C" fn on_friend_read_receipt(
    _tox: *mut sys::Tox,
    friend: u32,
    message_id: u32,
    user_data: *mut c_void,
) {
    unsafe { dispatch(user_data, Some(Event::FriendReadReceipt { friend, message_id })) };
}

unsafe extern "C" fn on_friend_request(
    _tox: *mut sys::Tox,
    public_key: *const u8,
    message: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let event = unsafe { read_array::<PUBLIC_KEY_SIZE>(public_key) }.map(|key| {
        Event::FriendRequest {
            public_key: PublicKey::from_bytes(key),
            message: unsafe { text(message, length) },
        }
    });
    unsafe { dispatch(user_data, event) };
}

unsafe extern "C" fn on_friend_message(
    _tox: *mut sys::Tox,
    friend: u32,
    kind: sys::TOX_MESSAGE_TYPE,
    message: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let event = known("message_type", kind, MessageType::from_ffi(kind)).map(|kind| {
        Event::FriendMessage {
            friend,
            kind,
            text: unsafe { text(message, length) },
        }
    });
    unsafe { dispatch(user_data, event) };
}

unsafe extern "C" fn on_file_recv_control(
    _tox: *mut sys::Tox,
    friend: u32,
    file: u32,
    control: sys::TOX_FILE_CONTROL,
    user_data: *mut c_void,
) {
    let event = known("file_control", control, FileControl::from_ffi(control))
        .map(|control| Event::FileControl { friend, file, control });
    unsafe { dispatch(user_data, event) };
}

unsafe extern "C" fn on_file_chunk_request(
    _tox: *mut sys::Tox,
    friend: u32,
    file: u32,
    position: u64,
    length: usize,
    user_data: *mut c_void,
) {
    let event = Event::FileChunkRequest {
        friend,
        file,
        position,
        length,
    };
    unsafe { dispatch(user_data, Some(event)) };
}

unsafe extern "C" fn on_file_recv(
    _tox: *mut sys::Tox,
    friend: u32,
    file: u32,
    kind: u32,
    size: u64,
    filename: *const u8,
    filename_length: usize,
    user_data: *mut c_void,
) {
    let event = Event::FileReceive {
        friend,
        file,
        kind,
        size,
        filename: unsafe { text(filename, filename_length) },
    };
    unsafe { dispatch(user_data, Some(event)) };
}

unsafe extern "C" fn on_file_recv_chunk(
    _tox: *mut sys::Tox,
    friend: u32,
    file: u32,
    position: u64,
    data: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let event = Event::FileChunk {
        friend,
        file,
        position,
        data: unsafe { bytes(data, length) },
    };
    unsafe { dispatch(user_data, Some(event)) };
}

unsafe extern "C" fn on_conference_invite(
    _tox: *mut sys::Tox,
    friend: u32,
    kind: sys::TOX_CONFERENCE_TYPE,
    cookie: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let event = known("conference_type", kind, ConferenceType::from_ffi(kind)).map(|kind| {
        Event::ConferenceInvite {
            friend,
            kind,
            cookie: unsafe { bytes(cookie, length) },
        }
    });
    unsafe { dispatch(user_data, event) };
}

unsafe extern "C" fn on_conference_connected(
    _tox: *mut sys::Tox,
    conference: u32,
    user_data: *mut c_void,
) {
    unsafe { dispatch(user_data, Some(Event::ConferenceConnected { conference })) };
}

unsafe extern "C" fn on_conference_message(
    _tox: *mut sys::Tox,
    conference: u32,
    peer: u32,
    kind: sys::TOX_MESSAGE_TYPE,
    message: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let event = known("message_type", kind, MessageType::from_ffi(kind)).map(|kind| {
        Event::ConferenceMessage {
            conference,
            peer,
            kind,
            text: unsafe { text(message, length) },
        }
    });
    unsafe { dispatch(user_data, event) };
}

unsafe extern "C" fn on_conference_title(
    _tox: *mut sys::Tox,
    conference: u32,
    peer: u32,
    title: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let event = Event::ConferenceTitle {
        conference,
        peer,
        title: unsafe { text(title, length) },
    };
    unsafe { dispatch(user_data, Some(event)) };
}

unsafe extern "C" fn on_conference_peer_name(
    _tox: *mut sys::Tox,
    conference: u32,
    peer: u32,
    name: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let event = Event::ConferencePeerName {
        conference,
        peer,
        name: unsafe { text(name, length) },
    };
    unsafe { dispatch(user_data, Some(event)) };
}

unsafe extern "C" fn on_conference_peer_list_changed(
    _tox: *mut sys::Tox,
    conference: u32,
    user_data: *mut c_void,
) {
    unsafe { dispatch(user_data, Some(Event::ConferencePeerListChanged { conference })) };
}

unsafe extern "C" fn on_friend_lossy_packet(
    _tox: *mut sys::Tox,
    friend: u32,
    data: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let data = unsafe { bytes(data, length) };
    unsafe { dispatch(user_data, Some(Event::LossyPacket { friend, data })) };
}

unsafe extern "C" fn on_friend_lossless_packet(
    _tox: *mut sys::Tox,
    friend: u32,
    data: *const u8,
    length: usize,
    user_data: *mut c_void,
) {
    let data = unsafe { bytes(data, length) };
    unsafe { dispatch(user_data, Some(Event::LosslessPacket { friend, data })) };
}

#[cfg(test)]
mod tests {
    use std::ptr;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use pretty_assertions::assert_eq;

    use super::*;

    fn context(bridge: &mut EventBridge) -> *mut c_void {
        ptr::from_mut(bridge).cast()
    }

    #[test]
    fn listeners_run_in_registration_order() {
        let mut bridge = EventBridge::new();
        let seen = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second"] {
            let seen = Arc::clone(&seen);
            bridge.on(EventKind::FriendTyping, move |_| seen.lock().unwrap().push(tag));
        }
        bridge.emit(&Event::FriendTyping {
            friend: 0,
            typing: true,
        });
        assert_eq!(*seen.lock().unwrap(), vec!["first", "second"]);
    }

    #[test]
    fn off_removes_only_that_listener() {
        let mut bridge = EventBridge::new();
        let a = bridge.on(EventKind::FriendName, |_| {});
        bridge.on(EventKind::FriendName, |_| {});
        assert!(bridge.off(a));
        assert!(!bridge.off(a));
        assert_eq!(bridge.listener_count(EventKind::FriendName), 1);
    }

    #[test]
    fn other_kinds_are_not_delivered() {
        let mut bridge = EventBridge::new();
        let rx = bridge.subscribe(EventKind::FriendMessage);
        bridge.emit(&Event::ConferenceConnected { conference: 1 });
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn dropped_receivers_are_pruned() {
        let mut bridge = EventBridge::new();
        drop(bridge.subscribe(EventKind::ConferenceConnected));
        let all = bridge.subscribe_all();
        bridge.emit(&Event::ConferenceConnected { conference: 3 });
        assert!(bridge.subscribers[&EventKind::ConferenceConnected].is_empty());
        assert_eq!(all.try_recv().unwrap(), Event::ConferenceConnected { conference: 3 });
    }

    #[test]
    fn trampoline_decodes_and_dispatches() {
        let mut bridge = EventBridge::new();
        let rx = bridge.subscribe(EventKind::FriendMessage);
        let text = b"hello";
        let callback = Trampolines::BRIDGE.friend_message.unwrap();
        unsafe {
            callback(
                ptr::null_mut(),
                4,
                sys::TOX_MESSAGE_TYPE_ACTION,
                text.as_ptr(),
                text.len(),
                context(&mut bridge),
            );
        }
        assert_eq!(
            rx.try_recv().unwrap(),
            Event::FriendMessage {
                friend: 4,
                kind: MessageType::Action,
                text: "hello".into(),
            }
        );
    }

    #[test]
    fn unknown_enum_value_drops_event() {
        let mut bridge = EventBridge::new();
        let rx = bridge.subscribe_all();
        let callback = Trampolines::BRIDGE.friend_status.unwrap();
        unsafe { callback(ptr::null_mut(), 0, 42, context(&mut bridge)) };
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn null_context_is_ignored() {
        let callback = Trampolines::BRIDGE.conference_connected.unwrap();
        unsafe { callback(ptr::null_mut(), 0, ptr::null_mut()) };
    }

    #[test]
    fn listener_panic_does_not_unwind_into_caller() {
        let mut bridge = EventBridge::new();
        bridge.on(EventKind::ConferenceConnected, |_| panic!("listener failure"));
        let callback = Trampolines::BRIDGE.conference_connected.unwrap();
        unsafe { callback(ptr::null_mut(), 0, context(&mut bridge)) };
    }

    #[test]
    fn listener_panic_skips_only_that_listener() {
        let mut bridge = EventBridge::new();
        let later = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&later);
        bridge.on(EventKind::ConferenceConnected, |_| panic!("listener failure"));
        bridge.on(EventKind::ConferenceConnected, move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let kind = bridge.subscribe(EventKind::ConferenceConnected);
        let all = bridge.subscribe_all();

        bridge.emit(&Event::ConferenceConnected { conference: 4 });

        assert_eq!(later.load(Ordering::SeqCst), 1);
        assert_eq!(kind.try_iter().count(), 1);
        assert_eq!(all.try_iter().count(), 1);
    }
}
