//! Error codes reported by toxcore through its out-parameters.
//!
//! Every fallible entry point writes one of a closed set of codes, exactly one
//! of which means success. Each category is a Rust enum here; values this
//! version does not know decode to `Unknown(raw)` instead of being dropped.

use std::fmt;

use tox_sys as sys;

/// An error-code category with a distinguished success value.
pub trait ErrorCode: Copy + Eq + fmt::Debug + fmt::Display {
    /// The success code.
    const OK: Self;

    /// Decode a raw code written by the library.
    fn from_raw(raw: u32) -> Self;

    /// The raw value as the library sees it.
    fn raw(self) -> u32;

    /// Whether this is the success code.
    fn is_ok(self) -> bool {
        self == Self::OK
    }
}

macro_rules! error_code {
    ($(#[$meta:meta])* $vis:vis enum $name:ident {
        $($(#[$vm:meta])* $variant:ident = $val:path),* $(,)?
    }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $($(#[$vm])* $variant,)*
            /// A code not known to these bindings.
            Unknown(u32),
        }

        impl ErrorCode for $name {
            const OK: Self = Self::Ok;

            fn from_raw(raw: u32) -> Self {
                match raw {
                    $(v if v == $val => Self::$variant,)*
                    other => Self::Unknown(other),
                }
            }

            fn raw(self) -> u32 {
                match self {
                    $(Self::$variant => $val,)*
                    Self::Unknown(v) => v,
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::Ok
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match self {
                    $(Self::$variant => f.write_str(stringify!($variant)),)*
                    Self::Unknown(v) => write!(f, "Unknown({v})"),
                }
            }
        }
    };
}

error_code! {
    /// Allocating an options handle.
    pub enum ErrOptionsNew {
        /// Success.
        Ok = sys::TOX_ERR_OPTIONS_NEW_OK,
        /// Out of memory.
        Malloc = sys::TOX_ERR_OPTIONS_NEW_MALLOC,
    }
}

error_code! {
    /// Creating a session.
    pub enum ErrNew {
        /// Success.
        Ok = sys::TOX_ERR_NEW_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_NEW_NULL,
        /// Out of memory.
        Malloc = sys::TOX_ERR_NEW_MALLOC,
        /// No port in the configured range could be bound.
        PortAlloc = sys::TOX_ERR_NEW_PORT_ALLOC,
        /// Invalid proxy type.
        ProxyBadType = sys::TOX_ERR_NEW_PROXY_BAD_TYPE,
        /// Proxy host could not be parsed.
        ProxyBadHost = sys::TOX_ERR_NEW_PROXY_BAD_HOST,
        /// Proxy port out of range.
        ProxyBadPort = sys::TOX_ERR_NEW_PROXY_BAD_PORT,
        /// Proxy host could not be resolved.
        ProxyNotFound = sys::TOX_ERR_NEW_PROXY_NOT_FOUND,
        /// The save data is encrypted.
        LoadEncrypted = sys::TOX_ERR_NEW_LOAD_ENCRYPTED,
        /// The save data was only partially understood.
        LoadBadFormat = sys::TOX_ERR_NEW_LOAD_BAD_FORMAT,
    }
}

error_code! {
    /// Bootstrapping and adding TCP relays.
    pub enum ErrBootstrap {
        /// Success.
        Ok = sys::TOX_ERR_BOOTSTRAP_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_BOOTSTRAP_NULL,
        /// The host could not be resolved.
        BadHost = sys::TOX_ERR_BOOTSTRAP_BAD_HOST,
        /// The port was zero.
        BadPort = sys::TOX_ERR_BOOTSTRAP_BAD_PORT,
    }
}

error_code! {
    /// Setting own name or status message.
    pub enum ErrSetInfo {
        /// Success.
        Ok = sys::TOX_ERR_SET_INFO_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_SET_INFO_NULL,
        /// Value exceeds the maximum length.
        TooLong = sys::TOX_ERR_SET_INFO_TOO_LONG,
    }
}

error_code! {
    /// Adding a friend.
    pub enum ErrFriendAdd {
        /// Success.
        Ok = sys::TOX_ERR_FRIEND_ADD_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_FRIEND_ADD_NULL,
        /// Request message too long.
        TooLong = sys::TOX_ERR_FRIEND_ADD_TOO_LONG,
        /// Request message empty.
        NoMessage = sys::TOX_ERR_FRIEND_ADD_NO_MESSAGE,
        /// The address is our own.
        OwnKey = sys::TOX_ERR_FRIEND_ADD_OWN_KEY,
        /// A request was already sent or the friend exists.
        AlreadySent = sys::TOX_ERR_FRIEND_ADD_ALREADY_SENT,
        /// Address checksum mismatch.
        BadChecksum = sys::TOX_ERR_FRIEND_ADD_BAD_CHECKSUM,
        /// Known friend with a different nospam.
        SetNewNospam = sys::TOX_ERR_FRIEND_ADD_SET_NEW_NOSPAM,
        /// Out of memory.
        Malloc = sys::TOX_ERR_FRIEND_ADD_MALLOC,
    }
}

error_code! {
    /// Deleting a friend.
    pub enum ErrFriendDelete {
        /// Success.
        Ok = sys::TOX_ERR_FRIEND_DELETE_OK,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FRIEND_DELETE_FRIEND_NOT_FOUND,
    }
}

error_code! {
    /// Looking up a friend by public key.
    pub enum ErrFriendByPublicKey {
        /// Success.
        Ok = sys::TOX_ERR_FRIEND_BY_PUBLIC_KEY_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_FRIEND_BY_PUBLIC_KEY_NULL,
        /// No friend with this key.
        NotFound = sys::TOX_ERR_FRIEND_BY_PUBLIC_KEY_NOT_FOUND,
    }
}

error_code! {
    /// Reading a friend's public key.
    pub enum ErrFriendGetPublicKey {
        /// Success.
        Ok = sys::TOX_ERR_FRIEND_GET_PUBLIC_KEY_OK,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FRIEND_GET_PUBLIC_KEY_FRIEND_NOT_FOUND,
    }
}

error_code! {
    /// Reading a friend's last-online time.
    pub enum ErrFriendGetLastOnline {
        /// Success.
        Ok = sys::TOX_ERR_FRIEND_GET_LAST_ONLINE_OK,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FRIEND_GET_LAST_ONLINE_FRIEND_NOT_FOUND,
    }
}

error_code! {
    /// Querying friend state.
    pub enum ErrFriendQuery {
        /// Success.
        Ok = sys::TOX_ERR_FRIEND_QUERY_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_FRIEND_QUERY_NULL,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FRIEND_QUERY_FRIEND_NOT_FOUND,
    }
}

error_code! {
    /// Setting own typing state.
    pub enum ErrSetTyping {
        /// Success.
        Ok = sys::TOX_ERR_SET_TYPING_OK,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_SET_TYPING_FRIEND_NOT_FOUND,
    }
}

error_code! {
    /// Sending a friend message.
    pub enum ErrFriendSendMessage {
        /// Success.
        Ok = sys::TOX_ERR_FRIEND_SEND_MESSAGE_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_FRIEND_SEND_MESSAGE_NULL,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FRIEND_SEND_MESSAGE_FRIEND_NOT_FOUND,
        /// Friend is offline.
        FriendNotConnected = sys::TOX_ERR_FRIEND_SEND_MESSAGE_FRIEND_NOT_CONNECTED,
        /// Send queue full.
        Sendq = sys::TOX_ERR_FRIEND_SEND_MESSAGE_SENDQ,
        /// Message too long.
        TooLong = sys::TOX_ERR_FRIEND_SEND_MESSAGE_TOO_LONG,
        /// Message empty.
        Empty = sys::TOX_ERR_FRIEND_SEND_MESSAGE_EMPTY,
    }
}

error_code! {
    /// Controlling a file transfer.
    pub enum ErrFileControl {
        /// Success.
        Ok = sys::TOX_ERR_FILE_CONTROL_OK,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FILE_CONTROL_FRIEND_NOT_FOUND,
        /// Friend is offline.
        FriendNotConnected = sys::TOX_ERR_FILE_CONTROL_FRIEND_NOT_CONNECTED,
        /// No such transfer.
        NotFound = sys::TOX_ERR_FILE_CONTROL_NOT_FOUND,
        /// Resume requested on a transfer that is not paused.
        NotPaused = sys::TOX_ERR_FILE_CONTROL_NOT_PAUSED,
        /// Paused by the other side.
        Denied = sys::TOX_ERR_FILE_CONTROL_DENIED,
        /// Already paused.
        AlreadyPaused = sys::TOX_ERR_FILE_CONTROL_ALREADY_PAUSED,
        /// Send queue full.
        Sendq = sys::TOX_ERR_FILE_CONTROL_SENDQ,
    }
}

error_code! {
    /// Seeking an incoming file transfer.
    pub enum ErrFileSeek {
        /// Success.
        Ok = sys::TOX_ERR_FILE_SEEK_OK,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FILE_SEEK_FRIEND_NOT_FOUND,
        /// Friend is offline.
        FriendNotConnected = sys::TOX_ERR_FILE_SEEK_FRIEND_NOT_CONNECTED,
        /// No such transfer.
        NotFound = sys::TOX_ERR_FILE_SEEK_NOT_FOUND,
        /// Transfer already running.
        Denied = sys::TOX_ERR_FILE_SEEK_DENIED,
        /// Position beyond the file size.
        InvalidPosition = sys::TOX_ERR_FILE_SEEK_INVALID_POSITION,
        /// Send queue full.
        Sendq = sys::TOX_ERR_FILE_SEEK_SENDQ,
    }
}

error_code! {
    /// Reading a file id.
    pub enum ErrFileGet {
        /// Success.
        Ok = sys::TOX_ERR_FILE_GET_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_FILE_GET_NULL,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FILE_GET_FRIEND_NOT_FOUND,
        /// No such transfer.
        NotFound = sys::TOX_ERR_FILE_GET_NOT_FOUND,
    }
}

error_code! {
    /// Offering a file.
    pub enum ErrFileSend {
        /// Success.
        Ok = sys::TOX_ERR_FILE_SEND_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_FILE_SEND_NULL,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FILE_SEND_FRIEND_NOT_FOUND,
        /// Friend is offline.
        FriendNotConnected = sys::TOX_ERR_FILE_SEND_FRIEND_NOT_CONNECTED,
        /// File name too long.
        NameTooLong = sys::TOX_ERR_FILE_SEND_NAME_TOO_LONG,
        /// Too many concurrent transfers.
        TooMany = sys::TOX_ERR_FILE_SEND_TOO_MANY,
    }
}

error_code! {
    /// Sending a file chunk.
    pub enum ErrFileSendChunk {
        /// Success.
        Ok = sys::TOX_ERR_FILE_SEND_CHUNK_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_FILE_SEND_CHUNK_NULL,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FILE_SEND_CHUNK_FRIEND_NOT_FOUND,
        /// Friend is offline.
        FriendNotConnected = sys::TOX_ERR_FILE_SEND_CHUNK_FRIEND_NOT_CONNECTED,
        /// No such transfer.
        NotFound = sys::TOX_ERR_FILE_SEND_CHUNK_NOT_FOUND,
        /// Transfer is paused or not started.
        NotTransferring = sys::TOX_ERR_FILE_SEND_CHUNK_NOT_TRANSFERRING,
        /// Chunk length does not match the request.
        InvalidLength = sys::TOX_ERR_FILE_SEND_CHUNK_INVALID_LENGTH,
        /// Send queue full.
        Sendq = sys::TOX_ERR_FILE_SEND_CHUNK_SENDQ,
        /// Position does not match the request.
        WrongPosition = sys::TOX_ERR_FILE_SEND_CHUNK_WRONG_POSITION,
    }
}

error_code! {
    /// Creating a conference.
    pub enum ErrConferenceNew {
        /// Success.
        Ok = sys::TOX_ERR_CONFERENCE_NEW_OK,
        /// Instance could not be initialized.
        Init = sys::TOX_ERR_CONFERENCE_NEW_INIT,
    }
}

error_code! {
    /// Leaving a conference.
    pub enum ErrConferenceDelete {
        /// Success.
        Ok = sys::TOX_ERR_CONFERENCE_DELETE_OK,
        /// No such conference.
        ConferenceNotFound = sys::TOX_ERR_CONFERENCE_DELETE_CONFERENCE_NOT_FOUND,
    }
}

error_code! {
    /// Querying conference peers.
    pub enum ErrConferencePeerQuery {
        /// Success.
        Ok = sys::TOX_ERR_CONFERENCE_PEER_QUERY_OK,
        /// No such conference.
        ConferenceNotFound = sys::TOX_ERR_CONFERENCE_PEER_QUERY_CONFERENCE_NOT_FOUND,
        /// No such peer.
        PeerNotFound = sys::TOX_ERR_CONFERENCE_PEER_QUERY_PEER_NOT_FOUND,
        /// Not connected to the conference.
        NoConnection = sys::TOX_ERR_CONFERENCE_PEER_QUERY_NO_CONNECTION,
    }
}

error_code! {
    /// Inviting a friend to a conference.
    pub enum ErrConferenceInvite {
        /// Success.
        Ok = sys::TOX_ERR_CONFERENCE_INVITE_OK,
        /// No such conference.
        ConferenceNotFound = sys::TOX_ERR_CONFERENCE_INVITE_CONFERENCE_NOT_FOUND,
        /// Invite packet not sent.
        FailSend = sys::TOX_ERR_CONFERENCE_INVITE_FAIL_SEND,
        /// Not connected to the conference.
        NoConnection = sys::TOX_ERR_CONFERENCE_INVITE_NO_CONNECTION,
    }
}

error_code! {
    /// Joining a conference from an invite cookie.
    pub enum ErrConferenceJoin {
        /// Success.
        Ok = sys::TOX_ERR_CONFERENCE_JOIN_OK,
        /// Cookie has the wrong length.
        InvalidLength = sys::TOX_ERR_CONFERENCE_JOIN_INVALID_LENGTH,
        /// Unsupported conference type.
        WrongType = sys::TOX_ERR_CONFERENCE_JOIN_WRONG_TYPE,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_CONFERENCE_JOIN_FRIEND_NOT_FOUND,
        /// Already in this conference.
        Duplicate = sys::TOX_ERR_CONFERENCE_JOIN_DUPLICATE,
        /// Instance could not be initialized.
        InitFail = sys::TOX_ERR_CONFERENCE_JOIN_INIT_FAIL,
        /// Join packet not sent.
        FailSend = sys::TOX_ERR_CONFERENCE_JOIN_FAIL_SEND,
    }
}

error_code! {
    /// Sending a conference message.
    pub enum ErrConferenceSendMessage {
        /// Success.
        Ok = sys::TOX_ERR_CONFERENCE_SEND_MESSAGE_OK,
        /// No such conference.
        ConferenceNotFound = sys::TOX_ERR_CONFERENCE_SEND_MESSAGE_CONFERENCE_NOT_FOUND,
        /// Message too long.
        TooLong = sys::TOX_ERR_CONFERENCE_SEND_MESSAGE_TOO_LONG,
        /// Not connected to the conference.
        NoConnection = sys::TOX_ERR_CONFERENCE_SEND_MESSAGE_NO_CONNECTION,
        /// Packet not sent.
        FailSend = sys::TOX_ERR_CONFERENCE_SEND_MESSAGE_FAIL_SEND,
    }
}

error_code! {
    /// Reading or setting a conference title.
    pub enum ErrConferenceTitle {
        /// Success.
        Ok = sys::TOX_ERR_CONFERENCE_TITLE_OK,
        /// No such conference.
        ConferenceNotFound = sys::TOX_ERR_CONFERENCE_TITLE_CONFERENCE_NOT_FOUND,
        /// Title too long or empty.
        InvalidLength = sys::TOX_ERR_CONFERENCE_TITLE_INVALID_LENGTH,
        /// Title packet not sent.
        FailSend = sys::TOX_ERR_CONFERENCE_TITLE_FAIL_SEND,
    }
}

error_code! {
    /// Reading a conference type.
    pub enum ErrConferenceGetType {
        /// Success.
        Ok = sys::TOX_ERR_CONFERENCE_GET_TYPE_OK,
        /// No such conference.
        ConferenceNotFound = sys::TOX_ERR_CONFERENCE_GET_TYPE_CONFERENCE_NOT_FOUND,
    }
}

error_code! {
    /// Sending a custom packet.
    pub enum ErrFriendCustomPacket {
        /// Success.
        Ok = sys::TOX_ERR_FRIEND_CUSTOM_PACKET_OK,
        /// A required argument was null.
        Null = sys::TOX_ERR_FRIEND_CUSTOM_PACKET_NULL,
        /// No such friend.
        FriendNotFound = sys::TOX_ERR_FRIEND_CUSTOM_PACKET_FRIEND_NOT_FOUND,
        /// Friend is offline.
        FriendNotConnected = sys::TOX_ERR_FRIEND_CUSTOM_PACKET_FRIEND_NOT_CONNECTED,
        /// First byte outside the custom packet ranges.
        Invalid = sys::TOX_ERR_FRIEND_CUSTOM_PACKET_INVALID,
        /// Packet empty.
        Empty = sys::TOX_ERR_FRIEND_CUSTOM_PACKET_EMPTY,
        /// Packet too long.
        TooLong = sys::TOX_ERR_FRIEND_CUSTOM_PACKET_TOO_LONG,
        /// Send queue full.
        Sendq = sys::TOX_ERR_FRIEND_CUSTOM_PACKET_SENDQ,
    }
}

error_code! {
    /// Reading a bound port.
    pub enum ErrGetPort {
        /// Success.
        Ok = sys::TOX_ERR_GET_PORT_OK,
        /// The socket is not bound.
        NotBound = sys::TOX_ERR_GET_PORT_NOT_BOUND,
    }
}
