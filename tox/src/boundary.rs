//! The seam between the safe layer and toxcore.
//!
//! [`Boundary`] mirrors the C entry points one method per function, with the
//! error out-parameter typed and raw enum returns left as `u32`. The
//! [`Session`](crate::Session) only ever reaches the library through it: the
//! native backend calls `libtoxcore`, tests substitute an in-memory fake.
//!
//! Fill methods receive a buffer sized from the matching size query and
//! return `false` without touching the library if it is too small.

use std::ffi::c_void;

use crate::bridge::Trampolines;
use crate::code::{
    ErrBootstrap, ErrConferenceDelete, ErrConferenceGetType, ErrConferenceInvite,
    ErrConferenceJoin, ErrConferenceNew, ErrConferencePeerQuery, ErrConferenceSendMessage,
    ErrConferenceTitle, ErrFileControl, ErrFileGet, ErrFileSeek, ErrFileSend, ErrFileSendChunk,
    ErrFriendAdd, ErrFriendByPublicKey, ErrFriendCustomPacket, ErrFriendDelete,
    ErrFriendGetLastOnline, ErrFriendGetPublicKey, ErrFriendQuery, ErrFriendSendMessage,
    ErrGetPort, ErrNew, ErrSetInfo, ErrSetTyping,
};
use crate::options::Options;
use crate::types::{
    Address, FileControl, FileId, Hash, MessageType, PublicKey, SecretKey, UserStatus,
};

/// One implementation of the toxcore C API.
pub trait Boundary {
    /// The owned session instance (`Tox *`). Dropping it kills the instance.
    type Handle;

    /// `tox_version_major` / `_minor` / `_patch`.
    fn version(&self) -> (u32, u32, u32);
    /// `tox_version_is_compatible`.
    fn is_compatible(&self, major: u32, minor: u32, patch: u32) -> bool;
    /// `tox_hash`.
    fn hash(&self, data: &[u8]) -> Option<Hash>;

    /// `tox_new`, loading `savedata` when given.
    fn create(
        &self,
        options: &Options,
        savedata: Option<&[u8]>,
        error: &mut ErrNew,
    ) -> Option<Self::Handle>;
    /// Register every entry of `trampolines` with the instance.
    fn register_callbacks(&self, tox: &mut Self::Handle, trampolines: &Trampolines);
    /// `tox_iterate`. Callbacks fire synchronously and receive `user_data`.
    fn iterate(&self, tox: &mut Self::Handle, user_data: *mut c_void);
    /// `tox_iteration_interval`, in milliseconds.
    fn iteration_interval(&self, tox: &Self::Handle) -> u32;
    /// `tox_get_savedata_size`.
    fn savedata_size(&self, tox: &Self::Handle) -> usize;
    /// `tox_get_savedata`.
    fn savedata(&self, tox: &Self::Handle, out: &mut [u8]) -> bool;

    /// `tox_bootstrap`.
    fn bootstrap(
        &self,
        tox: &mut Self::Handle,
        host: &str,
        port: u16,
        public_key: &PublicKey,
        error: &mut ErrBootstrap,
    ) -> bool;
    /// `tox_add_tcp_relay`.
    fn add_tcp_relay(
        &self,
        tox: &mut Self::Handle,
        host: &str,
        port: u16,
        public_key: &PublicKey,
        error: &mut ErrBootstrap,
    ) -> bool;
    /// `tox_self_get_connection_status`.
    fn connection_status(&self, tox: &Self::Handle) -> u32;

    /// `tox_self_get_address`.
    fn self_address(&self, tox: &Self::Handle) -> Address;
    /// `tox_self_get_nospam`.
    fn self_nospam(&self, tox: &Self::Handle) -> u32;
    /// `tox_self_set_nospam`.
    fn set_self_nospam(&self, tox: &mut Self::Handle, nospam: u32);
    /// `tox_self_get_public_key`.
    fn self_public_key(&self, tox: &Self::Handle) -> PublicKey;
    /// `tox_self_get_secret_key`.
    fn self_secret_key(&self, tox: &Self::Handle) -> SecretKey;
    /// `tox_self_get_dht_id`.
    fn self_dht_id(&self, tox: &Self::Handle) -> PublicKey;
    /// `tox_self_set_name`.
    fn set_self_name(&self, tox: &mut Self::Handle, name: &[u8], error: &mut ErrSetInfo) -> bool;
    /// `tox_self_get_name_size`.
    fn self_name_size(&self, tox: &Self::Handle) -> usize;
    /// `tox_self_get_name`.
    fn self_name(&self, tox: &Self::Handle, out: &mut [u8]) -> bool;
    /// `tox_self_set_status_message`.
    fn set_self_status_message(
        &self,
        tox: &mut Self::Handle,
        message: &[u8],
        error: &mut ErrSetInfo,
    ) -> bool;
    /// `tox_self_get_status_message_size`.
    fn self_status_message_size(&self, tox: &Self::Handle) -> usize;
    /// `tox_self_get_status_message`.
    fn self_status_message(&self, tox: &Self::Handle, out: &mut [u8]) -> bool;
    /// `tox_self_set_status`.
    fn set_self_status(&self, tox: &mut Self::Handle, status: UserStatus);
    /// `tox_self_get_status`.
    fn self_status(&self, tox: &Self::Handle) -> u32;
    /// `tox_self_get_udp_port`.
    fn self_udp_port(&self, tox: &Self::Handle, error: &mut ErrGetPort) -> u16;
    /// `tox_self_get_tcp_port`.
    fn self_tcp_port(&self, tox: &Self::Handle, error: &mut ErrGetPort) -> u16;

    /// `tox_friend_add`.
    fn friend_add(
        &self,
        tox: &mut Self::Handle,
        address: &Address,
        message: &[u8],
        error: &mut ErrFriendAdd,
    ) -> u32;
    /// `tox_friend_add_norequest`.
    fn friend_add_norequest(
        &self,
        tox: &mut Self::Handle,
        public_key: &PublicKey,
        error: &mut ErrFriendAdd,
    ) -> u32;
    /// `tox_friend_delete`.
    fn friend_delete(&self, tox: &mut Self::Handle, friend: u32, error: &mut ErrFriendDelete)
    -> bool;
    /// `tox_friend_by_public_key`.
    fn friend_by_public_key(
        &self,
        tox: &Self::Handle,
        public_key: &PublicKey,
        error: &mut ErrFriendByPublicKey,
    ) -> u32;
    /// `tox_friend_exists`.
    fn friend_exists(&self, tox: &Self::Handle, friend: u32) -> bool;
    /// `tox_self_get_friend_list_size`.
    fn friend_list_size(&self, tox: &Self::Handle) -> usize;
    /// `tox_self_get_friend_list`.
    fn friend_list(&self, tox: &Self::Handle, out: &mut [u32]) -> bool;
    /// `tox_friend_get_public_key`.
    fn friend_public_key(
        &self,
        tox: &Self::Handle,
        friend: u32,
        error: &mut ErrFriendGetPublicKey,
    ) -> PublicKey;
    /// `tox_friend_get_last_online`, seconds since the Unix epoch.
    fn friend_last_online(
        &self,
        tox: &Self::Handle,
        friend: u32,
        error: &mut ErrFriendGetLastOnline,
    ) -> u64;
    /// `tox_friend_get_name_size`.
    fn friend_name_size(&self, tox: &Self::Handle, friend: u32, error: &mut ErrFriendQuery)
    -> usize;
    /// `tox_friend_get_name`.
    fn friend_name(
        &self,
        tox: &Self::Handle,
        friend: u32,
        out: &mut [u8],
        error: &mut ErrFriendQuery,
    ) -> bool;
    /// `tox_friend_get_status_message_size`.
    fn friend_status_message_size(
        &self,
        tox: &Self::Handle,
        friend: u32,
        error: &mut ErrFriendQuery,
    ) -> usize;
    /// `tox_friend_get_status_message`.
    fn friend_status_message(
        &self,
        tox: &Self::Handle,
        friend: u32,
        out: &mut [u8],
        error: &mut ErrFriendQuery,
    ) -> bool;
    /// `tox_friend_get_status`.
    fn friend_status(&self, tox: &Self::Handle, friend: u32, error: &mut ErrFriendQuery) -> u32;
    /// `tox_friend_get_connection_status`.
    fn friend_connection_status(
        &self,
        tox: &Self::Handle,
        friend: u32,
        error: &mut ErrFriendQuery,
    ) -> u32;
    /// `tox_friend_get_typing`.
    fn friend_typing(&self, tox: &Self::Handle, friend: u32, error: &mut ErrFriendQuery) -> bool;
    /// `tox_self_set_typing`.
    fn set_typing(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        typing: bool,
        error: &mut ErrSetTyping,
    ) -> bool;
    /// `tox_friend_send_message`.
    fn friend_send_message(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        kind: MessageType,
        message: &[u8],
        error: &mut ErrFriendSendMessage,
    ) -> u32;

    /// `tox_file_control`.
    fn file_control(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        file: u32,
        control: FileControl,
        error: &mut ErrFileControl,
    ) -> bool;
    /// `tox_file_seek`.
    fn file_seek(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        file: u32,
        position: u64,
        error: &mut ErrFileSeek,
    ) -> bool;
    /// `tox_file_get_file_id`.
    fn file_id(&self, tox: &Self::Handle, friend: u32, file: u32, error: &mut ErrFileGet)
    -> FileId;
    /// `tox_file_send`. A missing `file_id` lets the library pick one.
    #[allow(clippy::too_many_arguments)]
    fn file_send(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        kind: u32,
        size: u64,
        file_id: Option<&FileId>,
        filename: &[u8],
        error: &mut ErrFileSend,
    ) -> u32;
    /// `tox_file_send_chunk`.
    fn file_send_chunk(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        file: u32,
        position: u64,
        data: &[u8],
        error: &mut ErrFileSendChunk,
    ) -> bool;

    /// `tox_conference_new`.
    fn conference_new(&self, tox: &mut Self::Handle, error: &mut ErrConferenceNew) -> u32;
    /// `tox_conference_delete`.
    fn conference_delete(
        &self,
        tox: &mut Self::Handle,
        conference: u32,
        error: &mut ErrConferenceDelete,
    ) -> bool;
    /// `tox_conference_peer_count`.
    fn conference_peer_count(
        &self,
        tox: &Self::Handle,
        conference: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> u32;
    /// `tox_conference_peer_get_name_size`.
    fn conference_peer_name_size(
        &self,
        tox: &Self::Handle,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> usize;
    /// `tox_conference_peer_get_name`.
    fn conference_peer_name(
        &self,
        tox: &Self::Handle,
        conference: u32,
        peer: u32,
        out: &mut [u8],
        error: &mut ErrConferencePeerQuery,
    ) -> bool;
    /// `tox_conference_peer_get_public_key`.
    fn conference_peer_public_key(
        &self,
        tox: &Self::Handle,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> PublicKey;
    /// `tox_conference_peer_number_is_ours`.
    fn conference_peer_is_ours(
        &self,
        tox: &Self::Handle,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> bool;
    /// `tox_conference_invite`.
    fn conference_invite(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        conference: u32,
        error: &mut ErrConferenceInvite,
    ) -> bool;
    /// `tox_conference_join`.
    fn conference_join(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        cookie: &[u8],
        error: &mut ErrConferenceJoin,
    ) -> u32;
    /// `tox_conference_send_message`.
    fn conference_send_message(
        &self,
        tox: &mut Self::Handle,
        conference: u32,
        kind: MessageType,
        message: &[u8],
        error: &mut ErrConferenceSendMessage,
    ) -> bool;
    /// `tox_conference_get_title_size`.
    fn conference_title_size(
        &self,
        tox: &Self::Handle,
        conference: u32,
        error: &mut ErrConferenceTitle,
    ) -> usize;
    /// `tox_conference_get_title`.
    fn conference_title(
        &self,
        tox: &Self::Handle,
        conference: u32,
        out: &mut [u8],
        error: &mut ErrConferenceTitle,
    ) -> bool;
    /// `tox_conference_set_title`.
    fn conference_set_title(
        &self,
        tox: &mut Self::Handle,
        conference: u32,
        title: &[u8],
        error: &mut ErrConferenceTitle,
    ) -> bool;
    /// `tox_conference_get_chatlist_size`.
    fn conference_list_size(&self, tox: &Self::Handle) -> usize;
    /// `tox_conference_get_chatlist`.
    fn conference_list(&self, tox: &Self::Handle, out: &mut [u32]) -> bool;
    /// `tox_conference_get_type`.
    fn conference_type(
        &self,
        tox: &Self::Handle,
        conference: u32,
        error: &mut ErrConferenceGetType,
    ) -> u32;

    /// `tox_friend_send_lossy_packet`.
    fn send_lossy_packet(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        data: &[u8],
        error: &mut ErrFriendCustomPacket,
    ) -> bool;
    /// `tox_friend_send_lossless_packet`.
    fn send_lossless_packet(
        &self,
        tox: &mut Self::Handle,
        friend: u32,
        data: &[u8],
        error: &mut ErrFriendCustomPacket,
    ) -> bool;
}
