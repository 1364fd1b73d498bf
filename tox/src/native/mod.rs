#![allow(unsafe_code)]
//! The native backend: [`Boundary`] over `libtoxcore`.

mod ffi;
mod options;

use std::ffi::c_void;

use tox_sys as sys;

pub use ffi::OwnedHandle;
use ffi::{opt_ptr, to_c_string, with_code};
use options::RawOptions;

use crate::boundary::Boundary;
use crate::bridge::Trampolines;
use crate::code::{
    ErrBootstrap, ErrConferenceDelete, ErrConferenceGetType, ErrConferenceInvite,
    ErrConferenceJoin, ErrConferenceNew, ErrConferencePeerQuery, ErrConferenceSendMessage,
    ErrConferenceTitle, ErrFileControl, ErrFileGet, ErrFileSeek, ErrFileSend, ErrFileSendChunk,
    ErrFriendAdd, ErrFriendByPublicKey, ErrFriendCustomPacket, ErrFriendDelete,
    ErrFriendGetLastOnline, ErrFriendGetPublicKey, ErrFriendQuery, ErrFriendSendMessage,
    ErrGetPort, ErrNew, ErrSetInfo, ErrSetTyping, ErrorCode,
};
use crate::options::Options;
use crate::session::Session;
use crate::types::{
    ADDRESS_SIZE, Address, FileControl, FileId, HASH_LENGTH, Hash, MessageType, PUBLIC_KEY_SIZE,
    PublicKey, SECRET_KEY_SIZE, SecretKey, UserStatus,
};

/// A session backed by `libtoxcore`.
pub type NativeSession = Session<NativeTox>;

/// Calls straight into `libtoxcore`.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeTox;

type Tox = OwnedHandle<sys::Tox>;

/// Whether the size query succeeded and `out` can hold its result.
fn fits<E: ErrorCode>(out: &[u8], size: usize, error: &E) -> bool {
    error.is_ok() && out.len() >= size
}

impl Boundary for NativeTox {
    type Handle = Tox;

    fn version(&self) -> (u32, u32, u32) {
        unsafe {
            (
                sys::tox_version_major(),
                sys::tox_version_minor(),
                sys::tox_version_patch(),
            )
        }
    }

    fn is_compatible(&self, major: u32, minor: u32, patch: u32) -> bool {
        unsafe { sys::tox_version_is_compatible(major, minor, patch) }
    }

    fn hash(&self, data: &[u8]) -> Option<Hash> {
        let mut out = [0_u8; HASH_LENGTH];
        unsafe { sys::tox_hash(out.as_mut_ptr(), data.as_ptr(), data.len()) }
            .then(|| Hash::from_bytes(out))
    }

    fn create(
        &self,
        options: &Options,
        savedata: Option<&[u8]>,
        error: &mut ErrNew,
    ) -> Option<Tox> {
        let raw = match RawOptions::build(options, savedata) {
            Ok(raw) => raw,
            Err(code) => {
                *error = code;
                return None;
            }
        };
        let ptr = with_code(error, |e| unsafe { sys::tox_new(raw.as_ptr(), e) });
        OwnedHandle::new(ptr, sys::tox_kill)
    }

    fn register_callbacks(&self, tox: &mut Tox, t: &Trampolines) {
        let tox = tox.as_mut_ptr();
        unsafe {
            sys::tox_callback_self_connection_status(tox, t.self_connection_status);
            sys::tox_callback_friend_name(tox, t.friend_name);
            sys::tox_callback_friend_status_message(tox, t.friend_status_message);
            sys::tox_callback_friend_status(tox, t.friend_status);
            sys::tox_callback_friend_connection_status(tox, t.friend_connection_status);
            sys::tox_callback_friend_typing(tox, t.friend_typing);
            sys::tox_callback_friend_read_receipt(tox, t.friend_read_receipt);
            sys::tox_callback_friend_request(tox, t.friend_request);
            sys::tox_callback_friend_message(tox, t.friend_message);
            sys::tox_callback_file_recv_control(tox, t.file_recv_control);
            sys::tox_callback_file_chunk_request(tox, t.file_chunk_request);
            sys::tox_callback_file_recv(tox, t.file_recv);
            sys::tox_callback_file_recv_chunk(tox, t.file_recv_chunk);
            sys::tox_callback_conference_invite(tox, t.conference_invite);
            sys::tox_callback_conference_connected(tox, t.conference_connected);
            sys::tox_callback_conference_message(tox, t.conference_message);
            sys::tox_callback_conference_title(tox, t.conference_title);
            sys::tox_callback_conference_peer_name(tox, t.conference_peer_name);
            sys::tox_callback_conference_peer_list_changed(tox, t.conference_peer_list_changed);
            sys::tox_callback_friend_lossy_packet(tox, t.friend_lossy_packet);
            sys::tox_callback_friend_lossless_packet(tox, t.friend_lossless_packet);
        }
    }

    fn iterate(&self, tox: &mut Tox, user_data: *mut c_void) {
        unsafe { sys::tox_iterate(tox.as_mut_ptr(), user_data) };
    }

    fn iteration_interval(&self, tox: &Tox) -> u32 {
        unsafe { sys::tox_iteration_interval(tox.as_ptr()) }
    }

    fn savedata_size(&self, tox: &Tox) -> usize {
        unsafe { sys::tox_get_savedata_size(tox.as_ptr()) }
    }

    fn savedata(&self, tox: &Tox, out: &mut [u8]) -> bool {
        if out.len() < self.savedata_size(tox) {
            return false;
        }
        unsafe { sys::tox_get_savedata(tox.as_ptr(), out.as_mut_ptr()) };
        true
    }

    fn bootstrap(
        &self,
        tox: &mut Tox,
        host: &str,
        port: u16,
        public_key: &PublicKey,
        error: &mut ErrBootstrap,
    ) -> bool {
        let Some(host) = to_c_string(host) else {
            *error = ErrBootstrap::BadHost;
            return false;
        };
        with_code(error, |e| unsafe {
            sys::tox_bootstrap(
                tox.as_mut_ptr(),
                host.as_ptr(),
                port,
                public_key.as_bytes().as_ptr(),
                e,
            )
        })
    }

    fn add_tcp_relay(
        &self,
        tox: &mut Tox,
        host: &str,
        port: u16,
        public_key: &PublicKey,
        error: &mut ErrBootstrap,
    ) -> bool {
        let Some(host) = to_c_string(host) else {
            *error = ErrBootstrap::BadHost;
            return false;
        };
        with_code(error, |e| unsafe {
            sys::tox_add_tcp_relay(
                tox.as_mut_ptr(),
                host.as_ptr(),
                port,
                public_key.as_bytes().as_ptr(),
                e,
            )
        })
    }

    fn connection_status(&self, tox: &Tox) -> u32 {
        unsafe { sys::tox_self_get_connection_status(tox.as_ptr()) }
    }

    fn self_address(&self, tox: &Tox) -> Address {
        let mut out = [0_u8; ADDRESS_SIZE];
        unsafe { sys::tox_self_get_address(tox.as_ptr(), out.as_mut_ptr()) };
        Address::from_bytes(out)
    }

    fn self_nospam(&self, tox: &Tox) -> u32 {
        unsafe { sys::tox_self_get_nospam(tox.as_ptr()) }
    }

    fn set_self_nospam(&self, tox: &mut Tox, nospam: u32) {
        unsafe { sys::tox_self_set_nospam(tox.as_mut_ptr(), nospam) };
    }

    fn self_public_key(&self, tox: &Tox) -> PublicKey {
        let mut out = [0_u8; PUBLIC_KEY_SIZE];
        unsafe { sys::tox_self_get_public_key(tox.as_ptr(), out.as_mut_ptr()) };
        PublicKey::from_bytes(out)
    }

    fn self_secret_key(&self, tox: &Tox) -> SecretKey {
        let mut out = [0_u8; SECRET_KEY_SIZE];
        unsafe { sys::tox_self_get_secret_key(tox.as_ptr(), out.as_mut_ptr()) };
        SecretKey::from_bytes(out)
    }

    fn self_dht_id(&self, tox: &Tox) -> PublicKey {
        let mut out = [0_u8; PUBLIC_KEY_SIZE];
        unsafe { sys::tox_self_get_dht_id(tox.as_ptr(), out.as_mut_ptr()) };
        PublicKey::from_bytes(out)
    }

    fn set_self_name(&self, tox: &mut Tox, name: &[u8], error: &mut ErrSetInfo) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_self_set_name(tox.as_mut_ptr(), name.as_ptr(), name.len(), e)
        })
    }

    fn self_name_size(&self, tox: &Tox) -> usize {
        unsafe { sys::tox_self_get_name_size(tox.as_ptr()) }
    }

    fn self_name(&self, tox: &Tox, out: &mut [u8]) -> bool {
        if out.len() < self.self_name_size(tox) {
            return false;
        }
        unsafe { sys::tox_self_get_name(tox.as_ptr(), out.as_mut_ptr()) };
        true
    }

    fn set_self_status_message(
        &self,
        tox: &mut Tox,
        message: &[u8],
        error: &mut ErrSetInfo,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_self_set_status_message(tox.as_mut_ptr(), message.as_ptr(), message.len(), e)
        })
    }

    fn self_status_message_size(&self, tox: &Tox) -> usize {
        unsafe { sys::tox_self_get_status_message_size(tox.as_ptr()) }
    }

    fn self_status_message(&self, tox: &Tox, out: &mut [u8]) -> bool {
        if out.len() < self.self_status_message_size(tox) {
            return false;
        }
        unsafe { sys::tox_self_get_status_message(tox.as_ptr(), out.as_mut_ptr()) };
        true
    }

    fn set_self_status(&self, tox: &mut Tox, status: UserStatus) {
        unsafe { sys::tox_self_set_status(tox.as_mut_ptr(), status.to_ffi()) };
    }

    fn self_status(&self, tox: &Tox) -> u32 {
        unsafe { sys::tox_self_get_status(tox.as_ptr()) }
    }

    fn self_udp_port(&self, tox: &Tox, error: &mut ErrGetPort) -> u16 {
        with_code(error, |e| unsafe { sys::tox_self_get_udp_port(tox.as_ptr(), e) })
    }

    fn self_tcp_port(&self, tox: &Tox, error: &mut ErrGetPort) -> u16 {
        with_code(error, |e| unsafe { sys::tox_self_get_tcp_port(tox.as_ptr(), e) })
    }

    fn friend_add(
        &self,
        tox: &mut Tox,
        address: &Address,
        message: &[u8],
        error: &mut ErrFriendAdd,
    ) -> u32 {
        with_code(error, |e| unsafe {
            sys::tox_friend_add(
                tox.as_mut_ptr(),
                address.as_bytes().as_ptr(),
                message.as_ptr(),
                message.len(),
                e,
            )
        })
    }

    fn friend_add_norequest(
        &self,
        tox: &mut Tox,
        public_key: &PublicKey,
        error: &mut ErrFriendAdd,
    ) -> u32 {
        with_code(error, |e| unsafe {
            sys::tox_friend_add_norequest(tox.as_mut_ptr(), public_key.as_bytes().as_ptr(), e)
        })
    }

    fn friend_delete(&self, tox: &mut Tox, friend: u32, error: &mut ErrFriendDelete) -> bool {
        with_code(error, |e| unsafe { sys::tox_friend_delete(tox.as_mut_ptr(), friend, e) })
    }

    fn friend_by_public_key(
        &self,
        tox: &Tox,
        public_key: &PublicKey,
        error: &mut ErrFriendByPublicKey,
    ) -> u32 {
        with_code(error, |e| unsafe {
            sys::tox_friend_by_public_key(tox.as_ptr(), public_key.as_bytes().as_ptr(), e)
        })
    }

    fn friend_exists(&self, tox: &Tox, friend: u32) -> bool {
        unsafe { sys::tox_friend_exists(tox.as_ptr(), friend) }
    }

    fn friend_list_size(&self, tox: &Tox) -> usize {
        unsafe { sys::tox_self_get_friend_list_size(tox.as_ptr()) }
    }

    fn friend_list(&self, tox: &Tox, out: &mut [u32]) -> bool {
        if out.len() < self.friend_list_size(tox) {
            return false;
        }
        unsafe { sys::tox_self_get_friend_list(tox.as_ptr(), out.as_mut_ptr()) };
        true
    }

    fn friend_public_key(
        &self,
        tox: &Tox,
        friend: u32,
        error: &mut ErrFriendGetPublicKey,
    ) -> PublicKey {
        let mut out = [0_u8; PUBLIC_KEY_SIZE];
        with_code(error, |e| unsafe {
            sys::tox_friend_get_public_key(tox.as_ptr(), friend, out.as_mut_ptr(), e)
        });
        PublicKey::from_bytes(out)
    }

    fn friend_last_online(
        &self,
        tox: &Tox,
        friend: u32,
        error: &mut ErrFriendGetLastOnline,
    ) -> u64 {
        with_code(error, |e| unsafe { sys::tox_friend_get_last_online(tox.as_ptr(), friend, e) })
    }

    fn friend_name_size(&self, tox: &Tox, friend: u32, error: &mut ErrFriendQuery) -> usize {
        with_code(error, |e| unsafe { sys::tox_friend_get_name_size(tox.as_ptr(), friend, e) })
    }

    fn friend_name(
        &self,
        tox: &Tox,
        friend: u32,
        out: &mut [u8],
        error: &mut ErrFriendQuery,
    ) -> bool {
        let size = self.friend_name_size(tox, friend, error);
        if !fits(out, size, error) {
            return false;
        }
        with_code(error, |e| unsafe {
            sys::tox_friend_get_name(tox.as_ptr(), friend, out.as_mut_ptr(), e)
        })
    }

    fn friend_status_message_size(
        &self,
        tox: &Tox,
        friend: u32,
        error: &mut ErrFriendQuery,
    ) -> usize {
        with_code(error, |e| unsafe {
            sys::tox_friend_get_status_message_size(tox.as_ptr(), friend, e)
        })
    }

    fn friend_status_message(
        &self,
        tox: &Tox,
        friend: u32,
        out: &mut [u8],
        error: &mut ErrFriendQuery,
    ) -> bool {
        let size = self.friend_status_message_size(tox, friend, error);
        if !fits(out, size, error) {
            return false;
        }
        with_code(error, |e| unsafe {
            sys::tox_friend_get_status_message(tox.as_ptr(), friend, out.as_mut_ptr(), e)
        })
    }

    fn friend_status(&self, tox: &Tox, friend: u32, error: &mut ErrFriendQuery) -> u32 {
        with_code(error, |e| unsafe { sys::tox_friend_get_status(tox.as_ptr(), friend, e) })
    }

    fn friend_connection_status(&self, tox: &Tox, friend: u32, error: &mut ErrFriendQuery) -> u32 {
        with_code(error, |e| unsafe {
            sys::tox_friend_get_connection_status(tox.as_ptr(), friend, e)
        })
    }

    fn friend_typing(&self, tox: &Tox, friend: u32, error: &mut ErrFriendQuery) -> bool {
        with_code(error, |e| unsafe { sys::tox_friend_get_typing(tox.as_ptr(), friend, e) })
    }

    fn set_typing(
        &self,
        tox: &mut Tox,
        friend: u32,
        typing: bool,
        error: &mut ErrSetTyping,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_self_set_typing(tox.as_mut_ptr(), friend, typing, e)
        })
    }

    fn friend_send_message(
        &self,
        tox: &mut Tox,
        friend: u32,
        kind: MessageType,
        message: &[u8],
        error: &mut ErrFriendSendMessage,
    ) -> u32 {
        with_code(error, |e| unsafe {
            sys::tox_friend_send_message(
                tox.as_mut_ptr(),
                friend,
                kind.to_ffi(),
                message.as_ptr(),
                message.len(),
                e,
            )
        })
    }

    fn file_control(
        &self,
        tox: &mut Tox,
        friend: u32,
        file: u32,
        control: FileControl,
        error: &mut ErrFileControl,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_file_control(tox.as_mut_ptr(), friend, file, control.to_ffi(), e)
        })
    }

    fn file_seek(
        &self,
        tox: &mut Tox,
        friend: u32,
        file: u32,
        position: u64,
        error: &mut ErrFileSeek,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_file_seek(tox.as_mut_ptr(), friend, file, position, e)
        })
    }

    fn file_id(&self, tox: &Tox, friend: u32, file: u32, error: &mut ErrFileGet) -> FileId {
        let mut out = [0_u8; FileId::LEN];
        with_code(error, |e| unsafe {
            sys::tox_file_get_file_id(tox.as_ptr(), friend, file, out.as_mut_ptr(), e)
        });
        FileId::from_bytes(out)
    }

    fn file_send(
        &self,
        tox: &mut Tox,
        friend: u32,
        kind: u32,
        size: u64,
        file_id: Option<&FileId>,
        filename: &[u8],
        error: &mut ErrFileSend,
    ) -> u32 {
        with_code(error, |e| unsafe {
            sys::tox_file_send(
                tox.as_mut_ptr(),
                friend,
                kind,
                size,
                opt_ptr(file_id),
                filename.as_ptr(),
                filename.len(),
                e,
            )
        })
    }

    fn file_send_chunk(
        &self,
        tox: &mut Tox,
        friend: u32,
        file: u32,
        position: u64,
        data: &[u8],
        error: &mut ErrFileSendChunk,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_file_send_chunk(
                tox.as_mut_ptr(),
                friend,
                file,
                position,
                data.as_ptr(),
                data.len(),
                e,
            )
        })
    }

    fn conference_new(&self, tox: &mut Tox, error: &mut ErrConferenceNew) -> u32 {
        with_code(error, |e| unsafe { sys::tox_conference_new(tox.as_mut_ptr(), e) })
    }

    fn conference_delete(
        &self,
        tox: &mut Tox,
        conference: u32,
        error: &mut ErrConferenceDelete,
    ) -> bool {
        with_code(error, |e| unsafe { sys::tox_conference_delete(tox.as_mut_ptr(), conference, e) })
    }

    fn conference_peer_count(
        &self,
        tox: &Tox,
        conference: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> u32 {
        with_code(error, |e| unsafe { sys::tox_conference_peer_count(tox.as_ptr(), conference, e) })
    }

    fn conference_peer_name_size(
        &self,
        tox: &Tox,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> usize {
        with_code(error, |e| unsafe {
            sys::tox_conference_peer_get_name_size(tox.as_ptr(), conference, peer, e)
        })
    }

    fn conference_peer_name(
        &self,
        tox: &Tox,
        conference: u32,
        peer: u32,
        out: &mut [u8],
        error: &mut ErrConferencePeerQuery,
    ) -> bool {
        let size = self.conference_peer_name_size(tox, conference, peer, error);
        if !fits(out, size, error) {
            return false;
        }
        with_code(error, |e| unsafe {
            sys::tox_conference_peer_get_name(tox.as_ptr(), conference, peer, out.as_mut_ptr(), e)
        })
    }

    fn conference_peer_public_key(
        &self,
        tox: &Tox,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> PublicKey {
        let mut out = [0_u8; PUBLIC_KEY_SIZE];
        with_code(error, |e| unsafe {
            sys::tox_conference_peer_get_public_key(
                tox.as_ptr(),
                conference,
                peer,
                out.as_mut_ptr(),
                e,
            )
        });
        PublicKey::from_bytes(out)
    }

    fn conference_peer_is_ours(
        &self,
        tox: &Tox,
        conference: u32,
        peer: u32,
        error: &mut ErrConferencePeerQuery,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_conference_peer_number_is_ours(tox.as_ptr(), conference, peer, e)
        })
    }

    fn conference_invite(
        &self,
        tox: &mut Tox,
        friend: u32,
        conference: u32,
        error: &mut ErrConferenceInvite,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_conference_invite(tox.as_mut_ptr(), friend, conference, e)
        })
    }

    fn conference_join(
        &self,
        tox: &mut Tox,
        friend: u32,
        cookie: &[u8],
        error: &mut ErrConferenceJoin,
    ) -> u32 {
        with_code(error, |e| unsafe {
            sys::tox_conference_join(tox.as_mut_ptr(), friend, cookie.as_ptr(), cookie.len(), e)
        })
    }

    fn conference_send_message(
        &self,
        tox: &mut Tox,
        conference: u32,
        kind: MessageType,
        message: &[u8],
        error: &mut ErrConferenceSendMessage,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_conference_send_message(
                tox.as_mut_ptr(),
                conference,
                kind.to_ffi(),
                message.as_ptr(),
                message.len(),
                e,
            )
        })
    }

    fn conference_title_size(
        &self,
        tox: &Tox,
        conference: u32,
        error: &mut ErrConferenceTitle,
    ) -> usize {
        with_code(error, |e| unsafe {
            sys::tox_conference_get_title_size(tox.as_ptr(), conference, e)
        })
    }

    fn conference_title(
        &self,
        tox: &Tox,
        conference: u32,
        out: &mut [u8],
        error: &mut ErrConferenceTitle,
    ) -> bool {
        let size = self.conference_title_size(tox, conference, error);
        if !fits(out, size, error) {
            return false;
        }
        with_code(error, |e| unsafe {
            sys::tox_conference_get_title(tox.as_ptr(), conference, out.as_mut_ptr(), e)
        })
    }

    fn conference_set_title(
        &self,
        tox: &mut Tox,
        conference: u32,
        title: &[u8],
        error: &mut ErrConferenceTitle,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_conference_set_title(
                tox.as_mut_ptr(),
                conference,
                title.as_ptr(),
                title.len(),
                e,
            )
        })
    }

    fn conference_list_size(&self, tox: &Tox) -> usize {
        unsafe { sys::tox_conference_get_chatlist_size(tox.as_ptr()) }
    }

    fn conference_list(&self, tox: &Tox, out: &mut [u32]) -> bool {
        if out.len() < self.conference_list_size(tox) {
            return false;
        }
        unsafe { sys::tox_conference_get_chatlist(tox.as_ptr(), out.as_mut_ptr()) };
        true
    }

    fn conference_type(&self, tox: &Tox, conference: u32, error: &mut ErrConferenceGetType) -> u32 {
        with_code(error, |e| unsafe { sys::tox_conference_get_type(tox.as_ptr(), conference, e) })
    }

    fn send_lossy_packet(
        &self,
        tox: &mut Tox,
        friend: u32,
        data: &[u8],
        error: &mut ErrFriendCustomPacket,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_friend_send_lossy_packet(
                tox.as_mut_ptr(),
                friend,
                data.as_ptr(),
                data.len(),
                e,
            )
        })
    }

    fn send_lossless_packet(
        &self,
        tox: &mut Tox,
        friend: u32,
        data: &[u8],
        error: &mut ErrFriendCustomPacket,
    ) -> bool {
        with_code(error, |e| unsafe {
            sys::tox_friend_send_lossless_packet(
                tox.as_mut_ptr(),
                friend,
                data.as_ptr(),
                data.len(),
                e,
            )
        })
    }
}
