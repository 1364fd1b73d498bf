//! Friend operations.

use super::Session;
use crate::boundary::Boundary;
use crate::call;
use crate::code::{
    ErrFriendAdd, ErrFriendByPublicKey, ErrFriendDelete, ErrFriendGetLastOnline,
    ErrFriendGetPublicKey, ErrFriendQuery, ErrFriendSendMessage, ErrSetTyping,
};
use crate::guard;
use crate::marshal::{decode_text, query_fill};
use crate::types::{
    Address, Connection, MAX_FRIEND_REQUEST_LENGTH, MAX_MESSAGE_LENGTH, MessageType, PublicKey,
    UserStatus,
};

impl<B: Boundary> Session<B> {
    /// Send a friend request. Returns the new friend number.
    ///
    /// `address` must be 38 bytes; `message` 1 to 1016 bytes.
    #[must_use]
    pub fn friend_add(&mut self, address: impl AsRef<[u8]>, message: &str) -> Option<u32> {
        let address = guard::exact::<Address>("address", address.as_ref())?;
        if !guard::at_least("message", message.len(), 1)
            || !guard::at_most("message", message.len(), MAX_FRIEND_REQUEST_LENGTH)
        {
            return None;
        }
        let (api, tox) = self.live_mut("tox_friend_add")?;
        call::call_variant("tox_friend_add", |err: &mut ErrFriendAdd| {
            api.friend_add(tox, &address, message.as_bytes(), err)
        })
    }

    /// Add a friend without sending a request, e.g. to accept one.
    #[must_use]
    pub fn friend_add_norequest(&mut self, public_key: impl AsRef<[u8]>) -> Option<u32> {
        let key = guard::exact::<PublicKey>("public_key", public_key.as_ref())?;
        let (api, tox) = self.live_mut("tox_friend_add_norequest")?;
        call::call_variant("tox_friend_add_norequest", |err: &mut ErrFriendAdd| {
            api.friend_add_norequest(tox, &key, err)
        })
    }

    /// Remove a friend. The number may be reused by a later add.
    #[must_use]
    pub fn friend_delete(&mut self, friend: u32) -> bool {
        let Some((api, tox)) = self.live_mut("tox_friend_delete") else {
            return false;
        };
        call::call("tox_friend_delete", |err: &mut ErrFriendDelete| {
            api.friend_delete(tox, friend, err)
        })
    }

    /// Whether `friend` is a valid friend number.
    #[must_use]
    pub fn friend_exists(&self, friend: u32) -> bool {
        self.live("tox_friend_exists")
            .is_some_and(|(api, tox)| api.friend_exists(tox, friend))
    }

    /// Friend number for a public key.
    #[must_use]
    pub fn friend_by_public_key(&self, public_key: impl AsRef<[u8]>) -> Option<u32> {
        let key = guard::exact::<PublicKey>("public_key", public_key.as_ref())?;
        let (api, tox) = self.live("tox_friend_by_public_key")?;
        call::call_variant("tox_friend_by_public_key", |err: &mut ErrFriendByPublicKey| {
            api.friend_by_public_key(tox, &key, err)
        })
    }

    /// All friend numbers.
    #[must_use]
    pub fn friend_list(&self) -> Option<Vec<u32>> {
        let (api, tox) = self.live("tox_self_get_friend_list")?;
        query_fill(Some(api.friend_list_size(tox)), |buf| api.friend_list(tox, buf))
    }

    /// A friend's long-term public key.
    #[must_use]
    pub fn friend_public_key(&self, friend: u32) -> Option<PublicKey> {
        let (api, tox) = self.live("tox_friend_get_public_key")?;
        call::call_variant("tox_friend_get_public_key", |err: &mut ErrFriendGetPublicKey| {
            api.friend_public_key(tox, friend, err)
        })
    }

    /// When the friend was last seen online, in seconds since the Unix epoch.
    #[must_use]
    pub fn friend_last_online(&self, friend: u32) -> Option<u64> {
        let (api, tox) = self.live("tox_friend_get_last_online")?;
        call::call_variant("tox_friend_get_last_online", |err: &mut ErrFriendGetLastOnline| {
            api.friend_last_online(tox, friend, err)
        })
    }

    /// A friend's nickname.
    #[must_use]
    pub fn friend_name(&self, friend: u32) -> Option<String> {
        let (api, tox) = self.live("tox_friend_get_name")?;
        let size = call::call_variant("tox_friend_get_name_size", |err: &mut ErrFriendQuery| {
            api.friend_name_size(tox, friend, err)
        });
        let raw = query_fill(size, |buf| {
            call::call_variant("tox_friend_get_name", |err: &mut ErrFriendQuery| {
                api.friend_name(tox, friend, buf, err)
            })
            .unwrap_or(false)
        })?;
        Some(decode_text(&raw))
    }

    /// A friend's status message.
    #[must_use]
    pub fn friend_status_message(&self, friend: u32) -> Option<String> {
        let (api, tox) = self.live("tox_friend_get_status_message")?;
        let size = call::call_variant(
            "tox_friend_get_status_message_size",
            |err: &mut ErrFriendQuery| api.friend_status_message_size(tox, friend, err),
        );
        let raw = query_fill(size, |buf| {
            call::call_variant("tox_friend_get_status_message", |err: &mut ErrFriendQuery| {
                api.friend_status_message(tox, friend, buf, err)
            })
            .unwrap_or(false)
        })?;
        Some(decode_text(&raw))
    }

    /// A friend's presence.
    #[must_use]
    pub fn friend_status(&self, friend: u32) -> Option<UserStatus> {
        let (api, tox) = self.live("tox_friend_get_status")?;
        call::call_variant("tox_friend_get_status", |err: &mut ErrFriendQuery| {
            api.friend_status(tox, friend, err)
        })
        .and_then(UserStatus::from_ffi)
    }

    /// A friend's reachability.
    #[must_use]
    pub fn friend_connection_status(&self, friend: u32) -> Option<Connection> {
        let (api, tox) = self.live("tox_friend_get_connection_status")?;
        call::call_variant("tox_friend_get_connection_status", |err: &mut ErrFriendQuery| {
            api.friend_connection_status(tox, friend, err)
        })
        .and_then(Connection::from_ffi)
    }

    /// Whether a friend is typing to us.
    #[must_use]
    pub fn friend_typing(&self, friend: u32) -> Option<bool> {
        let (api, tox) = self.live("tox_friend_get_typing")?;
        call::call_variant("tox_friend_get_typing", |err: &mut ErrFriendQuery| {
            api.friend_typing(tox, friend, err)
        })
    }

    /// Tell a friend whether we are typing.
    #[must_use]
    pub fn set_typing(&mut self, friend: u32, typing: bool) -> bool {
        let Some((api, tox)) = self.live_mut("tox_self_set_typing") else {
            return false;
        };
        call::call("tox_self_set_typing", |err: &mut ErrSetTyping| {
            api.set_typing(tox, friend, typing, err)
        })
    }

    /// Send a message of 1 to 1372 bytes. Returns its id for read receipts.
    #[must_use]
    pub fn friend_send_message(
        &mut self,
        friend: u32,
        kind: MessageType,
        text: &str,
    ) -> Option<u32> {
        if !guard::at_least("message", text.len(), 1)
            || !guard::at_most("message", text.len(), MAX_MESSAGE_LENGTH)
        {
            return None;
        }
        let (api, tox) = self.live_mut("tox_friend_send_message")?;
        call::call_variant("tox_friend_send_message", |err: &mut ErrFriendSendMessage| {
            api.friend_send_message(tox, friend, kind, text.as_bytes(), err)
        })
    }
}
