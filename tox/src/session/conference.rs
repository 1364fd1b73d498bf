//! Conference (group chat) operations.

use super::Session;
use crate::boundary::Boundary;
use crate::call;
use crate::code::{
    ErrConferenceDelete, ErrConferenceGetType, ErrConferenceInvite, ErrConferenceJoin,
    ErrConferenceNew, ErrConferencePeerQuery, ErrConferenceSendMessage, ErrConferenceTitle,
};
use crate::guard;
use crate::marshal::{decode_text, query_fill};
use crate::types::{ConferenceType, MAX_MESSAGE_LENGTH, MAX_NAME_LENGTH, MessageType, PublicKey};

impl<B: Boundary> Session<B> {
    /// Create a text conference. Returns its number.
    #[must_use]
    pub fn conference_new(&mut self) -> Option<u32> {
        let (api, tox) = self.live_mut("tox_conference_new")?;
        call::call_variant("tox_conference_new", |err: &mut ErrConferenceNew| {
            api.conference_new(tox, err)
        })
    }

    /// Leave a conference.
    #[must_use]
    pub fn conference_delete(&mut self, conference: u32) -> bool {
        let Some((api, tox)) = self.live_mut("tox_conference_delete") else {
            return false;
        };
        call::call("tox_conference_delete", |err: &mut ErrConferenceDelete| {
            api.conference_delete(tox, conference, err)
        })
    }

    /// Invite a friend.
    #[must_use]
    pub fn conference_invite(&mut self, friend: u32, conference: u32) -> bool {
        let Some((api, tox)) = self.live_mut("tox_conference_invite") else {
            return false;
        };
        call::call("tox_conference_invite", |err: &mut ErrConferenceInvite| {
            api.conference_invite(tox, friend, conference, err)
        })
    }

    /// Join from the cookie of an invite. Returns the conference number.
    #[must_use]
    pub fn conference_join(&mut self, friend: u32, cookie: &[u8]) -> Option<u32> {
        if !guard::at_least("cookie", cookie.len(), 1) {
            return None;
        }
        let (api, tox) = self.live_mut("tox_conference_join")?;
        call::call_variant("tox_conference_join", |err: &mut ErrConferenceJoin| {
            api.conference_join(tox, friend, cookie, err)
        })
    }

    /// Send a message of at most 1372 bytes.
    #[must_use]
    pub fn conference_send_message(&mut self, conference: u32, text: &str) -> bool {
        self.conference_send(conference, MessageType::Normal, text)
    }

    /// Send an action of at most 1372 bytes.
    #[must_use]
    pub fn conference_send_action(&mut self, conference: u32, text: &str) -> bool {
        self.conference_send(conference, MessageType::Action, text)
    }

    fn conference_send(&mut self, conference: u32, kind: MessageType, text: &str) -> bool {
        if !guard::at_most("message", text.len(), MAX_MESSAGE_LENGTH) {
            return false;
        }
        let Some((api, tox)) = self.live_mut("tox_conference_send_message") else {
            return false;
        };
        call::call("tox_conference_send_message", |err: &mut ErrConferenceSendMessage| {
            api.conference_send_message(tox, conference, kind, text.as_bytes(), err)
        })
    }

    /// The conference title.
    #[must_use]
    pub fn conference_title(&self, conference: u32) -> Option<String> {
        let (api, tox) = self.live("tox_conference_get_title")?;
        let size = call::call_variant(
            "tox_conference_get_title_size",
            |err: &mut ErrConferenceTitle| api.conference_title_size(tox, conference, err),
        );
        let raw = query_fill(size, |buf| {
            call::call_variant("tox_conference_get_title", |err: &mut ErrConferenceTitle| {
                api.conference_title(tox, conference, buf, err)
            })
            .unwrap_or(false)
        })?;
        Some(decode_text(&raw))
    }

    /// Set the conference title, at most 128 bytes.
    #[must_use]
    pub fn conference_set_title(&mut self, conference: u32, title: &str) -> bool {
        if !guard::at_most("title", title.len(), MAX_NAME_LENGTH) {
            return false;
        }
        let Some((api, tox)) = self.live_mut("tox_conference_set_title") else {
            return false;
        };
        call::call("tox_conference_set_title", |err: &mut ErrConferenceTitle| {
            api.conference_set_title(tox, conference, title.as_bytes(), err)
        })
    }

    /// Number of peers, including ourselves.
    #[must_use]
    pub fn conference_peer_count(&self, conference: u32) -> Option<u32> {
        let (api, tox) = self.live("tox_conference_peer_count")?;
        call::call_variant("tox_conference_peer_count", |err: &mut ErrConferencePeerQuery| {
            api.conference_peer_count(tox, conference, err)
        })
    }

    /// A peer's name.
    #[must_use]
    pub fn conference_peer_name(&self, conference: u32, peer: u32) -> Option<String> {
        let (api, tox) = self.live("tox_conference_peer_get_name")?;
        let size = call::call_variant(
            "tox_conference_peer_get_name_size",
            |err: &mut ErrConferencePeerQuery| {
                api.conference_peer_name_size(tox, conference, peer, err)
            },
        );
        let raw = query_fill(size, |buf| {
            call::call_variant("tox_conference_peer_get_name", |err: &mut ErrConferencePeerQuery| {
                api.conference_peer_name(tox, conference, peer, buf, err)
            })
            .unwrap_or(false)
        })?;
        Some(decode_text(&raw))
    }

    /// Names of all peers, indexed by peer number. Absent if any row fails.
    #[must_use]
    pub fn conference_peer_names(&self, conference: u32) -> Option<Vec<String>> {
        let count = self.conference_peer_count(conference)?;
        (0..count)
            .map(|peer| self.conference_peer_name(conference, peer))
            .collect()
    }

    /// A peer's public key.
    #[must_use]
    pub fn conference_peer_public_key(&self, conference: u32, peer: u32) -> Option<PublicKey> {
        let (api, tox) = self.live("tox_conference_peer_get_public_key")?;
        call::call_variant(
            "tox_conference_peer_get_public_key",
            |err: &mut ErrConferencePeerQuery| {
                api.conference_peer_public_key(tox, conference, peer, err)
            },
        )
    }

    /// Whether a peer number refers to ourselves.
    #[must_use]
    pub fn conference_peer_is_ours(&self, conference: u32, peer: u32) -> Option<bool> {
        let (api, tox) = self.live("tox_conference_peer_number_is_ours")?;
        call::call_variant(
            "tox_conference_peer_number_is_ours",
            |err: &mut ErrConferencePeerQuery| {
                api.conference_peer_is_ours(tox, conference, peer, err)
            },
        )
    }

    /// The conference type.
    #[must_use]
    pub fn conference_type(&self, conference: u32) -> Option<ConferenceType> {
        let (api, tox) = self.live("tox_conference_get_type")?;
        call::call_variant("tox_conference_get_type", |err: &mut ErrConferenceGetType| {
            api.conference_type(tox, conference, err)
        })
        .and_then(ConferenceType::from_ffi)
    }

    /// All conference numbers.
    #[must_use]
    pub fn conference_list(&self) -> Option<Vec<u32>> {
        let (api, tox) = self.live("tox_conference_get_chatlist")?;
        query_fill(Some(api.conference_list_size(tox)), |buf| {
            api.conference_list(tox, buf)
        })
    }
}
