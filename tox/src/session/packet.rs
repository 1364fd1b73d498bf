//! Custom packets.

use super::Session;
use crate::boundary::Boundary;
use crate::call;
use crate::code::ErrFriendCustomPacket;
use crate::guard;
use crate::types::MAX_CUSTOM_PACKET_SIZE;

impl<B: Boundary> Session<B> {
    /// Send a lossy packet of at most 1373 bytes. The first byte selects the
    /// packet id and must be in `200..=254`.
    #[must_use]
    pub fn send_lossy_packet(&mut self, friend: u32, data: &[u8]) -> bool {
        if !guard::at_most("packet", data.len(), MAX_CUSTOM_PACKET_SIZE) {
            return false;
        }
        let Some((api, tox)) = self.live_mut("tox_friend_send_lossy_packet") else {
            return false;
        };
        call::call("tox_friend_send_lossy_packet", |err: &mut ErrFriendCustomPacket| {
            api.send_lossy_packet(tox, friend, data, err)
        })
    }

    /// Send a lossless packet of at most 1373 bytes. The first byte selects
    /// the packet id and must be in `160..=191`.
    #[must_use]
    pub fn send_lossless_packet(&mut self, friend: u32, data: &[u8]) -> bool {
        if !guard::at_most("packet", data.len(), MAX_CUSTOM_PACKET_SIZE) {
            return false;
        }
        let Some((api, tox)) = self.live_mut("tox_friend_send_lossless_packet") else {
            return false;
        };
        call::call("tox_friend_send_lossless_packet", |err: &mut ErrFriendCustomPacket| {
            api.send_lossless_packet(tox, friend, data, err)
        })
    }
}
