//! File transfer operations.

use super::Session;
use crate::boundary::Boundary;
use crate::call;
use crate::code::{ErrFileControl, ErrFileGet, ErrFileSeek, ErrFileSend, ErrFileSendChunk};
use crate::guard;
use crate::types::{FileControl, FileId, FileKind, MAX_FILENAME_LENGTH};

impl<B: Boundary> Session<B> {
    /// Resume, pause or cancel a transfer.
    #[must_use]
    pub fn file_control(&mut self, friend: u32, file: u32, control: FileControl) -> bool {
        let Some((api, tox)) = self.live_mut("tox_file_control") else {
            return false;
        };
        call::call("tox_file_control", |err: &mut ErrFileControl| {
            api.file_control(tox, friend, file, control, err)
        })
    }

    /// Move the read position of an incoming transfer before resuming it.
    #[must_use]
    pub fn file_seek(&mut self, friend: u32, file: u32, position: u64) -> bool {
        let Some((api, tox)) = self.live_mut("tox_file_seek") else {
            return false;
        };
        call::call("tox_file_seek", |err: &mut ErrFileSeek| {
            api.file_seek(tox, friend, file, position, err)
        })
    }

    /// The id of a transfer.
    #[must_use]
    pub fn file_id(&self, friend: u32, file: u32) -> Option<FileId> {
        let (api, tox) = self.live("tox_file_get_file_id")?;
        call::call_variant("tox_file_get_file_id", |err: &mut ErrFileGet| {
            api.file_id(tox, friend, file, err)
        })
    }

    /// Offer a file. Returns the new file number.
    ///
    /// `file_id`, when given, must be 32 bytes; `filename` at most 255 bytes.
    /// Pass `u64::MAX` as `size` for a stream of unknown length.
    #[must_use]
    pub fn file_send(
        &mut self,
        friend: u32,
        kind: FileKind,
        size: u64,
        file_id: Option<&[u8]>,
        filename: &str,
    ) -> Option<u32> {
        let file_id = match file_id {
            Some(raw) => Some(guard::exact::<FileId>("file_id", raw)?),
            None => None,
        };
        if !guard::at_most("filename", filename.len(), MAX_FILENAME_LENGTH) {
            return None;
        }
        let (api, tox) = self.live_mut("tox_file_send")?;
        call::call_variant("tox_file_send", |err: &mut ErrFileSend| {
            api.file_send(
                tox,
                friend,
                kind.to_ffi(),
                size,
                file_id.as_ref(),
                filename.as_bytes(),
                err,
            )
        })
    }

    /// Answer a chunk request.
    #[must_use]
    pub fn file_send_chunk(&mut self, friend: u32, file: u32, position: u64, data: &[u8]) -> bool {
        let Some((api, tox)) = self.live_mut("tox_file_send_chunk") else {
            return false;
        };
        call::call("tox_file_send_chunk", |err: &mut ErrFileSendChunk| {
            api.file_send_chunk(tox, friend, file, position, data, err)
        })
    }
}
