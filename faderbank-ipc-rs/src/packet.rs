//! Frame layout constants for the console IPC channel.
//!
//! Every frame starts with an 8-byte header:
//! - Bytes 0–3: packet type (`u32`, little-endian)
//! - Bytes 4–7: sequence number (`u32`, little-endian)
//!
//! A watch-list request follows the header with one 8-byte entry per
//! physical channel: `[channel: u32][page: u32]`.

use crate::error::IpcError;

// ---------------------------------------------------------------------------
// Packet types
// ---------------------------------------------------------------------------

/// Tag stored in the first word of every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u32)]
pub enum PacketType {
    /// Surface → console: report values for the listed channels.
    ReqEncoders = 1,
    /// Console → surface: encoder values for a watched channel.
    ResEncoders = 2,
}

impl PacketType {
    /// Raw wire value.
    pub const fn as_u32(self) -> u32 {
        self as u32
    }

    /// Parse a raw wire value.
    ///
    /// # Errors
    /// [`IpcError::UnknownPacketType`] for any value without a variant.
    pub fn from_u32(value: u32) -> Result<Self, IpcError> {
        match value {
            1 => Ok(PacketType::ReqEncoders),
            2 => Ok(PacketType::ResEncoders),
            other => Err(IpcError::UnknownPacketType(other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Sizes
// ---------------------------------------------------------------------------

/// Header length: packet type + sequence number.
pub const HEADER_LEN: usize = 8;

/// One watch-list entry: channel + page.
pub const ENTRY_LEN: usize = 8;

/// Number of entries in a watch-list request (one per physical channel).
pub const ENTRY_COUNT: usize = 8;

/// Total length of an encoded [`WatchListRequest`](crate::WatchListRequest).
pub const WATCH_LIST_FRAME_LEN: usize = HEADER_LEN + ENTRY_COUNT * ENTRY_LEN;

/// Size of the opaque per-channel encoder display payload.
pub const ENCODER_DATA_LEN: usize = 32;

// ---------------------------------------------------------------------------
// Reserved values
// ---------------------------------------------------------------------------

/// Channel number written for a physical channel with no logical address.
///
/// Only ever appears on the wire; the engine models the same state as a
/// tagged variant.
pub const UNASSIGNED_CHANNEL: u32 = u32::MAX;

// ---------------------------------------------------------------------------
// Little-endian helpers
// ---------------------------------------------------------------------------

/// Write `value` at `offset`. Caller guarantees `offset + 4 <= buf.len()`.
pub(crate) fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Read a `u32` at `offset`. Caller guarantees `offset + 4 <= buf.len()`.
pub(crate) fn get_u32(buf: &[u8], offset: usize) -> u32 {
    let mut word = [0u8; 4];
    word.copy_from_slice(&buf[offset..offset + 4]);
    u32::from_le_bytes(word)
}
